//! Strict data-loading path: real provider data or a typed error, never a
//! silent substitute. The degrade-don't-fail behavior lives in
//! [`crate::data::fallback`].

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use crate::config::ProviderBounds;
use crate::data::capability::ProviderCapability;
use crate::data::provider::{normalize_field, strip_field};
use crate::models::{DataRequest, PriceSeries};

/// Everything that can go wrong on the strict loading path. All variants are
/// caught at the action boundary and shown to the user; none are fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Provider not initialized or reachable. Recoverable by falling back to
    /// the mock path.
    ProviderUnavailable,
    /// Query lies outside the provider's fixed window. Carries all four dates
    /// for user display; never retried.
    DateOutOfRange {
        bounds_start: NaiveDate,
        bounds_end: NaiveDate,
        query_start: NaiveDate,
        query_end: NaiveDate,
    },
    /// Valid request, empty result (no trading days, unknown symbol, ...).
    NoDataFound,
    /// Request invariant broken before any provider call.
    InvalidRequest(String),
    /// Provider-internal failure.
    Internal(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::ProviderUnavailable => write!(
                f,
                "data provider not initialized or unavailable; check the provider installation and data path"
            ),
            DataError::DateOutOfRange {
                bounds_start,
                bounds_end,
                query_start,
                query_end,
            } => write!(
                f,
                "query date is out of the available data range. Available: {bounds_start} to {bounds_end}. Queried: {query_start} to {query_end}."
            ),
            DataError::NoDataFound => write!(
                f,
                "no data found for the specified date range; check the stock codes or try other dates"
            ),
            DataError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            DataError::Internal(msg) => write!(f, "data loading failed: {msg}"),
        }
    }
}

impl std::error::Error for DataError {}

/// Resolves a [`DataRequest`] against the provider, memoizing successful
/// results keyed by the full request.
pub struct DataLoader<'a> {
    capability: &'a ProviderCapability,
    bounds: ProviderBounds,
    cache: HashMap<DataRequest, PriceSeries>,
}

impl<'a> DataLoader<'a> {
    pub fn new(capability: &'a ProviderCapability, bounds: ProviderBounds) -> Self {
        Self {
            capability,
            bounds,
            cache: HashMap::new(),
        }
    }

    pub fn bounds(&self) -> ProviderBounds {
        self.bounds
    }

    /// Load real data for `request`, normalizing field names to the provider's
    /// `$` convention for the query and stripping them back on return.
    pub fn load(&mut self, request: &DataRequest) -> Result<PriceSeries, DataError> {
        request
            .validate()
            .map_err(|e| DataError::InvalidRequest(e.to_string()))?;

        if let Some(cached) = self.cache.get(request) {
            log::debug!("[loader] cache hit for {:?}", request.symbols);
            return Ok(cached.clone());
        }

        let Some(provider) = self.capability.provider() else {
            return Err(DataError::ProviderUnavailable);
        };

        if !self.bounds.contains(request.start_date, request.end_date) {
            return Err(DataError::DateOutOfRange {
                bounds_start: self.bounds.start,
                bounds_end: self.bounds.end,
                query_start: request.start_date,
                query_end: request.end_date,
            });
        }

        let wire_fields: Vec<String> = request.fields.iter().map(|f| normalize_field(f)).collect();
        let series = provider
            .features(
                &request.symbols,
                &wire_fields,
                request.start_date,
                request.end_date,
            )
            .map_err(|e| DataError::Internal(e.to_string()))?;

        if series.is_empty() {
            return Err(DataError::NoDataFound);
        }

        let series = series.map_fields(|f| strip_field(f));
        log::info!(
            "[loader] {} rows for {} symbol(s), {} field(s)",
            series.len(),
            request.symbols.len(),
            series.fields.len(),
        );

        self.cache.insert(request.clone(), series.clone());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRow;
    use anyhow::{Result, bail};
    use std::cell::Cell;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn request(start: NaiveDate, end: NaiveDate) -> DataRequest {
        DataRequest::new(
            vec!["sh600000".into()],
            start,
            end,
            vec!["close".into()],
        )
    }

    /// Provider returning one wire-named row per call.
    struct StubProvider {
        empty: bool,
        fail: bool,
    }

    impl StubProvider {
        fn ok() -> Self {
            Self {
                empty: false,
                fail: false,
            }
        }
    }

    impl crate::data::provider::QuantDataProvider for StubProvider {
        fn features(
            &self,
            symbols: &[String],
            fields: &[String],
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<PriceSeries> {
            if self.fail {
                bail!("backend exploded");
            }
            if self.empty {
                return Ok(PriceSeries::empty(fields.to_vec()));
            }
            assert!(fields.iter().all(|f| f.starts_with('$')), "wire fields must be $-prefixed");
            Ok(PriceSeries::from_rows(
                fields.to_vec(),
                vec![PriceRow {
                    date: start,
                    instrument: symbols[0].clone(),
                    values: vec![10.0; fields.len()],
                }],
            ))
        }
    }

    /// Counts provider hits so cache behavior is observable from outside.
    struct CountingProvider {
        calls: Rc<Cell<usize>>,
    }

    impl crate::data::provider::QuantDataProvider for CountingProvider {
        fn features(
            &self,
            symbols: &[String],
            fields: &[String],
            start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<PriceSeries> {
            self.calls.set(self.calls.get() + 1);
            Ok(PriceSeries::from_rows(
                fields.to_vec(),
                vec![PriceRow {
                    date: start,
                    instrument: symbols[0].clone(),
                    values: vec![10.0; fields.len()],
                }],
            ))
        }
    }

    fn available(stub: StubProvider) -> ProviderCapability {
        ProviderCapability::Available(Box::new(stub))
    }

    #[test]
    fn unavailable_provider_is_a_typed_error() {
        let capability = ProviderCapability::Unavailable(
            crate::data::capability::UnavailableReason::BackendMissing,
        );
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let err = loader
            .load(&request(d(2020, 9, 1), d(2020, 9, 25)))
            .unwrap_err();
        assert_eq!(err, DataError::ProviderUnavailable);
    }

    #[test]
    fn end_date_past_bounds_carries_the_literal_bound() {
        let capability = available(StubProvider::ok());
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let err = loader
            .load(&request(d(2020, 9, 1), d(2020, 9, 26)))
            .unwrap_err();
        match err {
            DataError::DateOutOfRange {
                bounds_end,
                query_end,
                ..
            } => {
                assert_eq!(bounds_end, d(2020, 9, 25));
                assert_eq!(query_end, d(2020, 9, 26));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn start_date_before_bounds_is_rejected() {
        let capability = available(StubProvider::ok());
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let err = loader
            .load(&request(d(1999, 11, 9), d(2020, 9, 25)))
            .unwrap_err();
        assert!(matches!(err, DataError::DateOutOfRange { .. }));
    }

    #[test]
    fn empty_result_is_no_data_found() {
        let capability = available(StubProvider {
            empty: true,
            ..StubProvider::ok()
        });
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let err = loader
            .load(&request(d(2020, 9, 1), d(2020, 9, 25)))
            .unwrap_err();
        assert_eq!(err, DataError::NoDataFound);
    }

    #[test]
    fn provider_failure_is_internal() {
        let capability = available(StubProvider {
            fail: true,
            ..StubProvider::ok()
        });
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let err = loader
            .load(&request(d(2020, 9, 1), d(2020, 9, 25)))
            .unwrap_err();
        assert!(matches!(err, DataError::Internal(msg) if msg.contains("backend exploded")));
    }

    #[test]
    fn returned_fields_are_stripped_back() {
        let capability = available(StubProvider::ok());
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let series = loader.load(&request(d(2020, 9, 1), d(2020, 9, 25))).unwrap();
        assert_eq!(series.fields, vec!["close".to_string()]);
    }

    #[test]
    fn identical_requests_are_memoized() {
        let calls = Rc::new(Cell::new(0));
        let capability = ProviderCapability::Available(Box::new(CountingProvider {
            calls: Rc::clone(&calls),
        }));
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let req = request(d(2020, 9, 1), d(2020, 9, 25));

        let first = loader.load(&req).unwrap();
        let second = loader.load(&req).unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);

        // Distinct request misses the cache.
        loader
            .load(&request(d(2020, 9, 2), d(2020, 9, 25)))
            .unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn invalid_request_never_reaches_the_provider() {
        let capability = available(StubProvider::ok());
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let mut req = request(d(2020, 9, 1), d(2020, 9, 25));
        req.fields.clear();
        assert!(matches!(
            loader.load(&req).unwrap_err(),
            DataError::InvalidRequest(_)
        ));
    }
}
