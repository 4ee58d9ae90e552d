use anyhow::Result;
use chrono::NaiveDate;

use crate::models::PriceSeries;

/// Field names use the provider's internal `$` prefix on the wire.
pub const FIELD_PREFIX: char = '$';

/// Prefix a field name with the provider convention, if not already prefixed.
pub fn normalize_field(field: &str) -> String {
    if field.starts_with(FIELD_PREFIX) {
        field.to_string()
    } else {
        format!("{FIELD_PREFIX}{field}")
    }
}

/// Strip the provider prefix back off for display.
pub fn strip_field(field: &str) -> String {
    field.strip_prefix(FIELD_PREFIX).unwrap_or(field).to_string()
}

/// Abstract interface to the quantitative data source.
///
/// Calls are synchronous and blocking; a single best-effort attempt, no retries.
pub trait QuantDataProvider {
    /// Fetch tabular rows keyed by (date, instrument) for the given symbols and
    /// `$`-prefixed fields over the inclusive date range.
    fn features(
        &self,
        symbols: &[String],
        fields: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries>;
}
