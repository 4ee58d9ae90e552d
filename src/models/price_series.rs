use anyhow::{Result, bail};
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::utils::mean_and_stddev;

/// One data-view query as collected from the front end.
///
/// Invariants (checked by [`DataRequest::validate`]): symbols and fields are
/// non-empty, start precedes end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataRequest {
    pub symbols: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub fields: Vec<String>,
}

impl DataRequest {
    pub fn new(
        symbols: Vec<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        fields: Vec<String>,
    ) -> Self {
        Self {
            symbols,
            start_date,
            end_date,
            fields,
        }
    }

    /// Parse a comma-separated symbol list, dropping empty segments.
    pub fn parse_symbols(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            bail!("enter at least one stock code");
        }
        if self.fields.is_empty() {
            bail!("select at least one data field");
        }
        if self.start_date >= self.end_date {
            bail!("start date must be earlier than end date");
        }
        Ok(())
    }
}

/// One observation: all requested fields for (date, instrument).
/// `values` is parallel to the owning series' `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub instrument: String,
    pub values: Vec<f64>,
}

/// Tabular price data ordered by (date, instrument).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub fields: Vec<String>,
    pub rows: Vec<PriceRow>,
}

/// Per-field summary in the style of `DataFrame.describe()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub field: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl PriceSeries {
    pub fn empty(fields: Vec<String>) -> Self {
        Self {
            fields,
            rows: Vec::new(),
        }
    }

    /// Build a series, enforcing the (date, instrument) ordering invariant.
    pub fn from_rows(fields: Vec<String>, mut rows: Vec<PriceRow>) -> Self {
        rows.sort_by(|a, b| (a.date, &a.instrument).cmp(&(b.date, &b.instrument)));
        Self { fields, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// All values of one field, in row order.
    pub fn column(&self, field: &str) -> Option<Vec<f64>> {
        let idx = self.field_index(field)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }

    pub fn head(&self, n: usize) -> &[PriceRow] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Rename every field through `f` (used to strip the provider prefix).
    pub fn map_fields(mut self, f: impl Fn(&str) -> String) -> Self {
        self.fields = self.fields.iter().map(|name| f(name)).collect();
        self
    }

    pub fn describe(&self) -> Vec<FieldSummary> {
        self.fields
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let values: Vec<f64> = self.rows.iter().map(|r| r.values[idx]).collect();
                let (mean, std) = mean_and_stddev(&values);
                let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                FieldSummary {
                    field: field.clone(),
                    count: values.len(),
                    mean,
                    std,
                    min: if values.is_empty() { 0.0 } else { min },
                    max: if values.is_empty() { 0.0 } else { max },
                }
            })
            .collect()
    }

    /// Render the whole table as CSV, header included.
    pub fn to_csv(&self) -> String {
        let header = ["date", "instrument"]
            .into_iter()
            .map(str::to_string)
            .chain(self.fields.iter().cloned())
            .join(",");

        let mut out = header;
        out.push('\n');
        for row in &self.rows {
            let line = [row.date.to_string(), row.instrument.clone()]
                .into_iter()
                .chain(row.values.iter().map(|v| v.to_string()))
                .join(",");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
