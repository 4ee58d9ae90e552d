//! Data-provider configuration (Immutable Blueprints)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed historical window within which the provider guarantees data.
///
/// The defaults match the bundled CN daily dataset; override via
/// [`ProviderSettings`] when pointing at a different data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ProviderBounds {
    const DEFAULT_START: (i32, u32, u32) = (1999, 11, 10);
    const DEFAULT_END: (i32, u32, u32) = (2020, 9, 25);

    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True if the queried interval lies entirely within the bounds.
    pub fn contains(&self, query_start: NaiveDate, query_end: NaiveDate) -> bool {
        query_start >= self.start && query_end <= self.end
    }
}

impl Default for ProviderBounds {
    fn default() -> Self {
        let (sy, sm, sd) = Self::DEFAULT_START;
        let (ey, em, ed) = Self::DEFAULT_END;
        Self {
            start: NaiveDate::from_ymd_opt(sy, sm, sd).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(ey, em, ed).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for ProviderBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Where the provider's local data lives and which dates it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Local data directory the provider is initialized from.
    pub provider_uri: PathBuf,
    pub bounds: ProviderBounds,
}

impl ProviderSettings {
    pub const DEFAULT_URI: &'static str = ".qlib/qlib_data/cn_data";
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider_uri: PathBuf::from(Self::DEFAULT_URI),
            bounds: ProviderBounds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn default_bounds_match_bundled_dataset() {
        let bounds = ProviderBounds::default();
        assert_eq!(bounds.start, d(1999, 11, 10));
        assert_eq!(bounds.end, d(2020, 9, 25));
    }

    #[test]
    fn contains_is_inclusive_at_both_edges() {
        let bounds = ProviderBounds::default();
        assert!(bounds.contains(d(1999, 11, 10), d(2020, 9, 25)));
        assert!(!bounds.contains(d(1999, 11, 9), d(2020, 9, 25)));
        assert!(!bounds.contains(d(1999, 11, 10), d(2020, 9, 26)));
    }
}
