use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use crate::models::PriceSeries;

/// Default export name in the style `quant_data_YYYYmmdd_HHMMSS.csv`.
pub fn default_csv_filename() -> PathBuf {
    PathBuf::from(format!(
        "quant_data_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Write the currently loaded table to `path` as CSV.
pub fn export_csv(series: &PriceSeries, path: &Path) -> Result<()> {
    std::fs::write(path, series.to_csv())
        .with_context(|| format!("writing CSV export to {}", path.display()))?;
    log::info!("[export] {} rows -> {}", series.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRow;
    use chrono::NaiveDate;

    #[test]
    fn export_writes_the_rendered_table() {
        let series = PriceSeries::from_rows(
            vec!["close".into()],
            vec![PriceRow {
                date: NaiveDate::from_ymd_opt(2020, 9, 1).unwrap(),
                instrument: "sh600000".into(),
                values: vec![10.0],
            }],
        );
        let path = std::env::temp_dir().join("quant_lab_export_test.csv");
        export_csv(&series, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, series.to_csv());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn default_filename_has_csv_extension() {
        let name = default_csv_filename();
        assert_eq!(name.extension().and_then(|e| e.to_str()), Some("csv"));
    }
}
