//! Plain-text table rendering for the CLI shell.

use tabled::{builder::Builder, settings::Style};

use crate::models::{BacktestReport, PriceSeries, TrainingReport};

fn finish(mut builder: Builder) -> String {
    builder.build().with(Style::sharp()).to_string()
}

/// First `limit` rows of the loaded table, original front end's data preview.
pub fn price_preview(series: &PriceSeries, limit: usize) -> String {
    let mut builder = Builder::default();
    let mut header = vec!["date".to_string(), "instrument".to_string()];
    header.extend(series.fields.iter().cloned());
    builder.push_record(header);

    for row in series.head(limit) {
        let mut record = vec![row.date.to_string(), row.instrument.clone()];
        record.extend(row.values.iter().map(|v| format!("{v:.2}")));
        builder.push_record(record);
    }
    finish(builder)
}

/// Per-field summary statistics table.
pub fn data_statistics(series: &PriceSeries) -> String {
    let mut builder = Builder::default();
    builder.push_record(["field", "count", "mean", "std", "min", "max"]);
    for summary in series.describe() {
        builder.push_record([
            summary.field,
            summary.count.to_string(),
            format!("{:.4}", summary.mean),
            format!("{:.4}", summary.std),
            format!("{:.4}", summary.min),
            format!("{:.4}", summary.max),
        ]);
    }
    finish(builder)
}

/// Training results plus the echoed hyper-parameters.
pub fn training_report(report: &TrainingReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["metric", "value"]);
    builder.push_record(["Model Type", &report.model_type.to_string()]);
    builder.push_record(["Training Stocks Count", &report.symbol_count.to_string()]);
    builder.push_record(["Training Samples", &report.sample_count.to_string()]);
    builder.push_record(["Training Accuracy", &format!("{:.2}%", report.train_accuracy * 100.0)]);
    builder.push_record([
        "Validation Accuracy",
        &format!("{:.2}%", report.validation_accuracy * 100.0),
    ]);
    builder.push_record(["Training Time", &format!("{}s", report.training_secs)]);
    builder.push_record(["Learning Rate", &report.learning_rate.to_string()]);
    builder.push_record(["Max Depth", &report.max_depth.to_string()]);
    builder.push_record(["N Estimators", &report.n_estimators.to_string()]);
    finish(builder)
}

/// Simulated loss curve, one row per epoch.
pub fn loss_curve(report: &TrainingReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["epoch", "train loss", "validation loss"]);
    for point in &report.loss_curve {
        builder.push_record([
            point.epoch.to_string(),
            format!("{:.4}", point.train_loss),
            format!("{:.4}", point.val_loss),
        ]);
    }
    finish(builder)
}

/// The key-metric block shown right after a backtest completes.
pub fn key_metrics(report: &BacktestReport) -> String {
    let stats = &report.stats;
    let mut builder = Builder::default();
    builder.push_record(["metric", "value"]);
    builder.push_record(["Total Return", &format!("{:.2}%", stats.total_return * 100.0)]);
    builder.push_record(["Annual Return", &format!("{:.2}%", stats.annual_return * 100.0)]);
    builder.push_record(["Sharpe Ratio", &format!("{:.2}", stats.sharpe_ratio)]);
    builder.push_record(["Max Drawdown", &format!("{:.2}%", stats.max_drawdown * 100.0)]);
    builder.push_record(["Win Rate", &format!("{:.2}%", stats.win_rate * 100.0)]);
    builder.push_record(["Calmar Ratio", &format!("{:.2}", stats.calmar_ratio)]);
    builder.push_record([
        "Annual Volatility",
        &format!("{:.2}%", stats.annual_volatility * 100.0),
    ]);
    builder.push_record(["Trading Days", &stats.trading_days.to_string()]);
    finish(builder)
}

/// Detailed distribution statistics of the daily returns.
pub fn detailed_statistics(report: &BacktestReport) -> String {
    let stats = &report.stats;
    let mut builder = Builder::default();
    builder.push_record(["Metric", "Value"]);
    builder.push_record(["Avg Daily Return", &format!("{:.4}%", stats.mean_daily * 100.0)]);
    builder.push_record([
        "Std Dev Daily Return",
        &format!("{:.4}%", stats.std_daily * 100.0),
    ]);
    builder.push_record(["Skewness", &format!("{:.3}", stats.skewness)]);
    builder.push_record(["Kurtosis", &format!("{:.3}", stats.kurtosis)]);
    builder.push_record(["VaR (95%)", &format!("{:.4}%", stats.var_95 * 100.0)]);
    finish(builder)
}

/// Month-over-month returns of the cumulative curve.
/// Empty means "not enough data", which is a valid displayable state.
pub fn monthly_returns(report: &BacktestReport) -> String {
    if report.monthly_returns.is_empty() {
        return "Not enough data to generate monthly returns.".to_string();
    }
    let mut builder = Builder::default();
    builder.push_record(["year", "month", "return"]);
    for monthly in &report.monthly_returns {
        builder.push_record([
            monthly.year.to_string(),
            monthly.month.to_string(),
            format!("{:.2}%", monthly.value * 100.0),
        ]);
    }
    finish(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{run_backtest, simulate_training};
    use crate::models::{BacktestConfig, PriceRow, TrainingConfig};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn preview_limits_rows_and_keeps_all_fields() {
        let rows = (1..=5)
            .map(|day| PriceRow {
                date: d(2020, 9, day),
                instrument: "sh600000".into(),
                values: vec![10.0, 11.0],
            })
            .collect();
        let series = PriceSeries::from_rows(vec!["open".into(), "close".into()], rows);
        let table = price_preview(&series, 2);
        assert!(table.contains("open") && table.contains("close"));
        assert!(table.contains("2020-09-02"));
        assert!(!table.contains("2020-09-03"));
    }

    #[test]
    fn training_table_shows_percent_accuracies() {
        let report = simulate_training(&TrainingConfig {
            symbols: vec!["A".into(), "B".into()],
            start_date: d(2022, 1, 1),
            end_date: d(2022, 12, 31),
            ..TrainingConfig::default()
        });
        let table = training_report(&report);
        assert!(table.contains("73.00%"));
        assert!(table.contains("68.00%"));
    }

    #[test]
    fn monthly_table_reports_insufficient_data() {
        let report = run_backtest(&BacktestConfig {
            start_date: d(2023, 1, 2),
            end_date: d(2023, 1, 31),
            ..BacktestConfig::default()
        });
        assert!(monthly_returns(&report).contains("Not enough data"));
    }
}
