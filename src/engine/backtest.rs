//! Deterministic strategy-backtest simulation.
//!
//! Entry point: [`run_backtest`].
//!
//! # Approach
//! The trading calendar is every business day between start and end inclusive.
//! Each day's return is a closed form over the day index and the config:
//! a strategy-scaled base, a one-year seasonal sine, a slight upward trend and
//! a max-position adjustment. The cumulative curve is the running product of
//! `(1 + r)`; portfolio value scales it by the initial capital. Statistics are
//! derived from the realized sequence in [`super::metrics`]. A benchmark
//! series is simulated independently for the comparison chart, and the
//! cumulative curve is resampled to month ends for the monthly table.
//!
//! An empty calendar is not an error: the report comes back with empty series
//! and all-zero statistics.

use std::f64::consts::TAU;

use crate::config::constants::{TRADING_DAYS_PER_YEAR, backtest::*};
use crate::engine::calendar::{business_days, month_end_indices};
use crate::models::{BacktestConfig, BacktestReport, MonthlyReturn, PerformanceStats};
use chrono::Datelike;

/// Run one simulated backtest. Pure: same config, identical report.
pub fn run_backtest(config: &BacktestConfig) -> BacktestReport {
    let dates = business_days(config.start_date, config.end_date);

    if dates.is_empty() {
        log::warn!(
            "[backtest] no trading days between {} and {}; returning null report",
            config.start_date,
            config.end_date,
        );
        return BacktestReport::default();
    }

    log::info!(
        "[backtest] {} | {} to {} | {} trading day(s) | capital={}",
        config.strategy,
        config.start_date,
        config.end_date,
        dates.len(),
        config.initial_capital,
    );

    let base = BASE_DAILY_RETURN * config.strategy.return_multiplier();
    let daily_returns: Vec<f64> = (0..dates.len())
        .map(|i| daily_return(i, base, config.max_position))
        .collect();

    let mut acc = 1.0;
    let cumulative_returns: Vec<f64> = daily_returns
        .iter()
        .map(|r| {
            acc *= 1.0 + r;
            acc
        })
        .collect();

    let portfolio_value: Vec<f64> = cumulative_returns
        .iter()
        .map(|c| c * config.initial_capital)
        .collect();

    let stats = PerformanceStats::from_returns(&daily_returns, &cumulative_returns);
    let monthly_returns = monthly_returns(&dates, &cumulative_returns);
    let benchmark_cumulative = benchmark_series(dates.len());

    log::info!(
        "[backtest] COMPLETE | total={:.2}% | annual={:.2}% | sharpe={:.2} | max_dd={:.2}% | win_rate={:.1}%",
        stats.total_return * 100.0,
        stats.annual_return * 100.0,
        stats.sharpe_ratio,
        stats.max_drawdown * 100.0,
        stats.win_rate * 100.0,
    );

    BacktestReport {
        dates,
        daily_returns,
        cumulative_returns,
        portfolio_value,
        benchmark_cumulative,
        monthly_returns,
        stats,
    }
}

/// Closed-form daily return for zero-based day index `i`.
fn daily_return(i: usize, base: f64, max_position: f64) -> f64 {
    let t = i as f64;
    let seasonal = (t * TAU / TRADING_DAYS_PER_YEAR).sin() * SEASONAL_AMPLITUDE;
    let trend = t * TREND_PER_DAY;
    let position = (max_position - NEUTRAL_MAX_POSITION) * POSITION_IMPACT;
    base + seasonal + trend + position
}

/// Market-index simulation for the comparison chart. Not derived from the
/// strategy return; compounded the same way.
fn benchmark_series(days: usize) -> Vec<f64> {
    let mut acc = 1.0;
    (0..days)
        .map(|i| {
            let r = BENCHMARK_BASE_RETURN
                + BENCHMARK_AMPLITUDE * (i as f64 * TAU / TRADING_DAYS_PER_YEAR).sin();
            acc *= 1.0 + r;
            acc
        })
        .collect()
}

/// Month-end resample of the cumulative curve, then percentage change.
/// Fewer than two month ends is a valid "insufficient data" state: empty.
fn monthly_returns(dates: &[chrono::NaiveDate], cumulative: &[f64]) -> Vec<MonthlyReturn> {
    let ends = month_end_indices(dates);
    ends.windows(2)
        .map(|pair| {
            let (prev, curr) = (pair[0], pair[1]);
            let date = dates[curr];
            MonthlyReturn {
                year: date.year(),
                month: date.month(),
                value: cumulative[curr] / cumulative[prev] - 1.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StrategyType;
    use chrono::NaiveDate;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-12;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn reference_config() -> BacktestConfig {
        BacktestConfig {
            symbols: vec!["SH600000".into()],
            start_date: d(2023, 1, 2),
            end_date: d(2023, 1, 31),
            strategy: StrategyType::LongOnly,
            ..BacktestConfig::default()
        }
    }

    #[test]
    fn return_series_spans_the_trading_calendar() {
        let report = run_backtest(&reference_config());
        assert_eq!(report.dates.len(), 22); // business days of Jan 2023
        assert_eq!(report.daily_returns.len(), report.dates.len());
        assert_eq!(report.cumulative_returns.len(), report.dates.len());
        assert_eq!(report.portfolio_value.len(), report.dates.len());
        assert_eq!(report.benchmark_cumulative.len(), report.dates.len());
    }

    #[test]
    fn cumulative_starts_from_the_first_return() {
        let report = run_backtest(&reference_config());
        assert!(
            (report.cumulative_returns[0] - (1.0 + report.daily_returns[0])).abs() < EPS
        );
    }

    #[test]
    fn first_day_return_is_the_closed_form() {
        // i = 0: sin term and trend vanish; max_position at neutral 0.1
        let report = run_backtest(&reference_config());
        assert!((report.daily_returns[0] - 0.0008).abs() < EPS);

        let long_short = BacktestConfig {
            strategy: StrategyType::LongShort,
            ..reference_config()
        };
        let report = run_backtest(&long_short);
        assert!((report.daily_returns[0] - 0.0008 * 1.2).abs() < EPS);
    }

    #[test]
    fn max_position_shifts_every_day_uniformly() {
        let bold = BacktestConfig {
            max_position: 0.2,
            ..reference_config()
        };
        let base = run_backtest(&reference_config());
        let shifted = run_backtest(&bold);
        for (a, b) in base.daily_returns.iter().zip(&shifted.daily_returns) {
            assert!((b - a - 0.1 * 0.001).abs() < EPS);
        }
    }

    #[test]
    fn simulation_is_deterministic_across_runs() {
        let config = reference_config();
        let first = run_backtest(&config);
        let second = run_backtest(&config);
        assert_eq!(first.stats.total_return, second.stats.total_return);
        assert_eq!(first.stats.sharpe_ratio, second.stats.sharpe_ratio);
        assert_eq!(first, second);
    }

    #[test]
    fn portfolio_value_scales_cumulative_by_capital() {
        let report = run_backtest(&reference_config());
        for (value, cum) in report.portfolio_value.iter().zip(&report.cumulative_returns) {
            assert!((value - cum * 1_000_000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn empty_calendar_is_a_null_report_not_an_error() {
        // Weekend-only range
        let config = BacktestConfig {
            start_date: d(2023, 1, 7),
            end_date: d(2023, 1, 8),
            ..reference_config()
        };
        let report = run_backtest(&config);
        assert!(report.daily_returns.is_empty());
        assert!(report.cumulative_returns.is_empty());
        assert_eq!(report.stats.total_return, 0.0);
        assert_eq!(report.stats.sharpe_ratio, 0.0);
        assert_eq!(report.stats.max_drawdown, 0.0);

        // Reversed range behaves the same
        let reversed = BacktestConfig {
            start_date: d(2023, 1, 31),
            end_date: d(2023, 1, 2),
            ..reference_config()
        };
        assert_eq!(run_backtest(&reversed), BacktestReport::default());
    }

    #[test]
    fn statistics_invariants_hold_across_strategies() {
        for strategy in StrategyType::iter() {
            let config = BacktestConfig {
                strategy,
                start_date: d(2022, 1, 3),
                end_date: d(2023, 12, 29),
                ..reference_config()
            };
            let report = run_backtest(&config);
            assert!(report.stats.max_drawdown <= 0.0);
            assert!((0.0..=1.0).contains(&report.stats.win_rate));
            assert_eq!(report.stats.trading_days, report.dates.len());
        }
    }

    #[test]
    fn benchmark_is_independent_of_the_strategy() {
        let long_only = run_backtest(&reference_config());
        let neutral = run_backtest(&BacktestConfig {
            strategy: StrategyType::MarketNeutral,
            max_position: 0.3,
            ..reference_config()
        });
        assert_eq!(long_only.benchmark_cumulative, neutral.benchmark_cumulative);
        // First benchmark point: (1 + 0.0005), sin(0) = 0
        assert!((long_only.benchmark_cumulative[0] - 1.0005).abs() < EPS);
    }

    #[test]
    fn single_month_range_has_no_monthly_returns() {
        let report = run_backtest(&reference_config());
        assert!(report.monthly_returns.is_empty()); // insufficient data, not an error
    }

    #[test]
    fn monthly_returns_chain_between_month_ends() {
        let config = BacktestConfig {
            start_date: d(2023, 1, 2),
            end_date: d(2023, 3, 31),
            ..reference_config()
        };
        let report = run_backtest(&config);
        assert_eq!(report.monthly_returns.len(), 2); // Feb and Mar vs prior month end
        assert_eq!(report.monthly_returns[0].year, 2023);
        assert_eq!(report.monthly_returns[0].month, 2);
        assert_eq!(report.monthly_returns[1].month, 3);
        for monthly in &report.monthly_returns {
            assert!(monthly.value.is_finite());
        }
    }
}
