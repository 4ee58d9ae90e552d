//! Performance statistics derived from a realized daily-return sequence.

use statrs::statistics::Statistics;

use crate::config::constants::{TRADING_DAYS_PER_YEAR, backtest::VAR_QUANTILE};
use crate::models::PerformanceStats;
use crate::utils::{excess_kurtosis, percentile, skewness};

impl PerformanceStats {
    /// Derive every metric from the daily returns and their cumulative curve.
    ///
    /// `cumulative` must be the running product of `(1 + r)` over `returns`;
    /// empty inputs produce the all-zero stats of a null report.
    pub fn from_returns(returns: &[f64], cumulative: &[f64]) -> Self {
        let n = returns.len();
        if n == 0 || cumulative.len() != n {
            return Self::default();
        }

        let total_return = cumulative[n - 1] - 1.0;
        let annual_return = (1.0 + total_return).powf(TRADING_DAYS_PER_YEAR / n as f64) - 1.0;

        let mean_daily = returns.mean();
        let std_daily = returns.population_std_dev();
        let annual_volatility = std_daily * TRADING_DAYS_PER_YEAR.sqrt();

        // Float noise: the std of a constant series comes back as ~1e-18, not
        // exactly zero, so both ratio guards compare against an epsilon.
        let sharpe_ratio = if annual_volatility > f64::EPSILON {
            annual_return / annual_volatility
        } else {
            0.0
        };

        let max_drawdown = max_drawdown(cumulative);
        let calmar_ratio = if max_drawdown.abs() > f64::EPSILON {
            annual_return / max_drawdown.abs()
        } else {
            0.0
        };

        let win_rate = returns.iter().filter(|&&r| r > 0.0).count() as f64 / n as f64;

        Self {
            total_return,
            annual_return,
            annual_volatility,
            sharpe_ratio,
            max_drawdown,
            win_rate,
            calmar_ratio,
            trading_days: n,
            mean_daily,
            std_daily,
            skewness: skewness(returns),
            kurtosis: excess_kurtosis(returns),
            var_95: percentile(returns, VAR_QUANTILE),
        }
    }
}

/// Worst peak-to-trough decline of the cumulative curve vs its running max.
/// Non-positive by construction (the first point sits at its own peak).
fn max_drawdown(cumulative: &[f64]) -> f64 {
    let mut running_max = f64::NEG_INFINITY;
    let mut worst: f64 = 0.0;
    for &value in cumulative {
        running_max = running_max.max(value);
        worst = worst.min(value / running_max - 1.0);
    }
    worst
}
