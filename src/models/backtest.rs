use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

use crate::config::constants::ranges;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
pub enum StrategyType {
    #[strum(to_string = "LongShort")]
    LongShort,
    #[default]
    #[strum(to_string = "LongOnly")]
    LongOnly,
    #[strum(to_string = "MarketNeutral")]
    MarketNeutral,
}

impl StrategyType {
    /// Scales the base daily return of the simulation.
    pub fn return_multiplier(&self) -> f64 {
        match self {
            StrategyType::LongShort => 1.2,
            StrategyType::LongOnly => 1.0,
            StrategyType::MarketNeutral => 0.8,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
pub enum RebalanceFreq {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// Parameters for one simulated strategy backtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestConfig {
    pub symbols: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub strategy: StrategyType,
    pub initial_capital: f64,
    pub rebalance_freq: RebalanceFreq,
    pub max_position: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub max_drawdown_limit: f64,
    pub commission_rate: f64,
    pub slippage: f64,
}

impl BacktestConfig {
    /// Clamp every risk parameter to its front-end slider range.
    pub fn clamped(mut self) -> Self {
        self.max_position = self
            .max_position
            .clamp(ranges::MAX_POSITION.0, ranges::MAX_POSITION.1);
        self.stop_loss = self.stop_loss.clamp(ranges::STOP_LOSS.0, ranges::STOP_LOSS.1);
        self.take_profit = self
            .take_profit
            .clamp(ranges::TAKE_PROFIT.0, ranges::TAKE_PROFIT.1);
        self.max_drawdown_limit = self
            .max_drawdown_limit
            .clamp(ranges::MAX_DRAWDOWN_LIMIT.0, ranges::MAX_DRAWDOWN_LIMIT.1);
        self.commission_rate = self
            .commission_rate
            .clamp(ranges::COMMISSION_RATE.0, ranges::COMMISSION_RATE.1);
        self.slippage = self.slippage.clamp(ranges::SLIPPAGE.0, ranges::SLIPPAGE.1);
        self
    }
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            start_date: NaiveDate::default(),
            end_date: NaiveDate::default(),
            strategy: StrategyType::default(),
            rebalance_freq: RebalanceFreq::default(),
            // Front-end defaults
            initial_capital: 1_000_000.0,
            max_position: 0.1,
            stop_loss: 0.1,
            take_profit: 0.2,
            max_drawdown_limit: 0.15,
            commission_rate: 0.001,
            slippage: 0.0005,
        }
    }
}

/// Percentage change of the cumulative curve from one month-end to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    pub year: i32,
    pub month: u32,
    pub value: f64,
}

/// Statistics derived from the realized daily-return sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub total_return: f64,
    pub annual_return: f64,
    pub annual_volatility: f64,
    pub sharpe_ratio: f64,
    /// Peak-to-trough decline as a non-positive fraction of the peak.
    pub max_drawdown: f64,
    pub win_rate: f64,
    pub calmar_ratio: f64,
    pub trading_days: usize,
    pub mean_daily: f64,
    pub std_daily: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    /// 5th-percentile daily return.
    pub var_95: f64,
}

/// Full output of one backtest run. Recomputed per invocation, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    pub dates: Vec<NaiveDate>,
    pub daily_returns: Vec<f64>,
    /// Running product of (1 + daily_return).
    pub cumulative_returns: Vec<f64>,
    pub portfolio_value: Vec<f64>,
    /// Independent market-index simulation, compounded the same way.
    pub benchmark_cumulative: Vec<f64>,
    pub monthly_returns: Vec<MonthlyReturn>,
    pub stats: PerformanceStats,
}
