// Top Level Constants
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

pub mod training {
    /// Accuracy every model starts from before bonuses are applied.
    pub const BASE_ACCURACY: f64 = 0.65;
    /// Fixed generalization gap between train and validation accuracy.
    pub const VALIDATION_GAP: f64 = 0.05;
    /// Approximate feature rows per symbol per calendar day.
    pub const SAMPLES_PER_SYMBOL_DAY: i64 = 20;
    /// Simulated wall-clock duration is clamped to this window (seconds).
    pub const MIN_TRAINING_SECS: u32 = 30;
    pub const MAX_TRAINING_SECS: u32 = 300;

    pub const EPOCHS: u32 = 20;
    pub const INITIAL_TRAIN_LOSS: f64 = 0.8;
    pub const INITIAL_VAL_LOSS: f64 = 0.85;
    pub const TRAIN_LOSS_FLOOR: f64 = 0.1;
    pub const VAL_LOSS_FLOOR: f64 = 0.15;
    pub const TRAIN_DECAY_PER_EPOCH: f64 = 0.03;
    pub const VAL_DECAY_PER_EPOCH: f64 = 0.025;
    /// Loss decay scales linearly with learning_rate relative to this reference.
    pub const REFERENCE_LEARNING_RATE: f64 = 0.1;
}

pub mod backtest {
    /// Per-day return before the strategy multiplier and adjustment terms.
    pub const BASE_DAILY_RETURN: f64 = 0.0008;
    /// Amplitude of the one-year seasonal sine term.
    pub const SEASONAL_AMPLITUDE: f64 = 0.0002;
    /// Slight upward drift per day index.
    pub const TREND_PER_DAY: f64 = 0.000001;
    /// Impact of max_position deviating from its neutral value.
    pub const POSITION_IMPACT: f64 = 0.001;
    pub const NEUTRAL_MAX_POSITION: f64 = 0.1;

    pub const BENCHMARK_BASE_RETURN: f64 = 0.0005;
    pub const BENCHMARK_AMPLITUDE: f64 = 0.0001;

    /// Quantile used for the Value-at-Risk figure (5th percentile).
    pub const VAR_QUANTILE: f64 = 0.05;
}

// Inclusive slider ranges exposed by the original front end. Configs are clamped
// to these on construction so out-of-range CLI input cannot skew the formulas.
pub mod ranges {
    pub const LEARNING_RATE: (f64, f64) = (0.01, 0.3);
    pub const MAX_DEPTH: (u32, u32) = (3, 15);
    pub const N_ESTIMATORS: (u32, u32) = (50, 500);
    pub const MIN_SAMPLES_SPLIT: (u32, u32) = (2, 20);
    pub const TEST_SIZE: (f64, f64) = (0.1, 0.5);

    pub const MAX_POSITION: (f64, f64) = (0.05, 0.3);
    pub const STOP_LOSS: (f64, f64) = (0.05, 0.2);
    pub const TAKE_PROFIT: (f64, f64) = (0.1, 0.5);
    pub const MAX_DRAWDOWN_LIMIT: (f64, f64) = (0.1, 0.3);
    pub const COMMISSION_RATE: (f64, f64) = (0.0001, 0.003);
    pub const SLIPPAGE: (f64, f64) = (0.0001, 0.002);
}
