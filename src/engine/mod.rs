mod backtest;
mod calendar;
mod metrics;
mod training;

pub use {
    backtest::run_backtest,
    calendar::{business_days, month_end_indices},
    training::simulate_training,
};
