mod backtest;
mod price_series;
mod training;

pub use {
    backtest::{
        BacktestConfig, BacktestReport, MonthlyReturn, PerformanceStats, RebalanceFreq,
        StrategyType,
    },
    price_series::{DataRequest, FieldSummary, PriceRow, PriceSeries},
    training::{LossPoint, ModelType, TrainingConfig, TrainingReport},
};
