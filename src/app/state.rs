use crate::models::{BacktestReport, PriceSeries, TrainingReport};

/// Caller-owned session snapshot: the last result of each of the three
/// actions. Each new invocation simply overwrites its slot; nothing here is
/// persisted across sessions.
#[derive(Debug, Default)]
pub struct SessionState {
    pub loaded_data: Option<PriceSeries>,
    pub trained_model: Option<TrainingReport>,
    pub backtest_result: Option<BacktestReport>,
}
