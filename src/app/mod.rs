//! Action handlers: the boundary where domain errors become user-facing
//! messages. Handlers mutate the caller-owned [`SessionState`]; none of them
//! are fatal to the process.

mod state;

pub use state::SessionState;

use crate::data::{DataLoader, FetchReport, ProviderCapability, generate_mock};
use crate::engine::{run_backtest, simulate_training};
use crate::models::{
    BacktestConfig, BacktestReport, DataRequest, PriceSeries, TrainingConfig, TrainingReport,
};

/// Strict data-view action. On success the session's data slot is overwritten;
/// on failure the typed error is flattened to a display message.
pub fn load_data<'s>(
    session: &'s mut SessionState,
    loader: &mut DataLoader<'_>,
    request: &DataRequest,
) -> Result<&'s PriceSeries, String> {
    let series = loader.load(request).map_err(|e| e.to_string())?;
    Ok(session.loaded_data.insert(series))
}

/// Demonstration-data action. Always succeeds; partial failures are itemized
/// inside the returned [`FetchReport`].
pub fn load_mock_data(
    session: &mut SessionState,
    capability: &ProviderCapability,
    request: &DataRequest,
) -> FetchReport {
    let report = generate_mock(
        capability,
        &request.symbols,
        request.start_date,
        request.end_date,
        &request.fields,
    );
    session.loaded_data = Some(report.series.clone());
    report
}

/// Training action: clamps the config and overwrites the model slot.
pub fn run_training_action(
    session: &mut SessionState,
    config: TrainingConfig,
) -> &TrainingReport {
    session.trained_model.insert(simulate_training(&config.clamped()))
}

/// Backtest action: clamps the config and overwrites the backtest slot.
pub fn run_backtest_action(
    session: &mut SessionState,
    config: BacktestConfig,
) -> &BacktestReport {
    session.backtest_result.insert(run_backtest(&config.clamped()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderBounds;
    use crate::data::UnavailableReason;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn load_data_surfaces_a_user_message_on_failure() {
        let capability = ProviderCapability::Unavailable(UnavailableReason::BackendMissing);
        let mut loader = DataLoader::new(&capability, ProviderBounds::default());
        let mut session = SessionState::default();
        let request = DataRequest::new(
            vec!["sh600000".into()],
            d(2020, 9, 1),
            d(2020, 9, 25),
            vec!["close".into()],
        );

        let err = load_data(&mut session, &mut loader, &request).unwrap_err();
        assert!(err.contains("not initialized or unavailable"));
        assert!(session.loaded_data.is_none());
    }

    #[test]
    fn mock_action_fills_the_session_even_when_degraded() {
        let capability = ProviderCapability::Unavailable(UnavailableReason::BackendMissing);
        let mut session = SessionState::default();
        let request = DataRequest::new(
            vec!["sh600000".into()],
            d(2023, 1, 2),
            d(2023, 1, 6),
            vec!["close".into()],
        );

        let report = load_mock_data(&mut session, &capability, &request);
        assert_eq!(report.series.len(), 5);
        assert_eq!(session.loaded_data.as_ref().unwrap().len(), 5);
    }

    #[test]
    fn actions_overwrite_their_session_slots() {
        let mut session = SessionState::default();

        let first = run_training_action(
            &mut session,
            TrainingConfig {
                symbols: vec!["A".into()],
                start_date: d(2022, 1, 1),
                end_date: d(2022, 6, 30),
                ..TrainingConfig::default()
            },
        )
        .clone();
        let second = run_training_action(
            &mut session,
            TrainingConfig {
                symbols: vec!["A".into(), "B".into()],
                start_date: d(2022, 1, 1),
                end_date: d(2022, 6, 30),
                ..TrainingConfig::default()
            },
        );
        assert_ne!(first.sample_count, second.sample_count);
        assert_eq!(
            session.trained_model.as_ref().unwrap().symbol_count,
            2
        );

        run_backtest_action(
            &mut session,
            BacktestConfig {
                start_date: d(2023, 1, 2),
                end_date: d(2023, 1, 31),
                ..BacktestConfig::default()
            },
        );
        assert!(session.backtest_result.is_some());
    }
}
