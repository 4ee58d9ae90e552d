//! Deterministic model-training simulation.
//!
//! No model is fit and no data is read: every figure is a closed form over the
//! config (model type, hyper-parameters, date-range length, symbol count).
//! Same inputs always produce the identical [`TrainingReport`].

use crate::config::constants::training::*;
use crate::models::{LossPoint, TrainingConfig, TrainingReport};

/// Simulate one training run.
pub fn simulate_training(config: &TrainingConfig) -> TrainingReport {
    log::info!(
        "[training] {} | {} symbol(s) | {} to {} | lr={} depth={} estimators={}",
        config.model_type,
        config.symbols.len(),
        config.start_date,
        config.end_date,
        config.learning_rate,
        config.max_depth,
        config.n_estimators,
    );

    let param_bonus = (config.learning_rate - REFERENCE_LEARNING_RATE) * 0.1
        + (config.max_depth as f64 - 6.0) * 0.005;
    let train_accuracy = BASE_ACCURACY + config.model_type.accuracy_bonus() + param_bonus;
    let validation_accuracy = train_accuracy - VALIDATION_GAP;

    let days = (config.end_date - config.start_date).num_days().max(0);
    let symbol_count = config.symbols.len();
    let sample_count = days * symbol_count as i64 * SAMPLES_PER_SYMBOL_DAY;

    let training_secs =
        (config.n_estimators / 2 + config.max_depth * 5).clamp(MIN_TRAINING_SECS, MAX_TRAINING_SECS);

    TrainingReport {
        model_type: config.model_type,
        symbol_count,
        sample_count,
        train_accuracy,
        validation_accuracy,
        training_secs,
        loss_curve: loss_curve(config.learning_rate),
        learning_rate: config.learning_rate,
        max_depth: config.max_depth,
        n_estimators: config.n_estimators,
    }
}

/// Twenty-epoch loss curve: linear decay scaled by the learning rate, floored
/// so the curves flatten out instead of going negative.
fn loss_curve(learning_rate: f64) -> Vec<LossPoint> {
    let scale = learning_rate / REFERENCE_LEARNING_RATE;
    (1..=EPOCHS)
        .map(|epoch| {
            let e = epoch as f64;
            LossPoint {
                epoch,
                train_loss: (INITIAL_TRAIN_LOSS - e * TRAIN_DECAY_PER_EPOCH * scale)
                    .max(TRAIN_LOSS_FLOOR),
                val_loss: (INITIAL_VAL_LOSS - e * VAL_DECAY_PER_EPOCH * scale).max(VAL_LOSS_FLOOR),
            }
        })
        .collect()
}
