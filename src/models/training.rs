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
pub enum ModelType {
    #[default]
    LightGBM,
    XGBoost,
    Linear,
    RandomForest,
}

impl ModelType {
    /// Fixed per-model accuracy offset on top of the base accuracy.
    pub fn accuracy_bonus(&self) -> f64 {
        match self {
            ModelType::LightGBM => 0.08,
            ModelType::XGBoost => 0.06,
            ModelType::RandomForest => 0.04,
            ModelType::Linear => 0.02,
        }
    }
}

/// Parameters for one simulated training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub model_type: ModelType,
    pub symbols: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub learning_rate: f64,
    pub max_depth: u32,
    pub n_estimators: u32,
    pub min_samples_split: u32,
    pub test_size: f64,
    pub random_seed: i64,
}

impl TrainingConfig {
    /// Clamp every hyper-parameter to its front-end slider range.
    pub fn clamped(mut self) -> Self {
        self.learning_rate = self
            .learning_rate
            .clamp(ranges::LEARNING_RATE.0, ranges::LEARNING_RATE.1);
        self.max_depth = self.max_depth.clamp(ranges::MAX_DEPTH.0, ranges::MAX_DEPTH.1);
        self.n_estimators = self
            .n_estimators
            .clamp(ranges::N_ESTIMATORS.0, ranges::N_ESTIMATORS.1);
        self.min_samples_split = self
            .min_samples_split
            .clamp(ranges::MIN_SAMPLES_SPLIT.0, ranges::MIN_SAMPLES_SPLIT.1);
        self.test_size = self.test_size.clamp(ranges::TEST_SIZE.0, ranges::TEST_SIZE.1);
        self
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::default(),
            symbols: Vec::new(),
            start_date: NaiveDate::default(),
            end_date: NaiveDate::default(),
            // Front-end slider defaults
            learning_rate: 0.1,
            max_depth: 6,
            n_estimators: 100,
            min_samples_split: 2,
            test_size: 0.2,
            random_seed: 42,
        }
    }
}

/// One point on the simulated loss curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossPoint {
    pub epoch: u32,
    pub train_loss: f64,
    pub val_loss: f64,
}

/// Deterministic output of [`crate::engine::simulate_training`]. Held only in
/// session state until the next run overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub model_type: ModelType,
    pub symbol_count: usize,
    pub sample_count: i64,
    pub train_accuracy: f64,
    pub validation_accuracy: f64,
    pub training_secs: u32,
    pub loss_curve: Vec<LossPoint>,
    // Echo of the hyper-parameters for the detailed-parameters view
    pub learning_rate: f64,
    pub max_depth: u32,
    pub n_estimators: u32,
}
