// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::SessionState;
pub use data::{DataLoader, ProviderCapability};
pub use engine::{run_backtest, simulate_training};
pub use models::{BacktestConfig, DataRequest, TrainingConfig};

// CLI argument parsing
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ProviderSettings;
use crate::models::{ModelType, RebalanceFreq, StrategyType};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Local data directory the provider is initialized from
    #[arg(long, default_value = ProviderSettings::DEFAULT_URI)]
    pub provider_uri: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load and preview historical price data
    Data(DataArgs),
    /// Simulate training a predictive model
    Train(TrainArgs),
    /// Simulate a trading-strategy backtest
    Backtest(BacktestArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Stock codes, comma separated
    #[arg(long, default_value = "sz300033,sh600000")]
    pub symbols: String,

    #[arg(long, default_value = "2020-09-01")]
    pub start: NaiveDate,

    #[arg(long, default_value = "2020-09-25")]
    pub end: NaiveDate,

    /// Data fields to select
    #[arg(long, value_delimiter = ',', default_value = "close")]
    pub fields: Vec<String>,

    /// Force the demonstration-data path even if the provider resolves
    #[arg(long, default_value_t = false)]
    pub mock: bool,

    /// Export the loaded table as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Model to simulate: LightGBM, XGBoost, Linear or RandomForest
    #[arg(long, default_value_t = ModelType::LightGBM)]
    pub model: ModelType,

    /// Training stock pool, comma separated
    #[arg(long, default_value = "SH600000,SH600036,SH600519")]
    pub symbols: String,

    /// Training start date (default: two years ago)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Training end date (default: one month ago)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    #[arg(long, default_value_t = 6)]
    pub max_depth: u32,

    #[arg(long, default_value_t = 100)]
    pub n_estimators: u32,

    #[arg(long, default_value_t = 2)]
    pub min_samples_split: u32,

    #[arg(long, default_value_t = 0.2)]
    pub test_size: f64,

    #[arg(long, default_value_t = 42)]
    pub random_seed: i64,
}

#[derive(Args, Debug, Clone)]
pub struct BacktestArgs {
    /// Backtest stock pool, comma separated
    #[arg(long, default_value = "SH600000,SH600036")]
    pub symbols: String,

    /// Backtest start date (default: one year ago)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Backtest end date (default: today)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Strategy: LongShort, LongOnly or MarketNeutral
    #[arg(long, default_value_t = StrategyType::LongShort)]
    pub strategy: StrategyType,

    #[arg(long, default_value_t = 1_000_000.0)]
    pub initial_capital: f64,

    /// Rebalance frequency: Daily, Weekly or Monthly
    #[arg(long, default_value_t = RebalanceFreq::Daily)]
    pub rebalance: RebalanceFreq,

    #[arg(long, default_value_t = 0.1)]
    pub max_position: f64,

    #[arg(long, default_value_t = 0.1)]
    pub stop_loss: f64,

    #[arg(long, default_value_t = 0.2)]
    pub take_profit: f64,

    #[arg(long, default_value_t = 0.15)]
    pub max_drawdown_limit: f64,

    #[arg(long, default_value_t = 0.001)]
    pub commission_rate: f64,

    #[arg(long, default_value_t = 0.0005)]
    pub slippage: f64,

    /// Dump the full report as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
