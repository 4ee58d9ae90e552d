use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use clap::Parser;

use quant_lab::config::{ProviderSettings, constants::ranges};
use quant_lab::data::{default_csv_filename, export_csv};
use quant_lab::ui::render;
use quant_lab::{
    BacktestArgs, BacktestConfig, Cli, Command, DataArgs, DataLoader, DataRequest,
    ProviderCapability, SessionState, TrainArgs, TrainingConfig, app,
};

fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("quant_lab"), my_code_level)
        .init();

    let args = Cli::parse();

    let settings = ProviderSettings {
        provider_uri: args.provider_uri.clone(),
        ..ProviderSettings::default()
    };
    // No real provider backend is linked into this build; resolution degrades
    // to the demonstration-data path with a typed reason.
    let capability = ProviderCapability::resolve(&settings, None);

    let mut session = SessionState::default();
    match args.command {
        Command::Data(data_args) => run_data(&mut session, &capability, &settings, data_args)?,
        Command::Train(train_args) => run_train(&mut session, train_args),
        Command::Backtest(backtest_args) => run_backtest_cmd(&mut session, backtest_args)?,
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn days_ago(days: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days)).unwrap_or(today())
}

fn run_data(
    session: &mut SessionState,
    capability: &ProviderCapability,
    settings: &ProviderSettings,
    args: DataArgs,
) -> Result<()> {
    let request = DataRequest::new(
        DataRequest::parse_symbols(&args.symbols),
        args.start,
        args.end,
        args.fields,
    );
    request.validate()?;

    println!("Available data range: {}", settings.bounds);

    let use_provider = capability.is_available() && !args.mock;
    if use_provider {
        let mut loader = DataLoader::new(capability, settings.bounds);
        match app::load_data(session, &mut loader, &request) {
            Ok(series) => {
                println!("Successfully loaded {} records", series.len());
            }
            Err(message) => {
                eprintln!("Data loading failed: {message}");
                return Ok(());
            }
        }
    } else {
        if let ProviderCapability::Unavailable(reason) = capability {
            println!("{reason}; using demonstration data.");
        }
        let report = app::load_mock_data(session, capability, &request);
        for failure in &report.failures {
            eprintln!("Warning: {}: {}", failure.symbol, failure.reason);
        }
        if report.series.is_empty() {
            println!(
                "No data found, check the stock codes and date range (no trading days, or every symbol failed)."
            );
            return Ok(());
        }
        println!("Successfully loaded {} records", report.series.len());
    }

    let Some(series) = &session.loaded_data else {
        return Ok(());
    };

    println!("\nData Preview");
    println!("{}", render::price_preview(series, 100));
    println!("\nData Statistics");
    println!("{}", render::data_statistics(series));

    if let Some(path) = args.csv {
        let path = if path.as_os_str().is_empty() {
            default_csv_filename()
        } else {
            path
        };
        export_csv(series, &path)?;
        println!("\nSaved CSV export to {}", path.display());
    }

    Ok(())
}

fn run_train(session: &mut SessionState, args: TrainArgs) {
    let config = TrainingConfig {
        model_type: args.model,
        symbols: DataRequest::parse_symbols(&args.symbols),
        start_date: args.start.unwrap_or_else(|| days_ago(730)),
        end_date: args.end.unwrap_or_else(|| days_ago(30)),
        learning_rate: args.learning_rate,
        max_depth: args.max_depth,
        n_estimators: args.n_estimators,
        min_samples_split: args.min_samples_split,
        test_size: args.test_size,
        random_seed: args.random_seed,
    };
    warn_if_clamped(&config);

    let report = app::run_training_action(session, config).clone();
    println!("Model training completed!\n");
    println!("Training Results");
    println!("{}", render::training_report(&report));
    println!("\nTraining Process");
    println!("{}", render::loss_curve(&report));

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\nDetailed Parameters\n{json}"),
        Err(e) => log::error!("[main] report serialization failed: {e}"),
    }
}

fn run_backtest_cmd(session: &mut SessionState, args: BacktestArgs) -> Result<()> {
    let config = BacktestConfig {
        symbols: DataRequest::parse_symbols(&args.symbols),
        start_date: args.start.unwrap_or_else(|| days_ago(365)),
        end_date: args.end.unwrap_or(today()),
        strategy: args.strategy,
        initial_capital: args.initial_capital,
        rebalance_freq: args.rebalance,
        max_position: args.max_position,
        stop_loss: args.stop_loss,
        take_profit: args.take_profit,
        max_drawdown_limit: args.max_drawdown_limit,
        commission_rate: args.commission_rate,
        slippage: args.slippage,
    };

    let report = app::run_backtest_action(session, config).clone();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Backtest completed!\n");
    println!("Key Metrics");
    println!("{}", render::key_metrics(&report));
    println!("\nDetailed Statistics");
    println!("{}", render::detailed_statistics(&report));
    println!("\nMonthly Returns");
    println!("{}", render::monthly_returns(&report));

    Ok(())
}

/// Point out CLI values that fall outside the documented parameter ranges;
/// the action itself clamps them.
fn warn_if_clamped(config: &TrainingConfig) {
    let (lo, hi) = ranges::LEARNING_RATE;
    if !(lo..=hi).contains(&config.learning_rate) {
        log::warn!("[main] learning_rate {} clamped to [{lo}, {hi}]", config.learning_rate);
    }
    let (lo, hi) = ranges::MAX_DEPTH;
    if !(lo..=hi).contains(&config.max_depth) {
        log::warn!("[main] max_depth {} clamped to [{lo}, {hi}]", config.max_depth);
    }
    let (lo, hi) = ranges::N_ESTIMATORS;
    if !(lo..=hi).contains(&config.n_estimators) {
        log::warn!("[main] n_estimators {} clamped to [{lo}, {hi}]", config.n_estimators);
    }
}
