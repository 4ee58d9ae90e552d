mod capability;
mod export;
mod fallback;
mod loader;
mod provider;

pub use {
    capability::{ProviderCapability, ProviderFactory, UnavailableReason},
    export::{default_csv_filename, export_csv},
    fallback::{FetchReport, SymbolFailure, generate_mock},
    loader::{DataError, DataLoader},
    provider::QuantDataProvider,
};
