//! Single capability-resolution step for the data provider.
//!
//! Replaces the scattered check-import / check-data-directory / init sequence
//! with one typed result consumed uniformly by [`crate::data::DataLoader`] and
//! the mock fallback.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ProviderSettings;
use crate::data::provider::QuantDataProvider;

/// Why no provider handle could be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No provider backend is linked into this build.
    BackendMissing,
    /// The configured data directory does not exist.
    DataDirectoryMissing(PathBuf),
    /// The backend exists and the directory exists, but initialization failed.
    InitFailed(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::BackendMissing => {
                write!(f, "data provider backend not installed or unavailable")
            }
            UnavailableReason::DataDirectoryMissing(path) => {
                write!(f, "data directory {} not found", path.display())
            }
            UnavailableReason::InitFailed(msg) => {
                write!(f, "data directory exists but provider initialization failed: {msg}")
            }
        }
    }
}

/// Factory that initializes a provider handle from the data directory.
pub type ProviderFactory<'a> = &'a dyn Fn(&Path) -> anyhow::Result<Box<dyn QuantDataProvider>>;

/// Outcome of resolving the provider: either a live handle or a typed reason.
pub enum ProviderCapability {
    Available(Box<dyn QuantDataProvider>),
    Unavailable(UnavailableReason),
}

impl ProviderCapability {
    /// Resolve in one step: backend present, data directory present, init ok.
    ///
    /// Pass `None` for `factory` when no real backend is compiled in; the
    /// caller then degrades to the synthetic fallback path.
    pub fn resolve(settings: &ProviderSettings, factory: Option<ProviderFactory>) -> Self {
        let Some(factory) = factory else {
            return ProviderCapability::Unavailable(UnavailableReason::BackendMissing);
        };

        if !settings.provider_uri.is_dir() {
            return ProviderCapability::Unavailable(UnavailableReason::DataDirectoryMissing(
                settings.provider_uri.clone(),
            ));
        }

        match factory(&settings.provider_uri) {
            Ok(handle) => ProviderCapability::Available(handle),
            Err(e) => {
                log::error!("[capability] provider init failed: {e:?}");
                ProviderCapability::Unavailable(UnavailableReason::InitFailed(e.to_string()))
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ProviderCapability::Available(_))
    }

    pub fn provider(&self) -> Option<&dyn QuantDataProvider> {
        match self {
            ProviderCapability::Available(handle) => Some(handle.as_ref()),
            ProviderCapability::Unavailable(_) => None,
        }
    }
}

impl fmt::Debug for ProviderCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderCapability::Available(_) => write!(f, "ProviderCapability::Available(..)"),
            ProviderCapability::Unavailable(reason) => {
                write!(f, "ProviderCapability::Unavailable({reason:?})")
            }
        }
    }
}
