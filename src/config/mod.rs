//! Configuration module for the quant-lab application.

mod provider;

// Public
pub mod constants;

// Re-export commonly used items
pub use provider::{ProviderBounds, ProviderSettings};
