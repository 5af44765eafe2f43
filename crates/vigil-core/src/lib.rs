//! Core types, configuration, and error handling for the Vigil platform.
//!
//! This crate provides the shared foundation used by all other Vigil crates:
//! - [`VigilError`] — unified error type using `thiserror`
//! - [`VigilConfig`] — configuration loaded from `.vigil.toml`
//! - Shared types: [`SystemDetails`], [`BaseThreat`], [`TrackedThreat`],
//!   [`TriageStatus`], [`DashboardSummary`], [`DistributionEntry`],
//!   [`OutputFormat`]

mod config;
mod error;
mod types;

pub use config::{LlmConfig, TriageConfig, VigilConfig};
pub use error::VigilError;
pub use types::{
    BaseThreat, DashboardSummary, DistributionEntry, OutputFormat, SystemDetails, TrackedThreat,
    TriageStatus, MAX_DESCRIPTION_CHARS, MIN_DESCRIPTION_CHARS,
};

/// A convenience `Result` type for Vigil operations.
pub type Result<T> = std::result::Result<T, VigilError>;
