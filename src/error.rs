//! Crate-wide error type.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced when building a simulation.
///
/// Ticking, contact resolution and the state predicates never fail; only
/// construction and configuration parsing can be rejected.
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor argument or configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}
