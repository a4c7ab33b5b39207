//! Configuration errors.

use thiserror::Error;

/// Failure to start from the given configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable could not be read into its field type.
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// A value that parsed but is out of bounds or inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("server.request_timeout_secs must be between 1 and 300")]
    InvalidTimeout,

    #[error("naming suffix '{0}' must end in .md")]
    InvalidSuffix(String),

    #[error("workflow.min_name_segments must be at least 1")]
    InvalidMinNameSegments,

    #[error("'{0}' is not a valid maintainer id")]
    InvalidMaintainer(String),

    #[error("production requires at least one maintainer in workflow.maintainers")]
    NoMaintainers,
}
