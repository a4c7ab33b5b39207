//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `PROMPT_REVIEW`
//! prefix and `__` between nested keys. Every value has a default, so
//! an empty environment yields a runnable development setup.
//!
//! # Example
//!
//! ```no_run
//! use prompt_review::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Server running on {}", config.server.socket_addr());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod server;
mod storage;
mod workflow;

pub use error::{ConfigError, ConfigValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};
pub use workflow::WorkflowConfig;

use serde::Deserialize;

const ENV_PREFIX: &str = "PROMPT_REVIEW";

/// Everything the binary needs to start.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub workflow: WorkflowConfig,
}

impl AppConfig {
    /// Reads `.env` (if any), then `PROMPT_REVIEW__<SECTION>__<KEY>`
    /// variables, e.g. `PROMPT_REVIEW__WORKFLOW__MAINTAINERS=alice,bob`.
    ///
    /// Only type errors fail here; range and consistency checks are in
    /// [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is the normal case outside development.
        let _ = dotenvy::dotenv();

        config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(ConfigError::from)
    }

    /// Stops at the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.workflow.validate(self.is_production())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
