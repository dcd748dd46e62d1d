//! Configuration-layer errors.

use quarry_core::BuildError;
use thiserror::Error;

/// Errors from loading configuration or wrapping an environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration JSON did not parse.
    #[error("failed to parse observation config: {0}")]
    Parse(#[from] serde_json::Error),
    /// An environment name has no `-<version>` suffix.
    #[error("environment name '{name}' has no version suffix")]
    MissingVersion {
        /// The offending name.
        name: String,
    },
    /// The configured handler tree could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),
}
