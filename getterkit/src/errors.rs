use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure failures raised while loading configuration or class models.
///
/// Rule outcomes (rejected fields, lazy misconfiguration, name collisions) are never
/// reported through this type; they travel as [`crate::ValidationResult`] diagnostics.
#[derive(Debug, Error)]
pub enum GetterError {
    /// An annotation carried an access level that is not one of the known constants.
    #[error("unknown access level `{value}`, expected one of PUBLIC, PROTECTED, PACKAGE, PRIVATE, NONE")]
    UnknownAccessLevel { value: String },

    /// A configuration or model file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A class model document is not valid JSON or has the wrong shape.
    #[error("invalid class model: {0}")]
    Model(#[from] serde_json::Error),
}

impl GetterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
