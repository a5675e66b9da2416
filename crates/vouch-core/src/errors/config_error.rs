//! Error types for configuration loading and validation.

/// Errors raised while loading or validating engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// A field parsed fine but holds a value the engine cannot run with.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
