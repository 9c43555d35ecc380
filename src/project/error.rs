use thiserror::Error;

/// Reasons a configuration document could not be loaded
///
/// None of these reach callers of the completion API: the resolver logs them
/// and falls back to the default library paths.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file is empty: {path}")]
    Empty { path: String },

    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
