use std::path::PathBuf;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum CompletionConfigError {
    /// The configuration file must live inside the workspace
    #[error("Configuration file path must be relative to the workspace root: {path}")]
    AbsoluteConfigFile { path: PathBuf },

    /// The configuration file path cannot be empty
    #[error("Configuration file path is empty")]
    EmptyConfigFile,

    /// Header extension cannot be empty
    #[error("Header extension is empty")]
    EmptyHeaderExtension,

    /// Header extension is given without the leading dot
    #[error("Header extension must not start with '.': {extension}")]
    DottedHeaderExtension { extension: String },
}
