//! Include directive completion
//!
//! Ties the pieces together: [`IncludeCompletionProvider`] keeps a header
//! index fresh for one workspace and answers completion queries with
//! [`IncludeDirectiveMatcher`]. Change notifications for the configuration
//! file arrive as [`ConfigFileEvent`]s.

pub mod config;
pub mod error;
pub mod events;
pub mod matcher;
pub mod provider;

pub use config::{CompletionConfig, CompletionConfigBuilder, DEFAULT_CONFIG_FILE};
pub use error::CompletionConfigError;
pub use events::{ConfigFileEvent, spawn_config_watch};
pub use matcher::{IncludeContext, IncludeDelimiter, IncludeDirectiveMatcher, line_prefix,
    utf16_line_prefix,
};
pub use provider::IncludeCompletionProvider;
