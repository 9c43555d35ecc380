//! Configuration for include completion
//!
//! Provides CompletionConfig with a validating builder and environment
//! overrides for the values a host usually leaves at their defaults.

use std::env;
use std::path::{Path, PathBuf};

use crate::completion::CompletionConfigError;
use crate::index::ScanOptions;
use crate::project::Platform;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Workspace-relative location of the include-path configuration file
pub const DEFAULT_CONFIG_FILE: &str = ".vscode/c_cpp_properties.json";

/// Environment variable overriding the platform identifier
pub const PLATFORM_ENV_VAR: &str = "INCLUDE_COMPLETION_PLATFORM";

/// Environment variable overriding the workspace-relative configuration file
pub const CONFIG_FILE_ENV_VAR: &str = "INCLUDE_COMPLETION_CONFIG_FILE";

// ============================================================================
// Core Configuration Types
// ============================================================================

/// Complete include-completion configuration
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Workspace root; `None` leaves the provider inert
    pub workspace_root: Option<PathBuf>,

    /// Configuration file, relative to the workspace root
    pub config_file: PathBuf,

    /// Key matched against configuration section names
    pub platform: Platform,

    /// Header scanning behavior
    pub scan: ScanOptions,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            platform: Platform::current(),
            scan: ScanOptions::default(),
        }
    }
}

impl CompletionConfig {
    /// Start building a configuration
    pub fn builder() -> CompletionConfigBuilder {
        CompletionConfigBuilder::new()
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(platform) = env::var(PLATFORM_ENV_VAR)
            && !platform.is_empty()
        {
            self.platform = Platform::new(platform);
        }

        if let Ok(config_file) = env::var(CONFIG_FILE_ENV_VAR)
            && !config_file.is_empty()
        {
            self.config_file = PathBuf::from(config_file);
        }
    }

    /// Absolute path of the configuration file, if a workspace is set
    pub fn config_file_path(&self) -> Option<PathBuf> {
        self.workspace_root
            .as_ref()
            .map(|root| root.join(&self.config_file))
    }
}

// ============================================================================
// Configuration Builder
// ============================================================================

/// Builder for CompletionConfig with validation and defaults
#[derive(Debug, Default)]
pub struct CompletionConfigBuilder {
    workspace_root: Option<PathBuf>,
    config_file: Option<PathBuf>,
    platform: Option<Platform>,
    follow_symlinks: Option<bool>,
    max_depth: Option<usize>,
    header_extension: Option<String>,
    from_env: bool,
}

impl CompletionConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workspace root directory
    pub fn workspace_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(path.into());
        self
    }

    /// Set the workspace-relative configuration file path
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set the platform identifier
    pub fn platform(mut self, platform: impl Into<Platform>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Follow symbolic links while scanning
    pub fn follow_symlinks(mut self, enabled: bool) -> Self {
        self.follow_symlinks = Some(enabled);
        self
    }

    /// Limit how deep below each include directory the scan descends
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the header file extension (without the dot)
    pub fn header_extension(mut self, extension: impl Into<String>) -> Self {
        self.header_extension = Some(extension.into());
        self
    }

    /// Apply environment overrides before explicitly set values
    pub fn with_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<CompletionConfig, CompletionConfigError> {
        let mut config = CompletionConfig::default();
        if self.from_env {
            config.apply_env_overrides();
        }

        config.workspace_root = self.workspace_root;
        if let Some(config_file) = self.config_file {
            config.config_file = config_file;
        }
        if let Some(platform) = self.platform {
            config.platform = platform;
        }
        if let Some(follow_symlinks) = self.follow_symlinks {
            config.scan.follow_symlinks = follow_symlinks;
        }
        if self.max_depth.is_some() {
            config.scan.max_depth = self.max_depth;
        }
        if let Some(extension) = self.header_extension {
            config.scan.header_extension = extension;
        }

        Self::validate_config_file(&config.config_file)?;
        Self::validate_header_extension(&config.scan.header_extension)?;

        Ok(config)
    }

    fn validate_config_file(path: &Path) -> Result<(), CompletionConfigError> {
        if path.as_os_str().is_empty() {
            return Err(CompletionConfigError::EmptyConfigFile);
        }

        if path.is_absolute() || path.has_root() {
            return Err(CompletionConfigError::AbsoluteConfigFile {
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }

    fn validate_header_extension(extension: &str) -> Result<(), CompletionConfigError> {
        if extension.is_empty() {
            return Err(CompletionConfigError::EmptyHeaderExtension);
        }

        if extension.starts_with('.') {
            return Err(CompletionConfigError::DottedHeaderExtension {
                extension: extension.to_string(),
            });
        }

        Ok(())
    }
}
