//! Default library search paths
//!
//! The toolchain that knows where its bundled libraries live is an external
//! collaborator. It is consulted on every rebuild, so a provider may return a
//! different set each time (for example after a board package is installed).

use std::path::PathBuf;

/// Source of the toolchain's default library directories
#[cfg_attr(test, mockall::automock)]
pub trait LibraryPathProvider: Send + Sync {
    /// Directories that are always searched for headers; may be empty
    fn default_library_paths(&self) -> Vec<PathBuf>;
}

/// Fixed list of default library directories
#[derive(Debug, Clone, Default)]
pub struct StaticLibraryPaths {
    paths: Vec<PathBuf>,
}

impl StaticLibraryPaths {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl LibraryPathProvider for StaticLibraryPaths {
    fn default_library_paths(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }
}
