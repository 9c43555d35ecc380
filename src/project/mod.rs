//! Project configuration and include-path resolution
//!
//! This module turns the workspace's `c_cpp_properties.json` document, the
//! toolchain's default library directories and the current platform into the
//! set of directories the header index scans.

pub mod cpp_properties;
pub mod error;
pub mod library_paths;
pub mod platform;
pub mod resolver;

pub use cpp_properties::{ConfigurationSection, CppProperties, load_cpp_properties};
pub use error::ConfigError;
pub use library_paths::{LibraryPathProvider, StaticLibraryPaths};
pub use platform::Platform;
pub use resolver::{IncludePathResolver, ResolvedPathSet, normalize_path};

#[cfg(test)]
pub use library_paths::MockLibraryPathProvider;
