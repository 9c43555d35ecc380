//! Header-name completion for `#include` directives
//!
//! Builds an index of header file names reachable from the toolchain's
//! default library directories and the include paths a workspace declares in
//! `c_cpp_properties.json`, keeps it fresh as that file changes, and offers
//! the names as completions while the cursor is inside an include target.
//!
//! ```no_run
//! use std::sync::Arc;
//! use include_completion::{CompletionConfig, IncludeCompletionProvider, StaticLibraryPaths};
//!
//! let config = CompletionConfig::builder()
//!     .workspace_root("/path/to/project")
//!     .build()
//!     .unwrap();
//! let provider = IncludeCompletionProvider::new(
//!     config,
//!     Arc::new(StaticLibraryPaths::new(["/usr/share/arduino/libraries"])),
//! );
//!
//! if let Some(items) = provider.complete("#include <Wi", 12) {
//!     for item in items {
//!         println!("{}", item.label);
//!     }
//! }
//! ```

pub mod completion;
pub mod index;
pub mod io;
pub mod logging;
pub mod project;

#[cfg(test)]
mod test_utils;

pub use completion::{
    CompletionConfig, CompletionConfigBuilder, CompletionConfigError, ConfigFileEvent,
    IncludeCompletionProvider, spawn_config_watch,
};
pub use index::{HeaderIndex, HeaderScanner, ScanOptions, ScanStats};
pub use project::{
    CppProperties, IncludePathResolver, LibraryPathProvider, Platform, ResolvedPathSet,
    StaticLibraryPaths,
};
