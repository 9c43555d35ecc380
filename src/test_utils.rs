//! Test utilities and global setup
//!
//! Provides centralized test logging configuration and temporary directory
//! fixtures for header-scanning tests.

/// Test logging utilities
#[cfg(all(test, feature = "test-logging"))]
pub mod logging {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Initialize test logging globally - safe to call multiple times
    ///
    /// Respects `RUST_LOG` and writes through the test writer so output is
    /// captured per test. Enable with:
    ///
    /// ```bash
    /// RUST_LOG=include_completion=trace cargo test --features test-logging
    /// ```
    pub fn init() {
        INIT.call_once(|| {
            let env_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("debug,tokio=info"));

            fmt()
                .with_env_filter(env_filter)
                .with_test_writer()
                .with_target(true)
                .with_thread_ids(true)
                .compact()
                .try_init()
                .ok(); // Ignore errors if already initialized by another test
        });
    }
}

/// Auto-initialize test logging for the enclosing test module
#[cfg(all(test, feature = "test-logging"))]
#[macro_export]
macro_rules! setup_test_logging {
    () => {
        #[ctor::ctor]
        fn init_test_logging() {
            $crate::test_utils::logging::init();
        }
    };
}

/// Filesystem fixtures
#[cfg(test)]
pub mod integration {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Temporary directory tree with helpers for laying out headers
    ///
    /// Removed from disk when dropped.
    pub struct HeaderTree {
        _temp_dir: TempDir, // Underscore prefix keeps it alive until drop
        pub root: PathBuf,
    }

    impl HeaderTree {
        pub fn new() -> Result<Self, std::io::Error> {
            let temp_dir = TempDir::new()?;
            let root = temp_dir.path().to_path_buf();

            Ok(HeaderTree {
                _temp_dir: temp_dir,
                root,
            })
        }

        /// Absolute path of `relative` inside the tree
        pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
            self.root.join(relative)
        }

        /// Create a directory (and its parents)
        pub fn mkdir(&self, relative: impl AsRef<Path>) -> Result<PathBuf, std::io::Error> {
            let path = self.path(relative);
            fs::create_dir_all(&path)?;
            Ok(path)
        }

        /// Write a file, creating parent directories as needed
        pub fn write(
            &self,
            relative: impl AsRef<Path>,
            content: &str,
        ) -> Result<PathBuf, std::io::Error> {
            let path = self.path(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
            Ok(path)
        }

        /// Create an empty file, creating parent directories as needed
        pub fn touch(&self, relative: impl AsRef<Path>) -> Result<PathBuf, std::io::Error> {
            self.write(relative, "")
        }

        /// Remove a file or a whole directory
        pub fn remove(&self, relative: impl AsRef<Path>) -> Result<(), std::io::Error> {
            let path = self.path(relative);
            if path.is_dir() {
                fs::remove_dir_all(path)
            } else {
                fs::remove_file(path)
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_header_tree_layout() {
            let tree = HeaderTree::new().unwrap();
            let header = tree.touch("lib/sub/a.h").unwrap();
            assert!(header.is_file());
            assert!(tree.path("lib/sub").is_dir());

            tree.remove("lib").unwrap();
            assert!(!tree.path("lib").exists());
        }

        #[test]
        fn test_header_tree_cleanup_on_drop() {
            let root = {
                let tree = HeaderTree::new().unwrap();
                tree.touch("a.h").unwrap();
                tree.root.clone()
            };
            assert!(!root.exists());
        }
    }
}
