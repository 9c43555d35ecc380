//! File system abstraction layer
//!
//! Provides a trait-based seam for the handful of file system checks the
//! include-path resolver performs, so configuration handling can be tested
//! against an in-memory file system.

use std::path::Path;

// ============================================================================
// File System Trait
// ============================================================================

/// Trait for the file system operations used while resolving include paths
#[cfg_attr(test, mockall::automock)]
pub trait FileSystemTrait: Send + Sync {
    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error>;
}

// ============================================================================
// Real File System Implementation
// ============================================================================

/// Real file system implementation using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystemTrait for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

// ============================================================================
// Test File System Implementation
// ============================================================================

#[cfg(test)]
mod test_filesystem {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct TestFileData {
        files: HashMap<PathBuf, String>,
        dirs: HashSet<PathBuf>,
    }

    /// In-memory file system for resolver tests
    #[derive(Clone, Default)]
    pub struct TestFileSystem {
        state: Arc<Mutex<TestFileData>>,
    }

    impl TestFileSystem {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a directory and all of its ancestors
        pub fn add_dir<P: AsRef<Path>>(&self, path: P) {
            let mut state = self.state.lock().unwrap();
            for ancestor in path.as_ref().ancestors() {
                if ancestor.as_os_str().is_empty() {
                    break;
                }
                state.dirs.insert(ancestor.to_path_buf());
            }
        }

        /// Register a file; its parent directories are created implicitly
        pub fn set_file_content<P: AsRef<Path>>(&self, path: P, content: &str) {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                self.add_dir(parent);
            }
            let mut state = self.state.lock().unwrap();
            state.files.insert(path.to_path_buf(), content.to_string());
        }

        pub fn remove_file<P: AsRef<Path>>(&self, path: P) {
            let mut state = self.state.lock().unwrap();
            state.files.remove(path.as_ref());
        }
    }

    impl FileSystemTrait for TestFileSystem {
        fn exists(&self, path: &Path) -> bool {
            let state = self.state.lock().unwrap();
            state.files.contains_key(path) || state.dirs.contains(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            let state = self.state.lock().unwrap();
            state.dirs.contains(path)
        }

        fn read_to_string(&self, path: &Path) -> Result<String, std::io::Error> {
            let state = self.state.lock().unwrap();
            state
                .files
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"))
        }
    }
}

#[cfg(test)]
pub use test_filesystem::TestFileSystem;

// ============================================================================
// Tests
// ============================================================================
