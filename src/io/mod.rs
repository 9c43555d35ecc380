//! I/O layer
//!
//! File system checks used by configuration loading and include-path
//! resolution. Directory enumeration for the header index lives in
//! [`crate::index::scanner`], which walks the real file system directly.

pub mod file_system;

pub use file_system::{FileSystemTrait, RealFileSystem};

#[cfg(test)]
pub use file_system::{MockFileSystemTrait, TestFileSystem};
