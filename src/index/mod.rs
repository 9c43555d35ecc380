//! Header name index
//!
//! [`HeaderScanner`] walks the resolved include directories and produces an
//! immutable [`HeaderIndex`] snapshot holding the base names of every header
//! reachable from them.

pub mod error;
pub mod header_index;
pub mod scanner;

pub use error::ScanError;
pub use header_index::{HeaderIndex, ScanStats};
pub use scanner::{DEFAULT_HEADER_EXTENSION, HeaderScanner, ScanOptions};
