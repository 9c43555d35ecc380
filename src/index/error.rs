use std::path::PathBuf;
use thiserror::Error;

/// Entries the header scanner had to skip
///
/// Scanning never aborts on these. Each one is logged and counted in
/// [`ScanStats`](crate::index::ScanStats) so a short candidate list can be
/// explained after the fact.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Search directory does not exist or is not a directory: {path}")]
    MissingRoot { path: PathBuf },

    #[error("Failed to read directory entry: {source}")]
    Entry {
        #[source]
        source: walkdir::Error,
    },

    #[error("Symlink cycle at {path}")]
    Cycle { path: PathBuf },

    #[error("Failed to canonicalize directory {path}: {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File name is not valid UTF-8: {path}")]
    NonUtf8Name { path: PathBuf },
}
