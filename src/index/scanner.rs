//! Header file discovery
//!
//! Walks every directory of a [`ResolvedPathSet`] and collects the base names
//! of header files. Traversal is iterative (walkdir keeps its own stack) and a
//! map of canonicalized directories shared across all roots of one scan keeps
//! symlink cycles and overlapping roots from being walked twice. The map holds
//! how many levels below each directory were already listed, so a shallower
//! visit under `max_depth` can still descend further than an earlier one.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{Level, debug, trace};
use walkdir::WalkDir;

use crate::index::{HeaderIndex, ScanError, ScanStats};
use crate::project::ResolvedPathSet;

/// Default extension identifying header files
pub const DEFAULT_HEADER_EXTENSION: &str = "h";

/// Options for configuring header scanning behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Follow symbolic links to files and directories
    pub follow_symlinks: bool,

    /// Maximum depth below each root (None = unlimited, 0 = root entries only)
    pub max_depth: Option<usize>,

    /// File extension, without the dot, that marks a header
    pub header_extension: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            max_depth: None,
            header_extension: DEFAULT_HEADER_EXTENSION.to_string(),
        }
    }
}

/// Builds [`HeaderIndex`] values from resolved include directories
#[derive(Debug, Clone, Default)]
pub struct HeaderScanner {
    options: ScanOptions,
}

/// Mutable state of one scan, shared across all roots
struct ScanState {
    names: HashSet<String>,
    /// Canonical directory -> levels below it already listed
    visited: HashMap<PathBuf, usize>,
    stats: ScanStats,
}

impl ScanState {
    fn skip(&mut self, error: ScanError) {
        debug!("Skipping during header scan: {}", error);
        match error {
            ScanError::MissingRoot { .. } => self.stats.missing_roots += 1,
            ScanError::Cycle { .. } => self.stats.cycles_avoided += 1,
            _ => self.stats.skipped_entries += 1,
        }
    }
}

impl HeaderScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan every root and build a fresh index
    ///
    /// Missing roots and unreadable entries are skipped; the scan itself
    /// cannot fail.
    pub fn scan(&self, roots: &ResolvedPathSet) -> HeaderIndex {
        let started = Instant::now();
        let mut state = ScanState {
            names: HashSet::new(),
            visited: HashMap::new(),
            stats: ScanStats::default(),
        };

        for root in roots.iter() {
            if !root.is_dir() {
                state.skip(ScanError::MissingRoot {
                    path: root.to_path_buf(),
                });
                continue;
            }
            self.scan_root(root, &mut state);
        }

        crate::log_timing!(Level::DEBUG, "header_scan", started.elapsed());
        debug!(
            "Indexed {} header name(s) from {} root(s): {:?}",
            state.names.len(),
            roots.len(),
            state.stats
        );

        HeaderIndex::new(state.names, roots.clone(), state.stats)
    }

    fn scan_root(&self, root: &Path, state: &mut ScanState) {
        trace!("Scanning {}", root.display());

        let mut walker = WalkDir::new(root).follow_links(self.options.follow_symlinks);
        // walkdir counts the root itself as depth 0
        let walk_depth = self.options.max_depth.map(|depth| depth + 1);
        if let Some(depth) = walk_depth {
            walker = walker.max_depth(depth);
        }

        let suffix = format!(".{}", self.options.header_extension);
        let mut entries = walker.into_iter();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    if source.loop_ancestor().is_some() {
                        state.skip(ScanError::Cycle {
                            path: source.path().map(Path::to_path_buf).unwrap_or_default(),
                        });
                    } else {
                        state.skip(ScanError::Entry { source });
                    }
                    continue;
                }
            };

            let file_type = entry.file_type();

            if file_type.is_dir() {
                let remaining = walk_depth.map_or(usize::MAX, |max| max - entry.depth());
                if remaining == 0 {
                    // At the depth limit; walkdir will not list it
                    continue;
                }

                let canonical = match entry.path().canonicalize() {
                    Ok(canonical) => canonical,
                    Err(source) => {
                        state.skip(ScanError::Canonicalize {
                            path: entry.path().to_path_buf(),
                            source,
                        });
                        entries.skip_current_dir();
                        continue;
                    }
                };

                match state.visited.get_mut(&canonical) {
                    Some(listed) if *listed >= remaining => {
                        trace!("Already scanned {}", entry.path().display());
                        state.stats.revisited_directories += 1;
                        entries.skip_current_dir();
                        continue;
                    }
                    Some(listed) => *listed = remaining,
                    None => {
                        state.visited.insert(canonical, remaining);
                    }
                }

                state.stats.directories_visited += 1;
            } else if file_type.is_file() {
                let Some(name) = entry.file_name().to_str() else {
                    state.skip(ScanError::NonUtf8Name {
                        path: entry.path().to_path_buf(),
                    });
                    continue;
                };

                if name.ends_with(&suffix) {
                    state.stats.headers_seen += 1;
                    state.names.insert(name.to_string());
                }
            }
        }
    }
}
