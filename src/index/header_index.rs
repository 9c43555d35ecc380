use serde::Serialize;
use std::collections::HashSet;

use crate::project::ResolvedPathSet;

/// Counters collected while building a [`HeaderIndex`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Distinct directories descended into
    pub directories_visited: usize,
    /// Header files seen, before base-name deduplication
    pub headers_seen: usize,
    /// Search roots that were missing or not directories
    pub missing_roots: usize,
    /// Entries dropped because of I/O errors or unusable names
    pub skipped_entries: usize,
    /// Directories not re-entered because they were already scanned
    pub revisited_directories: usize,
    /// Symlink loops detected by the walker
    pub cycles_avoided: usize,
}

/// Flat, deduplicated set of header base names
///
/// Built in one piece by [`HeaderScanner`](crate::index::HeaderScanner) and
/// never mutated afterwards; a configuration change produces a new index.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeaderIndex {
    names: HashSet<String>,
    roots: ResolvedPathSet,
    stats: ScanStats,
}

impl HeaderIndex {
    pub(crate) fn new(names: HashSet<String>, roots: ResolvedPathSet, stats: ScanStats) -> Self {
        Self {
            names,
            roots,
            stats,
        }
    }

    /// Index with no names, used before the first rebuild and when inert
    pub fn empty() -> Self {
        Self::default()
    }

    /// Header names in the set's natural (unordered) iteration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Header names sorted alphabetically
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Directories this index was built from
    pub fn roots(&self) -> &ResolvedPathSet {
        &self.roots
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}
