//! Include-path resolution
//!
//! Combines the toolchain's default library directories with the directories
//! a configuration document declares for the current platform. Resolution
//! never fails: a missing or corrupt document degrades to the defaults.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::io::{FileSystemTrait, RealFileSystem};
use crate::project::{ConfigError, CppProperties, Platform, load_cpp_properties};

/// Deduplicated set of normalized directories to search for headers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedPathSet {
    paths: BTreeSet<PathBuf>,
}

impl ResolvedPathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and insert; returns false if an equivalent path was present
    pub fn insert(&mut self, path: impl AsRef<Path>) -> bool {
        self.paths.insert(normalize_path(path.as_ref()))
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.paths.contains(&normalize_path(path.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: AsRef<Path>> FromIterator<P> for ResolvedPathSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

/// Lexically normalize a path
///
/// Repeated separators, `.` components and trailing separators disappear and
/// `..` folds against a preceding normal component. The file system is not
/// consulted, so symlinks are left alone and case is preserved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}

/// Resolves the set of directories eligible for header search
#[derive(Clone)]
pub struct IncludePathResolver {
    fs: Arc<dyn FileSystemTrait>,
}

impl std::fmt::Debug for IncludePathResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncludePathResolver")
            .field("fs", &"dyn FileSystemTrait")
            .finish()
    }
}

impl Default for IncludePathResolver {
    fn default() -> Self {
        Self::new(Arc::new(RealFileSystem))
    }
}

impl IncludePathResolver {
    pub fn new(fs: Arc<dyn FileSystemTrait>) -> Self {
        Self { fs }
    }

    /// Compute the resolved path set
    ///
    /// Every default path is kept, the sketch directory is added when it
    /// exists, and every section whose name equals `platform` contributes its
    /// `includePath` entries (all matching sections accumulate).
    pub fn resolve(
        &self,
        default_paths: &[PathBuf],
        config: Option<&CppProperties>,
        platform: &Platform,
    ) -> ResolvedPathSet {
        let mut resolved: ResolvedPathSet = default_paths.iter().collect();
        trace!("Seeded resolved paths with {} default(s)", resolved.len());

        let Some(config) = config else {
            return resolved;
        };

        if let Some(sketch) = &config.sketch {
            let sketch_dir = match sketch.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            if self.fs.is_dir(&sketch_dir) {
                resolved.insert(&sketch_dir);
            } else {
                debug!(
                    "Sketch directory {} does not exist, skipping",
                    sketch_dir.display()
                );
            }
        }

        for include_path in config.include_paths_for(platform.as_str()) {
            resolved.insert(include_path);
        }

        debug!(
            "Resolved {} include director{} for platform {}",
            resolved.len(),
            if resolved.len() == 1 { "y" } else { "ies" },
            platform
        );
        resolved
    }

    /// Load the configuration file at `config_file` and resolve against it
    ///
    /// Load failures are logged and treated as "no configuration".
    pub fn resolve_from_file(
        &self,
        default_paths: &[PathBuf],
        config_file: &Path,
        platform: &Platform,
    ) -> ResolvedPathSet {
        let config = match load_cpp_properties(self.fs.as_ref(), config_file) {
            Ok(config) => Some(config),
            Err(ConfigError::NotFound { path }) => {
                debug!("No configuration file at {}", path);
                None
            }
            Err(ConfigError::Empty { path }) => {
                debug!("Configuration file {} is empty", path);
                None
            }
            Err(e) => {
                warn!("Ignoring configuration: {}", e);
                None
            }
        };

        self.resolve(default_paths, config.as_ref(), platform)
    }
}
