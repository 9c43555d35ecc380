//! Include completion provider
//!
//! Owns the current [`HeaderIndex`] snapshot for one workspace. Rebuilds
//! resolve include paths from scratch, scan them into a new index and then
//! swap the shared `Arc`, so a query sees either the old or the new index in
//! full. Queries never touch the file system.

use lsp_types::{CompletionItem, CompletionItemKind, Position};
use parking_lot::{Mutex, RwLock};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{Level, debug, info, trace};

use crate::completion::{
    CompletionConfig, ConfigFileEvent, IncludeContext, IncludeDirectiveMatcher, line_prefix,
    utf16_line_prefix,
};
use crate::index::{HeaderIndex, HeaderScanner};
use crate::io::{FileSystemTrait, RealFileSystem};
use crate::project::{IncludePathResolver, LibraryPathProvider, Platform};

/// Header-name completion for `#include` directives in one workspace
pub struct IncludeCompletionProvider {
    /// Absolute configuration file path; `None` when the provider is inert
    config_file: Option<PathBuf>,
    platform: Platform,
    library_paths: Arc<dyn LibraryPathProvider>,
    resolver: IncludePathResolver,
    scanner: HeaderScanner,
    matcher: IncludeDirectiveMatcher,
    /// Current index, replaced whole after each rebuild
    snapshot: RwLock<Arc<HeaderIndex>>,
    /// Serializes rebuilds
    rebuild_lock: Mutex<()>,
    rebuild_count: AtomicUsize,
}

impl std::fmt::Debug for IncludeCompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncludeCompletionProvider")
            .field("config_file", &self.config_file)
            .field("platform", &self.platform)
            .field("headers", &self.snapshot.read().len())
            .field("rebuild_count", &self.rebuild_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl IncludeCompletionProvider {
    /// Create a provider backed by the real file system
    ///
    /// When the configuration names an existing workspace root the index is
    /// built immediately; otherwise the provider stays inert.
    pub fn new(config: CompletionConfig, library_paths: Arc<dyn LibraryPathProvider>) -> Self {
        Self::with_file_system(config, library_paths, Arc::new(RealFileSystem))
    }

    /// Create a provider whose configuration file checks go through `fs`
    pub fn with_file_system(
        config: CompletionConfig,
        library_paths: Arc<dyn LibraryPathProvider>,
        fs: Arc<dyn FileSystemTrait>,
    ) -> Self {
        let config_file = match &config.workspace_root {
            Some(root) if fs.is_dir(root) => Some(root.join(&config.config_file)),
            Some(root) => {
                info!(
                    "Workspace root {} is not a directory, include completion disabled",
                    root.display()
                );
                None
            }
            None => {
                info!("No workspace root, include completion disabled");
                None
            }
        };

        let provider = Self {
            config_file,
            platform: config.platform,
            library_paths,
            resolver: IncludePathResolver::new(fs),
            scanner: HeaderScanner::new(config.scan),
            matcher: IncludeDirectiveMatcher::default(),
            snapshot: RwLock::new(Arc::new(HeaderIndex::empty())),
            rebuild_lock: Mutex::new(()),
            rebuild_count: AtomicUsize::new(0),
        };

        if provider.is_active() {
            provider.rebuild();
        }

        provider
    }

    /// Whether a workspace is available and the index is maintained
    pub fn is_active(&self) -> bool {
        self.config_file.is_some()
    }

    /// Absolute path of the watched configuration file
    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Number of rebuilds performed so far, including the initial one
    pub fn rebuild_count(&self) -> usize {
        self.rebuild_count.load(Ordering::Acquire)
    }

    /// Rebuild the index after the configuration file was created, changed or deleted
    ///
    /// Ignored when the provider is inert.
    pub fn on_configuration_file_changed(&self) {
        if !self.is_active() {
            trace!("Ignoring configuration change, provider inert");
            return;
        }
        self.rebuild();
    }

    /// Handle a change notification for the configuration file
    ///
    /// All event kinds trigger the same full rebuild.
    pub fn handle_event(&self, event: ConfigFileEvent) {
        debug!("Configuration file {}", event);
        self.on_configuration_file_changed();
    }

    fn rebuild(&self) {
        let Some(config_file) = &self.config_file else {
            return;
        };

        let _guard = self.rebuild_lock.lock();
        let started = Instant::now();

        let defaults = self.library_paths.default_library_paths();
        let roots = self
            .resolver
            .resolve_from_file(&defaults, config_file, &self.platform);
        let index = Arc::new(self.scanner.scan(&roots));
        let header_count = index.len();

        *self.snapshot.write() = index;
        let count = self.rebuild_count.fetch_add(1, Ordering::AcqRel) + 1;

        crate::log_timing!(Level::DEBUG, "include_index_rebuild", started.elapsed());
        info!(
            "Rebuilt include index #{}: {} header(s) from {} director{}",
            count,
            header_count,
            roots.len(),
            if roots.len() == 1 { "y" } else { "ies" }
        );
    }

    /// Current index snapshot
    pub fn snapshot(&self) -> Arc<HeaderIndex> {
        self.snapshot.read().clone()
    }

    /// Header names currently in the index
    pub fn header_names(&self) -> Vec<String> {
        self.snapshot().names().map(str::to_string).collect()
    }

    /// Complete at `column` (0-based, in characters) of `line`
    ///
    /// Returns `None` when the cursor is not inside an open include target,
    /// and `Some` with every indexed header name otherwise (possibly empty).
    pub fn complete(&self, line: &str, column: usize) -> Option<Vec<CompletionItem>> {
        self.complete_prefix(line_prefix(line, column))
    }

    /// Complete at an LSP position within `line`
    ///
    /// `position.character` is taken in UTF-16 code units, the default LSP
    /// position encoding.
    pub fn complete_at(&self, line: &str, position: Position) -> Option<Vec<CompletionItem>> {
        self.complete_prefix(utf16_line_prefix(line, position.character as usize))
    }

    /// Open include target at `column` (0-based, in characters) of `line`
    ///
    /// Pure text inspection, independent of the index and of whether the
    /// provider is active.
    pub fn include_context(&self, line: &str, column: usize) -> Option<IncludeContext> {
        self.matcher.match_line(line_prefix(line, column))
    }

    /// Complete given the line text already truncated at the cursor
    pub fn complete_prefix(&self, text_up_to_cursor: &str) -> Option<Vec<CompletionItem>> {
        if !self.is_active() {
            return None;
        }

        let context = self.matcher.match_line(text_up_to_cursor)?;
        let index = self.snapshot();
        trace!(
            "Include completion for {:?} ({:?}), {} candidate(s)",
            context.partial,
            context.delimiter,
            index.len()
        );

        Some(index.names().map(header_completion_item).collect())
    }
}

fn header_completion_item(name: &str) -> CompletionItem {
    CompletionItem {
        label: name.to_string(),
        kind: Some(CompletionItemKind::FILE),
        ..CompletionItem::default()
    }
}
