//! Configuration file change notifications
//!
//! The host's file watcher forwards create/change/delete notifications for
//! the configuration file over a channel. A single consumer task applies them
//! one at a time, so rebuilds never overlap.

use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::completion::IncludeCompletionProvider;

/// Kind of change observed on the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileEvent {
    Created,
    Changed,
    Deleted,
}

impl fmt::Display for ConfigFileEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ConfigFileEvent::Created => "created",
            ConfigFileEvent::Changed => "changed",
            ConfigFileEvent::Deleted => "deleted",
        };
        f.write_str(kind)
    }
}

/// Consume configuration events until the sender side closes
///
/// Each event runs one full rebuild on the blocking pool and is awaited
/// before the next event is received. Resolves to the number of events
/// applied.
pub fn spawn_config_watch(
    provider: Arc<IncludeCompletionProvider>,
    mut receiver: mpsc::Receiver<ConfigFileEvent>,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut applied = 0;

        while let Some(event) = receiver.recv().await {
            let provider = Arc::clone(&provider);
            match tokio::task::spawn_blocking(move || provider.handle_event(event)).await {
                Ok(()) => applied += 1,
                Err(e) => warn!("Include index rebuild for {} event failed: {}", event, e),
            }
        }

        debug!(
            "Configuration event channel closed after {} event(s)",
            applied
        );
        applied
    })
}
