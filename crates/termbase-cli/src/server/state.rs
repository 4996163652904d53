//! Application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use termbase::Termbase;

/// Shared application state.
///
/// The write lock is the critical section around every mutating core call,
/// so multi-row operations are never observed half-applied.
#[derive(Clone)]
pub struct AppState {
    /// The termbase document being served.
    pub termbase: Arc<RwLock<Termbase>>,
    /// Path to the document file.
    pub data_path: PathBuf,
    /// Whether to auto-save after mutations.
    pub auto_save: bool,
}

impl AppState {
    /// Create new application state.
    pub fn new(termbase: Termbase, data_path: PathBuf) -> Self {
        Self {
            termbase: Arc::new(RwLock::new(termbase)),
            data_path,
            auto_save: true,
        }
    }

    /// Save the document to disk.
    pub async fn save(&self) -> Result<(), termbase::TermbaseError> {
        let base = self.termbase.read().await;
        base.save(&self.data_path)
    }
}
