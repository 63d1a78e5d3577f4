//! Editing session — the surface that owns the document history and talks
//! to the collaborators.
//!
//! Flow per edit: `set` on the history → if the document changed, arm a
//! trailing-edge save toward the `DocumentStore` (edits inside the debounce
//! window coalesce; only the most recent pending document survives).
//!
//! Flow per rewrite: anonymize (if privacy mode) → `GenerationService` →
//! restore identity from the pre-call document → `set`. A failed call is
//! returned to the caller and never reaches the history.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::diff::{diff_resumes, FieldDiff};
use crate::errors::EditorError;
use crate::generate::GenerationService;
use crate::history::HistoryStore;
use crate::models::Resume;
use crate::privacy::{anonymize, restore};
use crate::store::DocumentStore;

pub struct EditorSession {
    session_id: Uuid,
    key: String,
    history: HistoryStore<Resume>,
    store: Arc<dyn DocumentStore>,
    service: Arc<dyn GenerationService>,
    config: EditorConfig,
    pending_save: Option<JoinHandle<()>>,
}

impl EditorSession {
    /// Opens a session on the document stored under `key`, starting from an
    /// empty document when the key has never been saved.
    pub async fn open(
        key: impl Into<String>,
        store: Arc<dyn DocumentStore>,
        service: Arc<dyn GenerationService>,
        config: EditorConfig,
    ) -> Result<Self, EditorError> {
        let key = key.into();
        let document = store.load(&key).await?.unwrap_or_default();
        let history = match config.history_limit {
            Some(limit) => HistoryStore::with_limit(document, limit),
            None => HistoryStore::new(document),
        };
        let session_id = Uuid::new_v4();
        info!(%session_id, %key, "editor session opened");
        Ok(EditorSession {
            session_id,
            key,
            history,
            store,
            service,
            config,
            pending_save: None,
        })
    }

    pub fn document(&self) -> &Resume {
        self.history.present()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Records an edited document. Returns false when the document equals
    /// the current one (no history entry, no save armed).
    pub fn edit(&mut self, document: Resume) -> bool {
        if !self.history.set(document) {
            return false;
        }
        debug!(session_id = %self.session_id, "edit accepted");
        self.arm_save();
        true
    }

    /// Steps back one edit and re-arms the save toward the restored
    /// document. Returns false at the bottom of the history.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.arm_save();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.arm_save();
        true
    }

    /// Switches to a different stored version of the document. History is
    /// discarded and no save is armed: loading is not an edit, and writing
    /// the loaded document straight back would store an identical copy.
    pub fn load_version(&mut self, document: Resume) {
        self.cancel_pending_save();
        self.history.reset(document);
        debug!(session_id = %self.session_id, "loaded document version, history cleared");
    }

    /// The per-field diff between the snapshot `undo` would return to and
    /// the current document. Empty when there is nothing to undo.
    pub fn changes_from_previous(&self) -> Vec<FieldDiff> {
        match self.history.previous() {
            Some(previous) => diff_resumes(previous, self.history.present()),
            None => Vec::new(),
        }
    }

    /// Sends the current document through the generation service and
    /// records the result as a new edit.
    ///
    /// With privacy mode on, the service sees placeholder identity fields
    /// and the response gets the real identity copied back before it enters
    /// the history. On failure the history is left untouched so the caller
    /// can retry.
    pub async fn rewrite(&mut self, instruction: &str) -> Result<(), EditorError> {
        let original = self.history.present().clone();
        let outbound = if self.config.privacy_mode {
            anonymize(&original)
        } else {
            original.clone()
        };

        info!(
            session_id = %self.session_id,
            privacy = self.config.privacy_mode,
            "requesting rewrite"
        );
        let generated = match self.service.generate(&outbound, instruction).await {
            Ok(document) => document,
            Err(e) => {
                warn!(session_id = %self.session_id, error = %e, "rewrite failed, document unchanged");
                return Err(EditorError::Generation(e));
            }
        };

        let revised = if self.config.privacy_mode {
            restore(&generated, &original)
        } else {
            generated
        };
        if self.history.set(revised) {
            self.arm_save();
        }
        Ok(())
    }

    /// Forces any pending debounced save out immediately. Call on session
    /// teardown so the last edits inside the window are not lost.
    pub async fn flush(&mut self) -> Result<(), EditorError> {
        if let Some(handle) = self.pending_save.take() {
            if handle.is_finished() {
                return Ok(());
            }
            handle.abort();
            self.store.save(&self.key, self.history.present()).await?;
            debug!(session_id = %self.session_id, "pending save flushed");
        }
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────
    // Debounced persistence
    // ────────────────────────────────────────────────────────────────────

    /// Arms the trailing-edge save: any previously pending save is
    /// canceled, so only the most recent document within the window is
    /// written.
    fn arm_save(&mut self) {
        self.cancel_pending_save();

        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let document = self.history.present().clone();
        let delay = self.config.debounce;
        let session_id = self.session_id;

        self.pending_save = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match store.save(&key, &document).await {
                Ok(()) => debug!(%session_id, %key, "debounced save written"),
                Err(e) => warn!(%session_id, %key, error = %e, "debounced save failed"),
            }
        }));
    }

    fn cancel_pending_save(&mut self) {
        if let Some(handle) = self.pending_save.take() {
            handle.abort();
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
