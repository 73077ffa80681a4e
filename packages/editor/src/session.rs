//! # Edit Session Management
//!
//! An EditSession is one editor's view of one stored page: the composer that
//! edits it plus the bookkeeping needed to load and save it.
//!
//! Load and save are the only asynchronous paths. Both leave the in-memory
//! document and history exactly as they were when the store call fails, and a
//! failed save keeps the session dirty.

use crate::errors::EditorError;
use crate::store::DocumentStore;
use crate::Composer;
use pageforge_document::{sections, Document, IdGenerator};
use tracing::{info, warn};

pub struct EditSession {
    key: String,
    composer: Composer,

    /// History revision that matches what the store holds
    saved_revision: Option<u64>,
}

impl EditSession {
    /// Start an empty, unsaved page
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_max_history(key, 0)
    }

    /// Start an empty page with a capped history (0 = unlimited)
    pub fn with_max_history(key: impl Into<String>, max_history: usize) -> Self {
        let key = key.into();
        let composer = Composer::with_max_history(Document::new(), IdGenerator::new(&key), max_history);
        Self {
            key,
            composer,
            saved_revision: None,
        }
    }

    /// Load `key` from `store` into a fresh session
    pub async fn open<S: DocumentStore>(key: impl Into<String>, store: &S) -> Result<Self, EditorError> {
        let mut session = Self::new(key);
        session.load_from(store).await?;
        Ok(session)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    pub fn document(&self) -> &Document {
        self.composer.document()
    }

    /// Replace the document with the stored copy.
    ///
    /// On success history restarts from the loaded document and the session
    /// is clean. On failure nothing changes.
    pub async fn load_from<S: DocumentStore>(&mut self, store: &S) -> Result<(), EditorError> {
        let value = match store.load(&self.key).await {
            Ok(value) => value,
            Err(source) => {
                warn!(key = %self.key, error = %source, "load failed");
                return Err(EditorError::Load {
                    key: self.key.clone(),
                    source,
                });
            }
        };

        self.composer.load_sections(&value);
        self.saved_revision = Some(self.composer.history().current().revision);

        info!(key = %self.key, nodes = self.document().len(), "document loaded");
        Ok(())
    }

    /// Write the current document to `store`
    pub async fn save_to<S: DocumentStore>(&mut self, store: &S) -> Result<(), EditorError> {
        let revision = self.composer.history().current().revision;
        let value = sections::to_value(self.composer.document());

        if let Err(source) = store.save(&self.key, value).await {
            warn!(key = %self.key, error = %source, "save failed");
            return Err(EditorError::Save {
                key: self.key.clone(),
                source,
            });
        }

        self.saved_revision = Some(revision);
        info!(key = %self.key, revision, "document saved");
        Ok(())
    }

    /// True if the current document differs from the last load/save.
    ///
    /// Undoing back to the saved revision makes the session clean again.
    pub fn is_dirty(&self) -> bool {
        let current = self.composer.history().current().revision;
        match self.saved_revision {
            Some(saved) => saved != current,
            None => current != 0 || !self.document().is_empty(),
        }
    }
}
