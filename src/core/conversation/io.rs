use super::{Conversation, ConversationStore, StoreError};
use crate::core::config::io::write_atomically;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `gemini-backup-<millis>.json`
pub fn export_file_name(millis: i64) -> String {
    format!("gemini-backup-{millis}.json")
}

impl ConversationStore {
    /// Load from `path`. A missing file, or one holding an empty array,
    /// yields one fresh conversation.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let conversations = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str::<Vec<Conversation>>(&contents).map_err(|source| {
                StoreError::Corrupt {
                    path: path.clone(),
                    source,
                }
            })?
        } else {
            debug!(path = %path.display(), "no saved conversations");
            Vec::new()
        };

        let mut store = Self::from_conversations(conversations);
        store.path = Some(path);
        Ok(store)
    }

    /// Write to the path the store was loaded from. In-memory stores are a
    /// no-op.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        self.save_to(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.conversations).map_err(StoreError::Serialize)?;
        write_atomically(path, json.as_bytes()).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), count = self.conversations.len(), "saved conversations");
        Ok(())
    }

    /// Export `ids` into `dir` under a timestamped name and return the path.
    pub fn export_to_dir(&self, ids: &[String], dir: &Path) -> Result<PathBuf, StoreError> {
        let json = self.export(ids)?;
        let path = dir.join(export_file_name(chrono::Utc::now().timestamp_millis()));
        write_atomically(&path, json.as_bytes()).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "exported conversations");
        Ok(path)
    }
}
