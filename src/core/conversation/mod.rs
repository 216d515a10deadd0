//! Saved conversations and the operations the CLI performs on them.
//!
//! The store always holds at least one conversation and always has a
//! current one. Deleting the last conversation replaces it with a fresh one.

mod error;
mod io;


pub use error::{ImportError, StoreError};
pub use io::export_file_name;

use crate::core::message::Message;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_TITLE: &str = "New conversation";
const TITLE_MAX_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub pinned: bool,
}

impl Conversation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            pinned: false,
        }
    }

    pub fn last_assistant_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|message| message.is_assistant())
    }
}

/// Title for a conversation whose first message is `message`.
pub fn generate_title(message: &str) -> String {
    match message.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    current_id: String,
    path: Option<PathBuf>,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    /// An in-memory store holding one fresh conversation.
    pub fn new() -> Self {
        Self::from_conversations(Vec::new())
    }

    /// Wrap already-loaded conversations. The first becomes current; an
    /// empty list gets one fresh conversation.
    pub fn from_conversations(conversations: Vec<Conversation>) -> Self {
        let mut store = Self {
            conversations,
            current_id: String::new(),
            path: None,
        };
        match store.conversations.first() {
            Some(first) => store.current_id = first.id.clone(),
            None => store.reset_to_fresh(),
        }
        store
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    fn current_index(&self) -> usize {
        self.position(&self.current_id).unwrap_or(0)
    }

    pub fn current(&self) -> &Conversation {
        &self.conversations[self.current_index()]
    }

    pub fn current_mut(&mut self) -> &mut Conversation {
        let index = self.current_index();
        &mut self.conversations[index]
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.conversations.iter().position(|conv| conv.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|conv| conv.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|conv| conv.id == id)
    }

    pub fn select(&mut self, id: &str) -> Result<(), StoreError> {
        if self.position(id).is_none() {
            return Err(StoreError::UnknownConversation(id.to_string()));
        }
        self.current_id = id.to_string();
        Ok(())
    }

    /// Unix milliseconds, bumped past any id already in the store.
    fn fresh_id(&self) -> String {
        let mut millis = chrono::Utc::now().timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if self.position(&candidate).is_none() {
                return candidate;
            }
            millis += 1;
        }
    }

    fn reset_to_fresh(&mut self) {
        let conv = Conversation::new(self.fresh_id());
        self.current_id = conv.id.clone();
        self.conversations = vec![conv];
    }

    /// Prepend a fresh conversation and make it current.
    pub fn create(&mut self) -> &Conversation {
        let conv = Conversation::new(self.fresh_id());
        debug!(id = %conv.id, "created conversation");
        self.current_id = conv.id.clone();
        self.conversations.insert(0, conv);
        &self.conversations[0]
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        if self.position(id).is_none() {
            return Err(StoreError::UnknownConversation(id.to_string()));
        }
        if self.conversations.len() == 1 {
            self.reset_to_fresh();
            return Ok(());
        }
        self.conversations.retain(|conv| conv.id != id);
        if self.conversations.is_empty() {
            // Only possible when every entry shared the id.
            self.reset_to_fresh();
        } else if self.current_id == id {
            self.current_id = self.conversations[0].id.clone();
        }
        debug!(id, "deleted conversation");
        Ok(())
    }

    /// Flip the pin flag, returning the new value.
    pub fn toggle_pin(&mut self, id: &str) -> Result<bool, StoreError> {
        let conv = self
            .get_mut(id)
            .ok_or_else(|| StoreError::UnknownConversation(id.to_string()))?;
        conv.pinned = !conv.pinned;
        Ok(conv.pinned)
    }

    /// Replace everything with one fresh conversation.
    pub fn clear(&mut self) {
        self.reset_to_fresh();
    }

    /// Pinned first, store order otherwise.
    pub fn sorted(&self) -> Vec<&Conversation> {
        let mut sorted: Vec<&Conversation> = self.conversations.iter().collect();
        sorted.sort_by_key(|conv| !conv.pinned);
        sorted
    }

    pub fn search(&self, query: &str) -> Vec<&Conversation> {
        let needle = query.to_lowercase();
        self.sorted()
            .into_iter()
            .filter(|conv| conv.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Pretty JSON of the conversations whose id is in `ids`, in store order.
    pub fn export(&self, ids: &[String]) -> Result<String, StoreError> {
        let selected: Vec<&Conversation> = self
            .conversations
            .iter()
            .filter(|conv| ids.iter().any(|id| *id == conv.id))
            .collect();
        if selected.is_empty() {
            return Err(StoreError::NothingSelected);
        }
        serde_json::to_string_pretty(&selected).map_err(StoreError::Serialize)
    }

    pub fn all_ids(&self) -> Vec<String> {
        self.conversations.iter().map(|conv| conv.id.clone()).collect()
    }

    /// Append the conversations in `json`, which must be a JSON array.
    /// On error nothing is added.
    pub fn import_json(&mut self, json: &str) -> Result<usize, ImportError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(ImportError::Parse)?;
        if !value.is_array() {
            return Err(ImportError::NotAnArray);
        }
        let imported: Vec<Conversation> =
            serde_json::from_value(value).map_err(ImportError::Parse)?;
        let count = imported.len();
        self.conversations.extend(imported);
        debug!(count, "imported conversations");
        Ok(count)
    }
}
