use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::core::config::path_display;

#[derive(Debug)]
pub enum StoreError {
    UnknownConversation(String),
    NothingSelected,
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnknownConversation(id) => write!(f, "No conversation with id '{id}'"),
            StoreError::NothingSelected => write!(f, "No conversations selected for export"),
            StoreError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path_display(path), source)
            }
            StoreError::Corrupt { path, source } => {
                write!(f, "Failed to parse {}: {}", path_display(path), source)
            }
            StoreError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path_display(path), source)
            }
            StoreError::Serialize(err) => write!(f, "Failed to serialize conversations: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Read { source, .. } | StoreError::Write { source, .. } => Some(source),
            StoreError::Corrupt { source, .. } | StoreError::Serialize(source) => Some(source),
            StoreError::UnknownConversation(_) | StoreError::NothingSelected => None,
        }
    }
}

#[derive(Debug)]
pub enum ImportError {
    /// The file is not valid JSON, or an entry is not a conversation.
    Parse(serde_json::Error),
    /// Valid JSON, but not an array.
    NotAnArray,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Parse(err) => write!(f, "Error importing file: {err}"),
            ImportError::NotAnArray => write!(f, "Invalid file format: expected a JSON array"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::Parse(err) => Some(err),
            ImportError::NotAnArray => None,
        }
    }
}
