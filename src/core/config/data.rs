use super::defaults::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::core::search::SearchEngine;
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User preferences stored in `config.toml`.
///
/// The API key is not part of this file; see [`crate::core::api_key`].
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Appearance: "light", "dark" or "system"
    pub theme: Option<ThemeMode>,
    /// Engine used by `chatmark search`
    pub search_engine: Option<SearchEngine>,
    /// Gemini model id (e.g., "gemini-2.0-flash-exp")
    pub model: Option<String>,
    /// Base URL of the generative language API
    pub base_url: Option<String>,
    /// Enable syntax highlighting for fenced code blocks
    pub syntax: Option<bool>,
}

impl Config {
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.unwrap_or_default()
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.search_engine.unwrap_or_default()
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn syntax_enabled(&self) -> bool {
        self.syntax.unwrap_or(true)
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/chatmark/config.toml` → `~/.config/chatmark/config.toml`
/// - macOS: `/Users/user/Library/Application Support/...` → `~/Library/Application Support/...`
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
