//! Turns a search query into a URL for the configured engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Brave,
    Google,
    DuckDuckGo,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 3] = [
        SearchEngine::Brave,
        SearchEngine::Google,
        SearchEngine::DuckDuckGo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchEngine::Brave => "brave",
            SearchEngine::Google => "google",
            SearchEngine::DuckDuckGo => "duckduckgo",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            SearchEngine::Brave => "https://search.brave.com/search?q=",
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
        }
    }

    /// Build the results URL for `query`.
    pub fn search_url(self, query: &str) -> Result<String, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(format!("{}{}", self.base_url(), urlencoding::encode(query)))
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchEngine {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| SearchError::UnknownEngine(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    EmptyQuery,
    UnknownEngine(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "Please enter a search term."),
            SearchError::UnknownEngine(name) => write!(
                f,
                "Unknown search engine '{name}'. Expected one of: brave, google, duckduckgo"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
