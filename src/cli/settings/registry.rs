//! Registry of setting handlers.

use std::collections::HashMap;

use super::handlers::{
    base_url_handler, model_handler, search_engine_handler, syntax_handler, theme_handler,
    ApiKeyHandler,
};
use super::SettingHandler;
use crate::core::api_key::ApiKeyStore;

/// Registry of all available setting handlers.
pub struct SettingRegistry {
    handlers: HashMap<&'static str, Box<dyn SettingHandler>>,
    /// Keys in registration order, for help output.
    display_order: Vec<&'static str>,
}

impl SettingRegistry {
    pub fn new() -> Self {
        Self::with_api_key_store(ApiKeyStore::new())
    }

    pub fn with_api_key_store(store: ApiKeyStore) -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            display_order: Vec::new(),
        };

        registry.register(Box::new(theme_handler()));
        registry.register(Box::new(search_engine_handler()));
        registry.register(Box::new(model_handler()));
        registry.register(Box::new(base_url_handler()));
        registry.register(Box::new(syntax_handler()));
        registry.register(Box::new(ApiKeyHandler::new(store)));

        registry
    }

    fn register(&mut self, handler: Box<dyn SettingHandler>) {
        let key = handler.key();
        self.display_order.push(key);
        self.handlers.insert(key, handler);
    }

    pub fn get(&self, key: &str) -> Option<&dyn SettingHandler> {
        self.handlers.get(key).map(|h| h.as_ref())
    }

    pub fn keys(&self) -> &[&'static str] {
        &self.display_order
    }
}

impl Default for SettingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
