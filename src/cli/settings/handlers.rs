//! Handlers for the individual configuration keys.

use std::str::FromStr;

use super::error::SettingError;
use super::helpers::{format_bool, joined_value, parse_bool};
use super::SettingHandler;
use crate::core::api_key::ApiKeyStore;
use crate::core::config::data::Config;
use crate::core::search::SearchEngine;
use crate::ui::theme::ThemeMode;

/// Data-driven handler for boolean (on/off) settings.
pub struct BooleanHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_display: &'static str,
    set_field: fn(&mut Config, Option<bool>),
}

impl SettingHandler for BooleanHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let input = joined_value(args).ok_or(SettingError::MissingArgs {
            hint: self.hint,
            example: self.example,
        })?;
        let value = parse_bool(&input).ok_or(SettingError::InvalidBoolean(input))?;
        (self.set_field)(config, Some(value));
        Ok(format!("✅ Set {} to: {}", self.key, format_bool(value)))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        (self.set_field)(config, None);
        Ok(format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default_display
        ))
    }
}

pub fn syntax_handler() -> BooleanHandler {
    BooleanHandler {
        key: "syntax",
        hint: "To set syntax highlighting, specify on or off:",
        example: "chatmark set syntax off",
        default_display: "on",
        set_field: |c, v| c.syntax = v,
    }
}

/// Free-form string settings.
pub struct StringHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_display: &'static str,
    set_field: fn(&mut Config, Option<String>),
}

impl SettingHandler for StringHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let value = joined_value(args).ok_or(SettingError::MissingArgs {
            hint: self.hint,
            example: self.example,
        })?;
        let message = format!("✅ Set {} to: {}", self.key, value);
        (self.set_field)(config, Some(value));
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        (self.set_field)(config, None);
        Ok(format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default_display
        ))
    }
}

pub fn model_handler() -> StringHandler {
    StringHandler {
        key: "model",
        hint: "To set the model, specify its id:",
        example: "chatmark set model gemini-1.5-pro",
        default_display: crate::core::config::defaults::DEFAULT_MODEL,
        set_field: |c, v| c.model = v,
    }
}

pub fn base_url_handler() -> StringHandler {
    StringHandler {
        key: "base-url",
        hint: "To set the API base URL, specify it:",
        example: "chatmark set base-url https://generativelanguage.googleapis.com/v1beta",
        default_display: crate::core::config::defaults::DEFAULT_BASE_URL,
        set_field: |c, v| c.base_url = v,
    }
}

/// Settings whose value is one of a fixed set of names.
pub struct ChoiceHandler<T: 'static> {
    key: &'static str,
    expected: &'static str,
    example: &'static str,
    default_display: &'static str,
    set_field: fn(&mut Config, Option<T>),
}

impl<T> SettingHandler for ChoiceHandler<T>
where
    T: FromStr + std::fmt::Display + Send + Sync + 'static,
{
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let input = joined_value(args).ok_or(SettingError::MissingArgs {
            hint: self.expected,
            example: self.example,
        })?;
        let value = input.parse::<T>().map_err(|_| SettingError::InvalidValue {
            key: self.key,
            input: input.clone(),
            expected: self.expected,
        })?;
        let message = format!("✅ Set {} to: {}", self.key, value);
        (self.set_field)(config, Some(value));
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        (self.set_field)(config, None);
        Ok(format!(
            "✅ Unset {} (will use default: {})",
            self.key, self.default_display
        ))
    }
}

pub fn theme_handler() -> ChoiceHandler<ThemeMode> {
    ChoiceHandler {
        key: "theme",
        expected: "light, dark, system",
        example: "chatmark set theme dark",
        default_display: "system",
        set_field: |c, v| c.theme = v,
    }
}

pub fn search_engine_handler() -> ChoiceHandler<SearchEngine> {
    ChoiceHandler {
        key: "search-engine",
        expected: "brave, google, duckduckgo",
        example: "chatmark set search-engine duckduckgo",
        default_display: "brave",
        set_field: |c, v| c.search_engine = v,
    }
}

/// `api-key` lives in the keyring, not in `config.toml`.
pub struct ApiKeyHandler {
    store: ApiKeyStore,
}

impl ApiKeyHandler {
    pub fn new(store: ApiKeyStore) -> Self {
        Self { store }
    }
}

impl SettingHandler for ApiKeyHandler {
    fn key(&self) -> &'static str {
        "api-key"
    }

    fn set(&self, args: &[String], _config: &mut Config) -> Result<String, SettingError> {
        let key = joined_value(args).ok_or(SettingError::MissingArgs {
            hint: "To store your Gemini API key, pass it after the key name:",
            example: "chatmark set api-key AIza...",
        })?;
        self.store
            .store(&key)
            .map_err(|err| SettingError::KeyringError(err.to_string()))?;
        Ok("✅ Stored api-key in the system keyring".to_string())
    }

    fn unset(&self, _config: &mut Config) -> Result<String, SettingError> {
        let removed = self
            .store
            .delete()
            .map_err(|err| SettingError::KeyringError(err.to_string()))?;
        Ok(if removed {
            "✅ Removed api-key from the system keyring".to_string()
        } else {
            "ℹ️  No api-key was stored".to_string()
        })
    }

    fn persists_config(&self) -> bool {
        false
    }
}
