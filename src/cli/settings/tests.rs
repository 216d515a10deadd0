use super::helpers::{joined_value, parse_bool};
use super::*;
use crate::core::api_key::ApiKeyStore;
use crate::core::search::SearchEngine;
use crate::ui::theme::ThemeMode;

fn registry() -> SettingRegistry {
    SettingRegistry::with_api_key_store(ApiKeyStore::new_with_keyring(false))
}

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn registry_lists_keys_in_display_order() {
    assert_eq!(
        registry().keys(),
        &["theme", "search-engine", "model", "base-url", "syntax", "api-key"]
    );
    assert!(registry().get("default-provider").is_none());
}

#[test]
fn theme_and_engine_accept_known_names() {
    let registry = registry();
    let mut config = Config::default();

    let message = registry
        .get("theme")
        .unwrap()
        .set(&args(&["Dark"]), &mut config)
        .unwrap();
    assert_eq!(message, "✅ Set theme to: dark");
    assert_eq!(config.theme, Some(ThemeMode::Dark));

    registry
        .get("search-engine")
        .unwrap()
        .set(&args(&["google"]), &mut config)
        .unwrap();
    assert_eq!(config.search_engine, Some(SearchEngine::Google));
}

#[test]
fn invalid_choice_is_rejected_without_changes() {
    let registry = registry();
    let mut config = Config::default();

    let err = registry
        .get("theme")
        .unwrap()
        .set(&args(&["sepia"]), &mut config)
        .unwrap_err();
    assert!(matches!(
        err,
        SettingError::InvalidValue { key: "theme", ref input, .. } if input == "sepia"
    ));
    assert_eq!(config, Config::default());
}

#[test]
fn string_settings_join_words_and_unset() {
    let registry = registry();
    let mut config = Config::default();
    let handler = registry.get("model").unwrap();

    handler
        .set(&args(&["gemini-1.5-pro", " "]), &mut config)
        .unwrap();
    assert_eq!(config.model.as_deref(), Some("gemini-1.5-pro"));

    let message = handler.unset(&mut config).unwrap();
    assert_eq!(config.model, None);
    assert!(message.contains("gemini-2.0-flash-exp"));
}

#[test]
fn missing_value_reports_usage() {
    let registry = registry();
    let mut config = Config::default();
    let err = registry
        .get("base-url")
        .unwrap()
        .set(&[], &mut config)
        .unwrap_err();
    assert!(matches!(err, SettingError::MissingArgs { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn syntax_accepts_boolean_words() {
    let registry = registry();
    let mut config = Config::default();
    let handler = registry.get("syntax").unwrap();

    handler.set(&args(&["off"]), &mut config).unwrap();
    assert_eq!(config.syntax, Some(false));
    assert!(matches!(
        handler.set(&args(&["maybe"]), &mut config),
        Err(SettingError::InvalidBoolean(_))
    ));
    assert_eq!(config.syntax, Some(false));
}

#[test]
fn api_key_never_touches_config() {
    let registry = registry();
    let handler = registry.get("api-key").unwrap();
    let mut config = Config::default();

    assert!(!handler.persists_config());
    assert!(matches!(
        handler.set(&args(&["secret"]), &mut config),
        Err(SettingError::KeyringError(_))
    ));
    assert!(handler.unset(&mut config).unwrap().contains("No api-key"));
    assert_eq!(config, Config::default());
}

#[test]
fn helper_parsing() {
    assert_eq!(parse_bool(" YES "), Some(true));
    assert_eq!(parse_bool("0"), Some(false));
    assert_eq!(parse_bool("perhaps"), None);
    assert_eq!(joined_value(&args(&["  "])), None);
    assert_eq!(
        joined_value(&args(&["a", "b"])).as_deref(),
        Some("a b")
    );
}
