use crate::core::keyring::KeyringAccessError;
use keyring::Entry;
use tracing::{debug, warn};

const KEYRING_SERVICE: &str = "chatmark";
const KEYRING_USER: &str = "gemini";

/// Environment variable consulted when the keyring holds no key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Stores the Gemini API key in the system keyring.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyStore {
    use_keyring: bool,
}

impl Default for ApiKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiKeyStore {
    pub fn new() -> Self {
        Self { use_keyring: true }
    }

    pub fn new_with_keyring(use_keyring: bool) -> Self {
        Self { use_keyring }
    }

    pub fn get(&self) -> Result<Option<String>, KeyringAccessError> {
        if !self.use_keyring {
            return Ok(None);
        }

        let entry = Entry::new(KEYRING_SERVICE, KEYRING_USER)?;
        match entry.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(KeyringAccessError::from(err)),
        }
    }

    pub fn store(&self, key: &str) -> Result<(), Box<dyn std::error::Error>> {
        let key = key.trim();
        if key.is_empty() {
            return Err("API key cannot be empty".into());
        }
        if !self.use_keyring {
            return Err("Keyring access is disabled".into());
        }

        let entry = Entry::new(KEYRING_SERVICE, KEYRING_USER)?;
        entry
            .set_password(key)
            .map_err(|err| Box::new(KeyringAccessError::from(err)) as Box<dyn std::error::Error>)
    }

    pub fn delete(&self) -> Result<bool, Box<dyn std::error::Error>> {
        if !self.use_keyring {
            return Ok(false);
        }

        let entry = Entry::new(KEYRING_SERVICE, KEYRING_USER)?;
        match entry.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(Box::new(KeyringAccessError::from(err))),
        }
    }

    /// Keyring first, then `GEMINI_API_KEY`.
    ///
    /// Keyring failures fall through to the environment. A locked or
    /// unreachable keyring is only logged at debug level; anything else is
    /// a warning.
    pub fn resolve(&self) -> Option<String> {
        self.resolve_with_env(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_with_env(&self, env_value: Option<String>) -> Option<String> {
        resolve_from(self.get(), env_value)
    }
}

fn resolve_from(
    lookup: Result<Option<String>, KeyringAccessError>,
    env_value: Option<String>,
) -> Option<String> {
    match lookup {
        Ok(Some(key)) => return Some(key),
        Ok(None) => {}
        Err(err) if err.is_recoverable() => {
            debug!(error = %err, "keyring unavailable, falling back to {API_KEY_ENV}")
        }
        Err(err) => warn!(error = %err, "keyring lookup failed"),
    }
    env_value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_keyring_reads_nothing() {
        let store = ApiKeyStore::new_with_keyring(false);
        assert_eq!(store.get().expect("get"), None);
        assert!(!store.delete().expect("delete"));
    }

    #[test]
    fn resolve_falls_back_to_environment_value() {
        let store = ApiKeyStore::new_with_keyring(false);
        assert_eq!(
            store.resolve_with_env(Some("  abc123 \n".to_string())),
            Some("abc123".to_string())
        );
        assert_eq!(store.resolve_with_env(Some("   ".to_string())), None);
        assert_eq!(store.resolve_with_env(None), None);
    }

    fn captured_logs(f: impl FnOnce()) -> String {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct SharedBuf(Arc<Mutex<Vec<u8>>>);

        impl Write for SharedBuf {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn locked_keyring_falls_back_quietly() {
        let locked = KeyringAccessError::from(keyring::Error::NoStorageAccess(Box::new(
            std::io::Error::other("locked"),
        )));
        let mut resolved = None;
        let logs = captured_logs(|| {
            resolved = resolve_from(Err(locked), Some("env-key".to_string()));
        });
        assert_eq!(resolved, Some("env-key".to_string()));
        assert!(logs.contains("DEBUG"), "logs: {logs}");
        assert!(!logs.contains("WARN"), "logs: {logs}");
    }

    #[test]
    fn broken_keyring_warns_and_falls_back() {
        let broken = KeyringAccessError::from(keyring::Error::TooLong("user".into(), 10));
        let mut resolved = None;
        let logs = captured_logs(|| {
            resolved = resolve_from(Err(broken), Some("env-key".to_string()));
        });
        assert_eq!(resolved, Some("env-key".to_string()));
        assert!(logs.contains("WARN"), "logs: {logs}");
    }

    #[test]
    fn keyring_key_wins_over_environment() {
        assert_eq!(
            resolve_from(Ok(Some("stored".to_string())), Some("env".to_string())),
            Some("stored".to_string())
        );
    }

    #[test]
    fn blank_key_is_rejected_before_touching_keyring() {
        let store = ApiKeyStore::new_with_keyring(true);
        let err = store.store("   ").expect_err("blank key");
        assert_eq!(err.to_string(), "API key cannot be empty");
    }
}
