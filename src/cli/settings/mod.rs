//! Settings management for CLI set/unset commands.
//!
//! Each key has a handler; file-backed keys edit the [`Config`] passed in,
//! while `api-key` goes to the keyring.

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod registry;

#[cfg(test)]
mod tests;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Set the value from the words after the key, returning a success message.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value, returning a success message.
    fn unset(&self, config: &mut Config) -> Result<String, SettingError>;

    /// Whether a change needs `config` written back to disk.
    fn persists_config(&self) -> bool {
        true
    }
}
