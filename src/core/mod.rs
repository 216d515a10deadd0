pub mod api_key;
pub mod chat;
pub mod config;
pub mod conversation;
pub mod keyring;
pub mod message;
pub mod search;
