pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONVERSATIONS_FILE_NAME: &str = "conversations.json";
