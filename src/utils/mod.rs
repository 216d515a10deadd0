pub mod clipboard;
pub mod syntax;
pub mod url;
