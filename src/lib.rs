//! chatmark is a terminal client for the Gemini API built around a small
//! chat-message renderer.
//!
//! The crate is organized in a few layers:
//! - [`ui`] parses messages into segments (fenced code blocks, inline code,
//!   bold, italic) and renders them as styled terminal lines, with per-block
//!   copy confirmation.
//! - [`core`] owns conversations, configuration, the send flow and the
//!   search redirector.
//! - [`api`] defines the `generateContent` payloads and HTTP client.
//! - [`cli`] parses arguments and dispatches subcommands.
//!
//! The binary (`src/main.rs`) routes through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
