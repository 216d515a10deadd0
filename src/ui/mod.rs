//! Message presentation.
//!
//! - [`markdown`]: segment parsing and line rendering.
//! - [`copy`]: per-code-block copy confirmation with a timed reset.
//! - [`theme`]: light/dark styles.
//! - [`ansi`]: writing rendered lines to a plain terminal.

pub mod ansi;
pub mod copy;
pub mod markdown;
pub mod theme;
