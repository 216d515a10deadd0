use std::error::Error;

use super::context::CliContext;
use crate::core::search::SearchEngine;

pub fn run_search(
    ctx: &CliContext,
    query: Vec<String>,
    engine: Option<&str>,
    open: bool,
) -> Result<(), Box<dyn Error>> {
    let engine = match engine {
        Some(name) => name.parse::<SearchEngine>()?,
        None => ctx.config.search_engine(),
    };
    let url = engine.search_url(&query.join(" "))?;
    println!("{url}");

    if open {
        webbrowser::open(&url).map_err(|err| format!("Failed to open browser: {err}"))?;
    }
    Ok(())
}
