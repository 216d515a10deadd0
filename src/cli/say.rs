//! One-shot "say" command: send a prompt, store the exchange, print the reply.

use std::error::Error;

use super::context::{print_lines, CliContext};
use crate::api::GeminiClient;
use crate::core::api_key::{ApiKeyStore, API_KEY_ENV};
use crate::core::chat::send_message;
use crate::ui::markdown::render_message;

pub async fn run_say(
    ctx: &CliContext,
    prompt: Vec<String>,
    conversation: Option<String>,
    new: bool,
    plain: bool,
) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: chatmark say <prompt>");
        std::process::exit(1);
    }

    let Some(api_key) = ApiKeyStore::new().resolve() else {
        eprintln!("❌ No API key configured.");
        eprintln!();
        eprintln!("💡 Quick fixes:");
        eprintln!("  • chatmark set api-key <KEY>");
        eprintln!("  • export {API_KEY_ENV}=<KEY>");
        std::process::exit(1);
    };

    let mut store = ctx.open_store()?;
    if new {
        store.create();
    } else if let Some(id) = conversation.as_deref() {
        store.select(id)?;
    }

    let client = GeminiClient::new(ctx.config.base_url(), ctx.config.model(), api_key);
    let reply = send_message(store.current_mut(), &prompt, &client)
        .await
        .cloned();
    store.save()?;

    if let Some(reply) = reply {
        let lines = render_message(&reply, &ctx.theme(plain), &ctx.render_config(plain));
        print_lines(&lines, plain)?;
    }
    Ok(())
}
