//! Copies a code block from the last reply and shows the confirmation mark.

use std::error::Error;

use super::context::{print_lines, CliContext};
use crate::ui::copy::MessageView;
use crate::utils::clipboard::{Clipboard, SystemClipboard};

/// `index` counts code blocks from 1.
pub fn run_copy(
    ctx: &CliContext,
    index: usize,
    conversation: Option<&str>,
    plain: bool,
) -> Result<(), Box<dyn Error>> {
    run_copy_with(ctx, index, conversation, plain, &SystemClipboard)
}

fn run_copy_with(
    ctx: &CliContext,
    index: usize,
    conversation: Option<&str>,
    plain: bool,
    clipboard: &dyn Clipboard,
) -> Result<(), Box<dyn Error>> {
    let mut store = ctx.open_store()?;
    if let Some(id) = conversation {
        store.select(id)?;
    }
    let Some(message) = store.current().last_assistant_message() else {
        return Err("This conversation has no replies yet".into());
    };

    let mut view = MessageView::new(message);
    let count = view.code_block_count();
    let copied = index
        .checked_sub(1)
        .and_then(|i| view.copy_block(i, clipboard));
    if copied.is_none() {
        return Err(format!("No code block {index}; the last reply has {count}").into());
    }

    let lines = view.render(&ctx.theme(plain), &ctx.render_config(plain));
    print_lines(&lines, plain)?;
    Ok(())
}
