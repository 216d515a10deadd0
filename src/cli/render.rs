//! Offline rendering: a message from a file or stdin, or a stored conversation.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use ratatui::text::{Line, Span};

use super::context::{print_lines, CliContext};
use crate::core::conversation::Conversation;
use crate::core::message::{Message, Role};
use crate::ui::markdown::{render_message, MessageRenderConfig};
use crate::ui::theme::Theme;

pub fn run_render(
    ctx: &CliContext,
    file: Option<&Path>,
    as_user: bool,
    plain: bool,
) -> Result<(), Box<dyn Error>> {
    let content = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let role = if as_user { Role::User } else { Role::Assistant };
    let message = Message::new(role, content);

    let lines = render_message(&message, &ctx.theme(plain), &ctx.render_config(plain));
    print_lines(&lines, plain)?;
    Ok(())
}

/// Title line followed by every message, separated by blank lines.
pub fn conversation_lines(
    conversation: &Conversation,
    theme: &Theme,
    cfg: &MessageRenderConfig,
) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(conversation.title.clone(), theme.title_style)];
    if conversation.pinned {
        title.push(Span::styled(" 📌", theme.pinned_marker_style));
    }
    let mut lines = vec![Line::from(title), Line::default()];

    for (i, message) in conversation.messages.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(render_message(message, theme, cfg));
    }
    lines
}

pub fn run_show(ctx: &CliContext, id: Option<&str>, plain: bool) -> Result<(), Box<dyn Error>> {
    let mut store = ctx.open_store()?;
    if let Some(id) = id {
        store.select(id)?;
    }
    let lines = conversation_lines(
        store.current(),
        &ctx.theme(plain),
        &ctx.render_config(plain),
    );
    print_lines(&lines, plain)?;
    Ok(())
}
