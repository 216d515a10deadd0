use super::parse_message;
use super::segment::{CodeBlock, Segment};
use crate::core::message::Message;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub const USER_PREFIX: &str = "You: ";
/// Shown in a code block header before the block has been copied.
pub const COPY_MARK: &str = "📋";
/// Shown in a code block header while its copy confirmation is active.
pub const COPIED_MARK: &str = "✓";

/// Options for turning a message into terminal lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageRenderConfig {
    pub syntax_enabled: bool,
    pub terminal_width: Option<usize>,
}

impl MessageRenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_syntax(mut self, enabled: bool) -> Self {
        self.syntax_enabled = enabled;
        self
    }

    pub fn with_terminal_width(mut self, width: Option<usize>) -> Self {
        self.terminal_width = width.filter(|w| *w > 0);
        self
    }
}

/// Render a message with every code block in its not-yet-copied state.
pub fn render_message(
    message: &Message,
    theme: &Theme,
    cfg: &MessageRenderConfig,
) -> Vec<Line<'static>> {
    render_message_with_copy_states(message, theme, cfg, &[])
}

/// Render a message, reading the copy confirmation of the n-th code block
/// from `copied[n]`. Missing entries count as not copied.
///
/// The message is parsed afresh on every call.
pub fn render_message_with_copy_states(
    message: &Message,
    theme: &Theme,
    cfg: &MessageRenderConfig,
    copied: &[bool],
) -> Vec<Line<'static>> {
    let base = if message.is_user() {
        theme.user_text_style
    } else {
        theme.assistant_text_style
    };

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    if message.is_user() {
        current.push(Span::styled(USER_PREFIX, theme.user_prefix_style));
    }

    let mut block_index = 0;
    for segment in parse_message(&message.content) {
        match segment {
            Segment::PlainText(text) => current.push(Span::styled(text.to_string(), base)),
            Segment::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
            Segment::InlineCode(text) => {
                push_styled(text, theme.md_inline_code_style, &mut current, &mut lines)
            }
            Segment::Bold(text) => push_styled(
                text,
                base.add_modifier(Modifier::BOLD),
                &mut current,
                &mut lines,
            ),
            Segment::Italic(text) => push_styled(
                text,
                base.add_modifier(Modifier::ITALIC),
                &mut current,
                &mut lines,
            ),
            Segment::CodeBlock(block) => {
                if !current.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                let is_copied = copied.get(block_index).copied().unwrap_or(false);
                push_code_block(&block, is_copied, theme, cfg, &mut lines);
                block_index += 1;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Emphasis and code spans may cross newlines; each `\n` ends the current
/// row so no span carries a raw newline.
fn push_styled(
    text: &str,
    style: Style,
    current: &mut Vec<Span<'static>>,
    lines: &mut Vec<Line<'static>>,
) {
    for (i, piece) in text.split('\n').enumerate() {
        if i > 0 {
            lines.push(Line::from(std::mem::take(current)));
        }
        if !piece.is_empty() {
            current.push(Span::styled(piece.to_string(), style));
        }
    }
}

fn detab(s: &str) -> String {
    s.replace('\t', "    ")
}

fn plain_code_lines(code: &str, theme: &Theme) -> Vec<Line<'static>> {
    let style = theme.md_codeblock_body_style();
    code.lines()
        .map(|line| Line::from(Span::styled(detab(line), style)))
        .collect()
}

/// Header bar (language label and copy mark) followed by the code lines,
/// each padded to a common width so the block reads as one box.
fn push_code_block(
    block: &CodeBlock<'_>,
    copied: bool,
    theme: &Theme,
    cfg: &MessageRenderConfig,
    lines: &mut Vec<Line<'static>>,
) {
    let mut body = if cfg.syntax_enabled {
        crate::utils::syntax::highlight_code_block(block.language, block.code, theme)
            .unwrap_or_else(|| plain_code_lines(block.code, theme))
    } else {
        plain_code_lines(block.code, theme)
    };
    if body.is_empty() {
        body.push(Line::default());
    }

    let mark = if copied { COPIED_MARK } else { COPY_MARK };
    let label = format!(" {}", block.language);
    let mark_cell = format!("{mark} ");
    let header_min = label.width() + 1 + mark_cell.width();

    let code_width = body.iter().map(Line::width).max().unwrap_or(0) + 2;
    let mut width = header_min.max(code_width);
    if let Some(limit) = cfg.terminal_width {
        width = width.min(limit.max(header_min));
    }

    let fill = width.saturating_sub(label.width() + mark_cell.width());
    let mark_style = if copied {
        theme.copied_indicator_style
    } else {
        theme.copy_indicator_style
    };
    lines.push(Line::from(vec![
        Span::styled(label, theme.md_codeblock_header_style),
        Span::styled(" ".repeat(fill), theme.md_codeblock_header_style),
        Span::styled(mark_cell, mark_style),
    ]));

    let body_style = theme.md_codeblock_body_style();
    for mut line in body {
        let pad = width.saturating_sub(line.width() + 1);
        line.spans.insert(0, Span::styled(" ", body_style));
        if pad > 0 {
            line.spans.push(Span::styled(" ".repeat(pad), body_style));
        }
        lines.push(line);
    }
}
