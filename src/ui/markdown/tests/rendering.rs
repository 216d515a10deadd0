use super::helpers::line_texts;
use crate::core::message::Message;
use crate::ui::markdown::{
    render_message, render_message_with_copy_states, MessageRenderConfig, COPIED_MARK, COPY_MARK,
};
use crate::ui::theme::Theme;
use ratatui::style::Modifier;
use unicode_width::UnicodeWidthStr;

fn render(content: &str) -> Vec<String> {
    let theme = Theme::dark_default();
    line_texts(&render_message(
        &Message::assistant(content),
        &theme,
        &MessageRenderConfig::new(),
    ))
}

#[test]
fn user_messages_get_a_prefix_and_keep_formatting() {
    let theme = Theme::dark_default();
    let lines = render_message(
        &Message::user("hi **there**"),
        &theme,
        &MessageRenderConfig::new(),
    );
    assert_eq!(line_texts(&lines), vec!["You: hi there"]);
    let bold = lines[0]
        .spans
        .iter()
        .find(|span| span.content == "there")
        .expect("bold span present");
    assert!(bold.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn breaks_split_lines() {
    assert_eq!(render("a\nb\n\nc"), vec!["a", "b", "", "c"]);
}

#[test]
fn empty_message_renders_one_empty_line() {
    assert_eq!(render(""), vec![""]);
}

#[test]
fn inline_styles_are_distinct() {
    let theme = Theme::dark_default();
    let lines = render_message(
        &Message::assistant("`x` *y*"),
        &theme,
        &MessageRenderConfig::new(),
    );
    let spans = &lines[0].spans;
    assert_eq!(spans[0].content, "x");
    assert_eq!(spans[0].style, theme.md_inline_code_style);
    let italic = spans.iter().find(|s| s.content == "y").expect("italic span");
    assert!(italic.style.add_modifier.contains(Modifier::ITALIC));
}

#[test]
fn code_block_has_header_and_body() {
    let lines = render("Look:\n```rust\nfn main() {}\n```\nDone");
    assert_eq!(lines[0], "Look:");
    assert!(lines[1].starts_with(" rust"));
    assert!(lines[1].trim_end().ends_with(COPY_MARK));
    assert_eq!(lines[2].trim(), "fn main() {}");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "Done");
}

#[test]
fn code_block_rows_share_the_header_width() {
    let lines = render("```\nshort\na much longer line of code\n```");
    let widths: Vec<usize> = lines.iter().map(|l| l.width()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
}

#[test]
fn copied_block_shows_confirmation_mark() {
    let theme = Theme::dark_default();
    let message = Message::assistant("```a\n1\n```\n```b\n2\n```");
    let lines = line_texts(&render_message_with_copy_states(
        &message,
        &theme,
        &MessageRenderConfig::new(),
        &[false, true],
    ));
    let headers: Vec<&String> = lines
        .iter()
        .filter(|l| l.starts_with(" a") || l.starts_with(" b"))
        .collect();
    assert_eq!(headers.len(), 2);
    assert!(headers[0].contains(COPY_MARK));
    assert!(headers[1].contains(COPIED_MARK));
    assert!(!headers[1].contains(COPY_MARK));
}

#[test]
fn empty_code_block_still_renders_a_body_row() {
    let lines = render("```json\n```");
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(" json"));
    assert!(lines[1].trim().is_empty());
}

#[test]
fn terminal_width_caps_the_code_box() {
    let theme = Theme::dark_default();
    let long = "x".repeat(100);
    let message = Message::assistant(format!("```\n{long}\n```"));
    let cfg = MessageRenderConfig::new().with_terminal_width(Some(40));
    let lines = render_message(&message, &theme, &cfg);
    assert_eq!(lines[0].width(), 40);
    // Code is never truncated; only the padding is capped.
    assert_eq!(lines[1].to_string().trim(), long);
}

#[test]
fn syntax_highlighting_keeps_code_text() {
    let theme = Theme::dark_default();
    let message = Message::assistant("```python\nx = 1\n```");
    let cfg = MessageRenderConfig::new().with_syntax(true);
    let lines = line_texts(&render_message(&message, &theme, &cfg));
    assert_eq!(lines[1].trim(), "x = 1");
}

#[test]
fn tabs_in_code_are_expanded() {
    let lines = render("```\nfn x() {\n\tindented\n}\n```");
    assert!(lines[2].starts_with("     indented"));
    assert!(!lines[2].contains('\t'));
    assert!(lines[2].width() >= UnicodeWidthStr::width("     indented"));
}

#[test]
fn styled_spans_crossing_newlines_start_new_rows() {
    let theme = Theme::dark_default();
    let lines = render_message(
        &Message::assistant("x `a\nb` **c\nd**"),
        &theme,
        &MessageRenderConfig::new(),
    );
    assert_eq!(line_texts(&lines), vec!["x a", "b c", "d"]);
    for line in &lines {
        assert!(line.spans.iter().all(|span| !span.content.contains('\n')));
    }
    let d = lines[2]
        .spans
        .iter()
        .find(|span| span.content == "d")
        .expect("bold tail");
    assert!(d.style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(lines[1].spans[0].style, theme.md_inline_code_style);
}
