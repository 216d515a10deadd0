use crate::ui::theme::Theme;
use ratatui::style::{Color as TuiColor, Style};
use ratatui::text::{Line, Span};
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

fn syntax_set() -> &'static SyntaxSet {
    static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

fn is_dark_background(c: &TuiColor) -> bool {
    match c {
        TuiColor::Rgb(r, g, b) => {
            let br = 0.2126 * (*r as f32) + 0.7152 * (*g as f32) + 0.0722 * (*b as f32);
            br < 128.0
        }
        TuiColor::White => false,
        _ => true,
    }
}

fn normalize_lang_hint(s: &str) -> String {
    let t = s.trim().to_ascii_lowercase();
    match t.as_str() {
        "py" | "python" => "python".into(),
        "bash" | "sh" | "zsh" | "shell" => "bash".into(),
        "js" | "javascript" | "jsx" => "javascript".into(),
        "ts" | "tsx" | "typescript" => "typescript".into(),
        "yaml" | "yml" => "yaml".into(),
        "rust" | "rs" => "rust".into(),
        "c" | "h" => "c".into(),
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" => "cpp".into(),
        "kotlin" | "kt" => "kotlin".into(),
        other => other.into(),
    }
}

pub(crate) fn pick_syntect_theme_name(theme: &Theme) -> &'static str {
    if is_dark_background(&theme.background_color) {
        "base16-ocean.dark"
    } else {
        "InspiredGitHub"
    }
}

/// Highlight a code block body. Returns `None` when no highlighting palette
/// is available so callers can fall back to plain lines; languages syntect
/// does not know are highlighted as plain text.
pub fn highlight_code_block(lang_hint: &str, code: &str, theme: &Theme) -> Option<Vec<Line<'static>>> {
    let ps = syntax_set();
    let syn_theme = theme_set().themes.get(pick_syntect_theme_name(theme))?;

    let lang = normalize_lang_hint(lang_hint);
    let syntax = ps
        .find_syntax_by_token(&lang)
        .unwrap_or_else(|| ps.find_syntax_plain_text());

    let mut h = HighlightLines::new(syntax, syn_theme);
    let bg = theme.md_codeblock_bg_color();

    let mut out: Vec<Line<'static>> = Vec::new();
    for line in LinesWithEndings::from(code) {
        let ranges = h.highlight_line(line, ps).ok()?;
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (style, text) in ranges {
            let frag = text.strip_suffix('\n').unwrap_or(text);
            let frag = frag.strip_suffix('\r').unwrap_or(frag);
            if frag.is_empty() {
                continue;
            }
            let fg = style.foreground;
            let mut st = Style::default().fg(TuiColor::Rgb(fg.r, fg.g, fg.b));
            if let Some(bgcol) = bg {
                st = st.bg(bgcol);
            }
            spans.push(Span::styled(frag.replace('\t', "    "), st));
        }
        out.push(Line::from(spans));
    }
    Some(out)
}
