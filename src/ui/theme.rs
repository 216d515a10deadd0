use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Appearance preference persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Light switches to dark; dark and system switch to light.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark | ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    // Used to pick a matching syntax highlighting palette
    pub background_color: Color,
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_text_style: Style,
    pub title_style: Style,
    pub pinned_marker_style: Style,

    // Message formatting
    pub md_inline_code_style: Style,
    pub md_codeblock_header_style: Style,
    pub md_codeblock_text_style: Style,
    pub md_codeblock_bg: Option<Color>,
    pub copy_indicator_style: Style,
    pub copied_indicator_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_text_style: Style::default().fg(Color::White),
            title_style: Style::default().fg(Color::Gray),
            pinned_marker_style: Style::default().fg(Color::Yellow),

            md_inline_code_style: Style::default()
                .fg(Color::LightYellow)
                .bg(Color::Rgb(48, 48, 48)),
            md_codeblock_header_style: Style::default()
                .fg(Color::Gray)
                .bg(Color::Rgb(58, 58, 58)),
            md_codeblock_text_style: Style::default().fg(Color::Rgb(220, 220, 220)),
            md_codeblock_bg: Some(Color::Rgb(30, 30, 30)),
            copy_indicator_style: Style::default()
                .fg(Color::Gray)
                .bg(Color::Rgb(58, 58, 58)),
            copied_indicator_style: Style::default()
                .fg(Color::LightGreen)
                .bg(Color::Rgb(58, 58, 58))
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,
            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_text_style: Style::default().fg(Color::Black),
            title_style: Style::default().fg(Color::DarkGray),
            pinned_marker_style: Style::default().fg(Color::Magenta),

            md_inline_code_style: Style::default()
                .fg(Color::Red)
                .bg(Color::Rgb(238, 238, 238)),
            md_codeblock_header_style: Style::default()
                .fg(Color::DarkGray)
                .bg(Color::Rgb(225, 225, 225)),
            md_codeblock_text_style: Style::default().fg(Color::Rgb(30, 30, 30)),
            md_codeblock_bg: Some(Color::Rgb(245, 245, 245)),
            copy_indicator_style: Style::default()
                .fg(Color::DarkGray)
                .bg(Color::Rgb(225, 225, 225)),
            copied_indicator_style: Style::default()
                .fg(Color::Green)
                .bg(Color::Rgb(225, 225, 225))
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Modifier-only theme for output that is not going to a color terminal.
    pub fn monochrome() -> Self {
        Theme {
            background_color: Color::Reset,
            user_prefix_style: Style::default().add_modifier(Modifier::BOLD),
            user_text_style: Style::default(),
            assistant_text_style: Style::default(),
            title_style: Style::default(),
            pinned_marker_style: Style::default(),

            md_inline_code_style: Style::default().add_modifier(Modifier::REVERSED),
            md_codeblock_header_style: Style::default().add_modifier(Modifier::UNDERLINED),
            md_codeblock_text_style: Style::default(),
            md_codeblock_bg: None,
            copy_indicator_style: Style::default(),
            copied_indicator_style: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark | ThemeMode::System => Self::dark_default(),
        }
    }

    pub fn md_codeblock_bg_color(&self) -> Option<Color> {
        self.md_codeblock_bg
    }

    /// Body style for code blocks with the block background applied.
    pub fn md_codeblock_body_style(&self) -> Style {
        match self.md_codeblock_bg {
            Some(bg) => self.md_codeblock_text_style.bg(bg),
            None => self.md_codeblock_text_style,
        }
    }
}
