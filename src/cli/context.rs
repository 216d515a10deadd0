//! State shared by every subcommand: file locations, loaded config and
//! terminal output helpers.

use std::error::Error;
use std::io::{self, IsTerminal};
use std::path::Path;

use ratatui::crossterm::terminal;
use ratatui::text::Line;

use crate::core::config::{AppPaths, Config};
use crate::core::conversation::{ConversationStore, StoreError};
use crate::ui::ansi::write_lines;
use crate::ui::markdown::MessageRenderConfig;
use crate::ui::theme::Theme;

pub struct CliContext {
    pub paths: AppPaths,
    pub config: Config,
}

impl CliContext {
    pub fn load(data_dir: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let paths = AppPaths::resolve(data_dir)?;
        let config = Config::load_from_path(&paths.config_file)?;
        Ok(Self { paths, config })
    }

    pub fn save_config(&self) -> Result<(), Box<dyn Error>> {
        self.config.save_to_path(&self.paths.config_file)?;
        Ok(())
    }

    pub fn open_store(&self) -> Result<ConversationStore, StoreError> {
        ConversationStore::load(&self.paths.conversations_file)
    }

    pub fn theme(&self, plain: bool) -> Theme {
        if plain {
            Theme::monochrome()
        } else {
            Theme::from_mode(self.config.theme_mode())
        }
    }

    pub fn render_config(&self, plain: bool) -> MessageRenderConfig {
        let terminal_width = terminal::size().ok().map(|(w, _)| w as usize);
        MessageRenderConfig::new()
            .with_syntax(!plain && self.config.syntax_enabled())
            .with_terminal_width(terminal_width)
    }
}

/// Styled when stdout is a terminal and `plain` is off.
pub fn print_lines(lines: &[Line<'_>], plain: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let styled = !plain && stdout.is_terminal();
    write_lines(&mut stdout.lock(), lines, styled)
}
