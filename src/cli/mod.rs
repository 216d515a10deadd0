//! Command-line interface parsing and handling
//!
//! This module parses arguments and dispatches to the subcommand handlers.

pub mod context;
pub mod conversations;
pub mod copy;
pub mod render;
pub mod say;
pub mod search;
pub mod settings;


use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::context::CliContext;
use crate::cli::settings::SettingRegistry;
use crate::core::api_key::ApiKeyStore;
use crate::core::config::path_display;

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(version)]
#[command(about = "Chat with Gemini from the terminal, with rendered code blocks")]
#[command(
    long_about = "chatmark sends prompts to the Gemini generateContent API, keeps \
conversations on disk, and renders replies with inline code, bold, italic and \
fenced code blocks.\n\n\
Authentication:\n\
  Use 'chatmark set api-key <KEY>' to store your key in the system keyring.\n\n\
Environment Variables:\n\
  GEMINI_API_KEY    API key used when the keyring holds none\n\
  CHATMARK_LOG      Log filter for diagnostics (e.g. 'debug')"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Keep config and conversations in DIR instead of the platform directories
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a prompt and print the rendered reply
    Say {
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,
        /// Conversation to continue (defaults to the current one)
        #[arg(short = 'c', long, value_name = "ID")]
        conversation: Option<String>,
        /// Start a new conversation
        #[arg(long, conflicts_with = "conversation")]
        new: bool,
        /// Print without colors or syntax highlighting
        #[arg(long)]
        plain: bool,
    },
    /// Render a message read from FILE or stdin
    Render {
        file: Option<PathBuf>,
        /// Render as a user message
        #[arg(long)]
        user: bool,
        #[arg(long)]
        plain: bool,
    },
    /// Print a conversation
    Show {
        id: Option<String>,
        #[arg(long)]
        plain: bool,
    },
    /// Copy the INDEX-th code block (from 1) of the last reply
    Copy {
        index: usize,
        #[arg(short = 'c', long, value_name = "ID")]
        conversation: Option<String>,
        #[arg(long)]
        plain: bool,
    },
    /// List conversations, pinned first
    List {
        /// Only titles containing this text
        #[arg(short = 's', long)]
        search: Option<String>,
    },
    /// Start a new conversation
    New,
    /// Delete a conversation
    Delete { id: String },
    /// Pin or unpin a conversation
    Pin { id: String },
    /// Delete every conversation
    Clear,
    /// Export conversations as JSON
    Export {
        ids: Vec<String>,
        /// Export every conversation
        #[arg(long, conflicts_with = "ids")]
        all: bool,
        /// Directory for the backup file (defaults to the working directory)
        #[arg(short = 'o', long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Append conversations from an exported JSON file
    Import { file: PathBuf },
    /// Print (and optionally open) a web search URL
    Search {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
        /// brave, google or duckduckgo
        #[arg(short = 'e', long)]
        engine: Option<String>,
        /// Open the URL in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Switch between light and dark appearance
    ToggleTheme,
    /// Print the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    crate::logging::init(args.verbose);
    tokio::runtime::Runtime::new()?.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    let mut ctx = CliContext::load(args.data_dir.as_deref())?;

    match args.command {
        Commands::Say {
            prompt,
            conversation,
            new,
            plain,
        } => say::run_say(&ctx, prompt, conversation, new, plain).await,
        Commands::Render { file, user, plain } => {
            render::run_render(&ctx, file.as_deref(), user, plain)
        }
        Commands::Show { id, plain } => render::run_show(&ctx, id.as_deref(), plain),
        Commands::Copy {
            index,
            conversation,
            plain,
        } => copy::run_copy(&ctx, index, conversation.as_deref(), plain),
        Commands::List { search } => conversations::run_list(&ctx, search.as_deref()),
        Commands::New => conversations::run_new(&ctx),
        Commands::Delete { id } => conversations::run_delete(&ctx, &id),
        Commands::Pin { id } => conversations::run_pin(&ctx, &id),
        Commands::Clear => conversations::run_clear(&ctx),
        Commands::Export { ids, all, output } => {
            conversations::run_export(&ctx, ids, all, output.as_deref())
        }
        Commands::Import { file } => conversations::run_import(&ctx, &file),
        Commands::Search {
            query,
            engine,
            open,
        } => search::run_search(&ctx, query, engine.as_deref(), open),
        Commands::Set { key, value } => match plan_set(&SettingRegistry::new(), &key, &value) {
            Ok(SetPlan::ShowConfig) => {
                ctx.config.print_all();
                Ok(())
            }
            Ok(SetPlan::Apply) => {
                apply_setting(&mut ctx, &key, |handler, config| handler.set(&value, config))
            }
            Err(err) => {
                err.print();
                std::process::exit(err.exit_code());
            }
        },
        Commands::Unset { key } => {
            apply_setting(&mut ctx, &key, |handler, config| handler.unset(config))
        }
        Commands::ToggleTheme => {
            let next = ctx.config.theme_mode().toggled();
            ctx.config.theme = Some(next);
            ctx.save_config()?;
            println!("✅ Theme set to {next}");
            Ok(())
        }
        Commands::Config => {
            ctx.config.print_all();
            let has_key = ApiKeyStore::new().resolve().is_some();
            println!("  api-key: {}", if has_key { "set" } else { "(unset)" });
            println!();
            println!("Config file: {}", path_display(&ctx.paths.config_file));
            println!(
                "Conversations: {}",
                path_display(&ctx.paths.conversations_file)
            );
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SetPlan {
    ShowConfig,
    Apply,
}

/// Unknown keys are rejected even when no value is given.
fn plan_set(
    registry: &SettingRegistry,
    key: &str,
    value: &[String],
) -> Result<SetPlan, settings::SettingError> {
    if registry.get(key).is_none() {
        return Err(settings::SettingError::UnknownKey(key.to_string()));
    }
    Ok(if value.is_empty() {
        SetPlan::ShowConfig
    } else {
        SetPlan::Apply
    })
}

fn apply_setting<F>(ctx: &mut CliContext, key: &str, change: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(
        &dyn settings::SettingHandler,
        &mut crate::core::config::Config,
    ) -> Result<String, settings::SettingError>,
{
    let registry = SettingRegistry::new();
    let Some(handler) = registry.get(key) else {
        let err = settings::SettingError::UnknownKey(key.to_string());
        err.print();
        std::process::exit(err.exit_code());
    };

    match change(handler, &mut ctx.config) {
        Ok(message) => {
            if handler.persists_config() {
                ctx.save_config()?;
            }
            println!("{message}");
            Ok(())
        }
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}
