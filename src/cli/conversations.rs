//! Conversation management subcommands.

use std::error::Error;
use std::fs;
use std::path::Path;

use super::context::CliContext;
use crate::core::config::path_display;
use crate::core::conversation::{Conversation, ConversationStore};

fn list_row(conv: &Conversation, current_id: &str) -> String {
    let mark = if conv.id == current_id { "*" } else { " " };
    let pin = if conv.pinned { "📌 " } else { "" };
    let count = conv.messages.len();
    let noun = if count == 1 { "message" } else { "messages" };
    format!("  {mark} {}  {pin}{} ({count} {noun})", conv.id, conv.title)
}

fn list_rows(store: &ConversationStore, search: Option<&str>) -> Vec<String> {
    let convs = match search {
        Some(query) => store.search(query),
        None => store.sorted(),
    };
    convs
        .into_iter()
        .map(|conv| list_row(conv, store.current_id()))
        .collect()
}

pub fn run_list(ctx: &CliContext, search: Option<&str>) -> Result<(), Box<dyn Error>> {
    let store = ctx.open_store()?;
    let rows = list_rows(&store, search);

    if rows.is_empty() {
        println!("No conversations match '{}'", search.unwrap_or_default());
        return Ok(());
    }
    println!("Conversations:\n");
    for row in rows {
        println!("{row}");
    }
    Ok(())
}

pub fn run_new(ctx: &CliContext) -> Result<(), Box<dyn Error>> {
    let mut store = ctx.open_store()?;
    let id = store.create().id.clone();
    store.save()?;
    println!("✅ Created conversation {id}");
    Ok(())
}

pub fn run_delete(ctx: &CliContext, id: &str) -> Result<(), Box<dyn Error>> {
    let mut store = ctx.open_store()?;
    store.delete(id)?;
    store.save()?;
    println!("✅ Deleted conversation {id}");
    Ok(())
}

pub fn run_pin(ctx: &CliContext, id: &str) -> Result<(), Box<dyn Error>> {
    let mut store = ctx.open_store()?;
    let pinned = store.toggle_pin(id)?;
    store.save()?;
    if pinned {
        println!("✅ Pinned conversation {id}");
    } else {
        println!("✅ Unpinned conversation {id}");
    }
    Ok(())
}

pub fn run_clear(ctx: &CliContext) -> Result<(), Box<dyn Error>> {
    let mut store = ctx.open_store()?;
    store.clear();
    store.save()?;
    println!("✅ Cleared all conversations");
    Ok(())
}

pub fn run_export(
    ctx: &CliContext,
    ids: Vec<String>,
    all: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let store = ctx.open_store()?;
    let ids = if all { store.all_ids() } else { ids };
    let dir = output.unwrap_or_else(|| Path::new("."));

    let path = store.export_to_dir(&ids, dir)?;
    println!("✅ Exported to {}", path_display(&path));
    Ok(())
}

pub fn run_import(ctx: &CliContext, file: &Path) -> Result<(), Box<dyn Error>> {
    let json = fs::read_to_string(file)?;
    let mut store = ctx.open_store()?;
    let count = store.import_json(&json)?;
    store.save()?;
    println!("✅ Imported {count} conversation(s) from {}", path_display(file));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppPaths, Config};
    use crate::core::message::Message;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> CliContext {
        CliContext {
            paths: AppPaths::in_dir(dir.path()),
            config: Config::default(),
        }
    }

    #[test]
    fn rows_mark_current_and_pinned() {
        let mut store = ConversationStore::from_conversations(vec![
            Conversation::new("1"),
            Conversation::new("2"),
        ]);
        store.get_mut("2").unwrap().title = "Rust questions".to_string();
        store.get_mut("2").unwrap().messages.push(Message::user("q"));
        store.toggle_pin("2").unwrap();

        assert_eq!(
            list_rows(&store, None),
            vec![
                "    2  📌 Rust questions (1 message)".to_string(),
                "  * 1  New conversation (0 messages)".to_string(),
            ]
        );
        assert_eq!(list_rows(&store, Some("RUST")).len(), 1);
    }

    #[test]
    fn commands_persist_changes() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        run_new(&ctx).unwrap();
        run_new(&ctx).unwrap();
        let store = ctx.open_store().unwrap();
        assert_eq!(store.conversations().len(), 3);

        let first = store.conversations()[0].id.clone();
        run_pin(&ctx, &first).unwrap();
        assert!(ctx.open_store().unwrap().get(&first).unwrap().pinned);

        run_delete(&ctx, &first).unwrap();
        assert!(ctx.open_store().unwrap().get(&first).is_none());

        run_clear(&ctx).unwrap();
        assert_eq!(ctx.open_store().unwrap().conversations().len(), 1);
    }

    #[test]
    fn delete_unknown_id_fails() {
        let dir = TempDir::new().unwrap();
        assert!(run_delete(&context(&dir), "nope").is_err());
    }

    #[test]
    fn export_then_import_into_another_store() {
        let source_dir = TempDir::new().unwrap();
        let target_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let source = context(&source_dir);
        let target = context(&target_dir);

        run_new(&source).unwrap();
        run_export(&source, Vec::new(), true, Some(out_dir.path())).unwrap();
        assert!(run_export(&source, Vec::new(), false, Some(out_dir.path())).is_err());

        let exported = fs::read_dir(out_dir.path())
            .unwrap()
            .next()
            .unwrap()
            .unwrap()
            .path();
        run_import(&target, &exported).unwrap();
        assert_eq!(target.open_store().unwrap().conversations().len(), 3);
    }
}
