//! Subcommand handlers. Output goes to the given writer so handlers can be tested.

use std::io::Write;

use anyhow::{bail, Context, Result};
use message_store::{Message, MessageStore, Validator};
use tracing::info;

use crate::cli::Commands;

/// Runs one subcommand against `store`, writing user-facing output to `out`.
pub async fn execute<W: Write>(
    store: &MessageStore,
    validator: &Validator,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::List { json } => handle_list(store, json, out).await,
        Commands::Add { text, id } => handle_add(store, validator, text, id, out).await,
        Commands::Delete { id, ignore_missing } => {
            handle_delete(store, id, ignore_missing, out).await
        }
        Commands::DeleteAll => {
            let deleted = store
                .delete_all_messages()
                .await
                .context("Delete all messages")?;
            writeln!(out, "Deleted {} message(s).", deleted)?;
            Ok(())
        }
        Commands::Seed => {
            if store.initialize().await.context("Seed messages")? {
                writeln!(out, "Seeded the message store.")?;
            } else {
                writeln!(out, "Store already has messages; nothing seeded.")?;
            }
            Ok(())
        }
        Commands::Analyze { json } => {
            let stats = store.get_stats().await.context("Analyze messages")?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(out, "{}", stats.summary())?;
            }
            Ok(())
        }
    }
}

async fn handle_list<W: Write>(store: &MessageStore, json: bool, out: &mut W) -> Result<()> {
    let messages = store.get_messages().await.context("List messages")?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&messages)?)?;
        return Ok(());
    }

    if messages.is_empty() {
        writeln!(out, "No messages.")?;
        return Ok(());
    }

    for m in &messages {
        writeln!(out, "{:>6}  {}", m.id, m.text_or_empty())?;
    }
    Ok(())
}

async fn handle_add<W: Write>(
    store: &MessageStore,
    validator: &Validator,
    text: String,
    id: Option<i64>,
    out: &mut W,
) -> Result<()> {
    let message = Message::new(id.unwrap_or(0), text);

    let result = validator.validate(&message);
    if !result.is_valid() {
        for msg in result.messages() {
            writeln!(out, "{}", msg)?;
        }
        bail!("Message is invalid");
    }

    let id = store.add_message(&message).await.context("Add message")?;
    writeln!(out, "Added message {}.", id)?;
    Ok(())
}

async fn handle_delete<W: Write>(
    store: &MessageStore,
    id: i64,
    ignore_missing: bool,
    out: &mut W,
) -> Result<()> {
    match store.delete_message(id).await {
        Ok(()) => {
            writeln!(out, "Deleted message {}.", id)?;
            Ok(())
        }
        Err(e) if ignore_missing && e.is_not_found() => {
            info!("Ignoring delete of missing message {}", id);
            writeln!(out, "No message with id {}.", id)?;
            Ok(())
        }
        Err(e) => Err(e).context(format!("Delete message {}", id)),
    }
}
