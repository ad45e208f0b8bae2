//! messages CLI: list, add, delete, delete-all, seed and analyze messages. Config from env and optional CLI args.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use message_cli::{execute, init_tracing, load_config, Cli};
use message_store::{MessageStore, Validator};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.database_url)?;

    init_tracing(&config.log_file)?;

    let store = MessageStore::new(&config.database_url)
        .await
        .with_context(|| format!("Open message store at {}", config.database_url))?;
    let validator = Validator::new(config.max_text_length);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&store, &validator, cli.command, &mut out).await
}
