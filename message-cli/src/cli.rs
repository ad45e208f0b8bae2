//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "messages")]
#[command(about = "Manage the message store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database URL; overrides DATABASE_URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List all messages ordered by id.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Validate and add a message.
    Add {
        text: String,
        /// Explicit id; omitted lets the database assign one.
        #[arg(long, allow_negative_numbers = true)]
        id: Option<i64>,
    },
    /// Delete one message by id.
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        /// Succeed when no message has this id.
        #[arg(long)]
        ignore_missing: bool,
    },
    /// Delete every message.
    DeleteAll,
    /// Seed the store when it is empty.
    Seed,
    /// Print the average message length in words.
    Analyze {
        #[arg(long)]
        json: bool,
    },
}

/// Load AppConfig from environment. `database_url` overrides DATABASE_URL.
pub fn load_config(database_url: Option<String>) -> Result<AppConfig> {
    AppConfig::load(database_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_id() {
        let cli = Cli::parse_from(["messages", "add", "hello there", "--id", "3"]);
        assert_eq!(
            cli.command,
            Commands::Add {
                text: "hello there".to_string(),
                id: Some(3)
            }
        );
    }

    #[test]
    fn test_parse_delete_ignore_missing_and_global_url() {
        let cli = Cli::parse_from([
            "messages",
            "delete",
            "4",
            "--ignore-missing",
            "--database-url",
            "sqlite::memory:",
        ]);
        assert_eq!(
            cli.command,
            Commands::Delete {
                id: 4,
                ignore_missing: true
            }
        );
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_parse_negative_ids() {
        let cli = Cli::parse_from(["messages", "delete", "-5"]);
        assert_eq!(
            cli.command,
            Commands::Delete {
                id: -5,
                ignore_missing: false
            }
        );

        let cli = Cli::parse_from(["messages", "add", "hi", "--id", "-5"]);
        assert_eq!(
            cli.command,
            Commands::Add {
                text: "hi".to_string(),
                id: Some(-5)
            }
        );
    }

    #[test]
    fn test_parse_analyze_json() {
        let cli = Cli::parse_from(["messages", "analyze", "--json"]);
        assert_eq!(cli.command, Commands::Analyze { json: true });
    }

    #[test]
    fn test_parse_delete_all() {
        let cli = Cli::parse_from(["messages", "delete-all"]);
        assert_eq!(cli.command, Commands::DeleteAll);
    }
}
