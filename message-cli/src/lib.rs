//! # message-cli
//!
//! Command line front end for the message store: argument parsing, config
//! loading, tracing setup and subcommand handlers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;

pub use cli::{load_config, Cli, Commands};
pub use commands::execute;
pub use config::AppConfig;
pub use logger::init_tracing;
