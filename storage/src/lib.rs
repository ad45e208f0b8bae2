//! Storage crate: message model, validation and the SQLite message store.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Message, MessageStats
//! - [`validation`] – Validator, ValidationResult, ValidationError
//! - [`repository`] – Repository trait
//! - [`message_store`] – MessageStore (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`seed`] – Seeding messages

mod error;
mod message_store;
mod models;
mod repository;
mod seed;
mod sqlite_pool;
mod validation;


pub use error::StorageError;
pub use message_store::MessageStore;
pub use models::{Message, MessageStats};
pub use repository::Repository;
pub use seed::seeding_messages;
pub use sqlite_pool::SqlitePoolManager;
pub use validation::{
    validate, ValidationError, ValidationResult, Validator, DEFAULT_MAX_TEXT_LENGTH,
};
