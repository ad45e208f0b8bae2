//! Message model for persistence.
//!
//! Maps to the `messages` table and is used by MessageStore and Validator.

use serde::{Deserialize, Serialize};

/// A short text message.
///
/// `id == 0` means unassigned: the store lets SQLite pick the id on insert.
/// `text` is optional so that a missing text can be represented and rejected
/// by [`crate::Validator`] instead of at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub text: Option<String>,
}

impl Message {
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
        }
    }

    /// Sets the text, keeping the id.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Text or "" when unset.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Number of words as counted by the analyzer: pieces between single spaces.
    pub fn word_count(&self) -> i64 {
        match &self.text {
            Some(text) => text.split(' ').count() as i64,
            None => 0,
        }
    }
}
