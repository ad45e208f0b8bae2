//! Aggregate statistics for messages.
//!
//! Returned by MessageStore::get_stats.

use serde::{Deserialize, Serialize};

use super::Message;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageStats {
    pub total_messages: i64,
    pub total_words: i64,
    /// `None` when there are no messages.
    pub average_words: Option<f64>,
}

impl MessageStats {
    pub fn from_messages(messages: &[Message]) -> Self {
        let total_messages = messages.len() as i64;
        let total_words: i64 = messages.iter().map(Message::word_count).sum();
        let average_words =
            (total_messages > 0).then(|| total_words as f64 / total_messages as f64);

        Self {
            total_messages,
            total_words,
            average_words,
        }
    }

    /// Human readable analysis line, average rounded to at most two decimals.
    pub fn summary(&self) -> String {
        match self.average_words {
            Some(avg) => format!(
                "The average message length is {} words.",
                format_two_decimals(avg)
            ),
            None => "There are no messages to analyze.".to_string(),
        }
    }
}

/// Ties round away from zero, as `0.##` decimal formatting does.
fn format_two_decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let s = format!("{:.2}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
