//! Field validation for [`Message`].
//!
//! Validation never fails with an error: it yields a [`ValidationResult`]
//! that callers inspect before handing a message to the store.

use thiserror::Error;

use crate::models::Message;

/// Default upper bound on message text length, in characters.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 250;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The Text field is required.")]
    TextRequired,
    #[error("The field Text must be a string with a maximum length of {max} (got {actual}).")]
    TextTooLong { max: usize, actual: usize },
}

/// Outcome of validating one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Descriptive message per failed rule.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<(), Vec<ValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Checks the text rules: required, and at most `max_text_length` characters.
///
/// Length counts Unicode scalar values, so a character outside the BMP
/// (e.g. an emoji) counts once rather than as two UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_text_length: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_LENGTH)
    }
}

impl Validator {
    pub fn new(max_text_length: usize) -> Self {
        Self { max_text_length }
    }

    pub fn validate(&self, message: &Message) -> ValidationResult {
        let mut errors = Vec::new();

        if let Some(err) = self.check_text(message.text.as_deref()) {
            errors.push(err);
        }

        ValidationResult { errors }
    }

    fn check_text(&self, text: Option<&str>) -> Option<ValidationError> {
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Some(ValidationError::TextRequired),
        };

        let actual = text.chars().count();
        if actual > self.max_text_length {
            return Some(ValidationError::TextTooLong {
                max: self.max_text_length,
                actual,
            });
        }

        None
    }
}

/// Validates with the default limit and reports pass/fail only.
pub fn validate(message: &Message) -> bool {
    Validator::default().validate(message).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of_len(len: usize) -> Message {
        Message::default().with_text("a".repeat(len))
    }

    #[test]
    fn test_id_sets_and_gets() {
        let mut message = Message::default();
        message.id = 1;
        assert_eq!(message.id, 1);
    }

    #[test]
    fn test_text_sets_and_gets() {
        let mut message = Message::default();
        message.text = Some("Test message".to_string());
        assert_eq!(message.text.as_deref(), Some("Test message"));
    }

    #[test]
    fn test_required_fails_when_null() {
        let result = Validator::default().validate(&Message::default());
        assert!(!result.is_valid(), "Expected validation to fail when text is null");
        assert_eq!(result.errors(), &[ValidationError::TextRequired]);
    }

    #[test]
    fn test_required_fails_when_blank() {
        assert!(!validate(&Message::new(1, "")));
        assert!(!validate(&Message::new(1, "   ")));
    }

    #[test]
    fn test_too_long_fails_at_251() {
        let result = Validator::default().validate(&message_of_len(251));
        assert!(!result.is_valid(), "Expected validation to fail when text is too long");
        assert_eq!(
            result.errors(),
            &[ValidationError::TextTooLong {
                max: 250,
                actual: 251
            }]
        );
    }

    #[test]
    fn test_lengths_within_limit_pass() {
        for len in [199, 200, 201, 249, 250] {
            assert!(
                validate(&message_of_len(len)),
                "Expected validation to pass when text is {} characters long",
                len
            );
        }
    }

    #[test]
    fn test_custom_limit() {
        let validator = Validator::new(200);
        assert!(validator.validate(&message_of_len(200)).is_valid());
        assert!(!validator.validate(&message_of_len(201)).is_valid());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let validator = Validator::new(3);
        assert!(validator.validate(&Message::new(1, "äöü")).is_valid());
    }

    #[test]
    fn test_messages_and_into_result() {
        let result = Validator::default().validate(&Message::default());
        assert_eq!(result.messages(), vec!["The Text field is required.".to_string()]);
        assert_eq!(
            result.into_result(),
            Err(vec![ValidationError::TextRequired])
        );
        assert_eq!(
            Validator::default()
                .validate(&Message::new(1, "ok"))
                .into_result(),
            Ok(())
        );
    }
}
