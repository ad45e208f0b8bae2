//! Fixed seed data used to populate an empty store.

use crate::models::Message;

/// Returns the seed messages (ids 1..=3).
pub fn seeding_messages() -> Vec<Message> {
    vec![
        Message::new(1, "You're standing on my scarf."),
        Message::new(2, "Would you like a jelly baby?"),
        Message::new(
            3,
            "To the rational mind, nothing is inexplicable; only unexplained.",
        ),
    ]
}
