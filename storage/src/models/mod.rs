mod message;
mod message_stats;

pub use message::Message;
pub use message_stats::MessageStats;
