//! Message store: persistence and queries for messages.
//!
//! Uses SqlitePoolManager and the models (Message, MessageStats).
//! External: SQLite via sqlx; callers use add_message/get_messages/delete_message etc.

use async_trait::async_trait;
use sqlx::{Sqlite, SqliteExecutor};
use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::models::{Message, MessageStats};
use crate::repository::Repository;
use crate::seed::seeding_messages;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageStore {
    pool_manager: SqlitePoolManager,
}

impl MessageStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::from_pool(pool_manager).await
    }

    /// Wraps an existing pool, creating the table if needed.
    pub async fn from_pool(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating messages table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY,
                text TEXT
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Returns every message, ordered by id.
    pub async fn get_messages(&self) -> Result<Vec<Message>, StorageError> {
        let messages: Vec<Message> =
            sqlx::query_as::<_, Message>("SELECT id, text FROM messages ORDER BY id")
                .fetch_all(self.pool_manager.pool())
                .await?;

        debug!("Retrieved {} messages", messages.len());
        Ok(messages)
    }

    pub async fn get_message(&self, id: i64) -> Result<Option<Message>, StorageError> {
        let message = sqlx::query_as::<_, Message>("SELECT id, text FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool_manager.pool())
            .await?;

        Ok(message)
    }

    /// Inserts one message and returns its id. An id of 0 lets SQLite assign one.
    pub async fn add_message(&self, message: &Message) -> Result<i64, StorageError> {
        let id = insert(self.pool_manager.pool(), message).await?;
        info!("Added message: id={}", id);
        Ok(id)
    }

    /// Inserts all messages in one transaction; nothing is stored if any insert fails.
    pub async fn add_messages(&self, messages: &[Message]) -> Result<(), StorageError> {
        let mut tx = self.pool_manager.pool().begin().await?;

        for message in messages {
            insert(&mut *tx, message).await?;
        }

        tx.commit().await?;
        info!("Added {} messages", messages.len());
        Ok(())
    }

    /// Removes every message and returns how many rows were deleted.
    pub async fn delete_all_messages(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM messages")
            .execute(self.pool_manager.pool())
            .await?;

        info!("Deleted all messages: {} rows", result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Removes the message with `id`, or returns [`StorageError::NotFound`].
    pub async fn delete_message(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(self.pool_manager.pool())
            .await?;

        if result.rows_affected() == 0 {
            warn!("Delete found no message: id={}", id);
            return Err(StorageError::NotFound(id));
        }

        info!("Deleted message: id={}", id);
        Ok(())
    }

    pub async fn count_messages(&self) -> Result<i64, StorageError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(self.pool_manager.pool())
            .await?;

        Ok(count.0)
    }

    pub async fn get_stats(&self) -> Result<MessageStats, StorageError> {
        let messages = self.get_messages().await?;
        Ok(MessageStats::from_messages(&messages))
    }

    /// Seeds the store when it is empty. Returns whether seeding happened.
    pub async fn initialize(&self) -> Result<bool, StorageError> {
        if self.count_messages().await? > 0 {
            debug!("Store already has messages, skipping seed");
            return Ok(false);
        }

        let seeds = seeding_messages();
        self.add_messages(&seeds).await?;
        info!("Seeded {} messages", seeds.len());
        Ok(true)
    }
}

async fn insert<'e, E>(executor: E, message: &Message) -> Result<i64, StorageError>
where
    E: SqliteExecutor<'e>,
{
    let id = (message.id != 0).then_some(message.id);

    let result = sqlx::query::<Sqlite>("INSERT INTO messages (id, text) VALUES (?, ?)")
        .bind(id)
        .bind(&message.text)
        .execute(executor)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StorageError::AlreadyExists(message.id)
            }
            other => StorageError::from(other),
        })?;

    Ok(id.unwrap_or_else(|| result.last_insert_rowid()))
}

#[async_trait]
impl Repository<Message> for MessageStore {
    async fn save(&self, entity: &Message) -> Result<i64, StorageError> {
        self.add_message(entity).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, StorageError> {
        self.get_message(id).await
    }

    async fn find_all(&self) -> Result<Vec<Message>, StorageError> {
        self.get_messages().await
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        self.delete_message(id).await
    }

    async fn delete_all(&self) -> Result<u64, StorageError> {
        self.delete_all_messages().await
    }
}
