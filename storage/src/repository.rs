use async_trait::async_trait;

use crate::error::StorageError;

/// Persistence seam keyed by `i64` ids: insert, key lookup, read-all, delete by key and delete all.
///
/// `delete` must return [`StorageError::NotFound`] when no entity has the key.
#[async_trait]
pub trait Repository<T> {
    async fn save(&self, entity: &T) -> Result<i64, StorageError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StorageError>;
    async fn find_all(&self) -> Result<Vec<T>, StorageError>;
    async fn delete(&self, id: i64) -> Result<(), StorageError>;
    async fn delete_all(&self) -> Result<u64, StorageError>;
}
