use crate::entities::ProjectId;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Project Embedding Storage Interface
///
/// Durable keyed store mapping a project identifier to that project's
/// embedding vector, so embeddings are computed once and reused by every
/// search.
///
/// ## Contract
///
/// - The first `put` establishes the store's dimension; later vectors of a
///   different length fail with [`Error::DimensionMismatch`]
/// - Every mutating call is durably committed before it returns
/// - `get_all` returns a snapshot, never a live view
/// - `delete` of an absent identifier is a no-op
/// - Persisted state that cannot be read at startup is reported as
///   [`Error::StoreInit`] by the constructor; stores never start empty over
///   unreadable data
///
/// [`Error::DimensionMismatch`]: crate::error::Error::DimensionMismatch
/// [`Error::StoreInit`]: crate::error::Error::StoreInit
///
/// # Example
///
/// ```ignore
/// use pms_domain::ports::providers::VectorStoreProvider;
///
/// store.put(ProjectId(1), &embedding.vector).await?;
/// let snapshot = store.get_all().await?;
/// store.delete(ProjectId(1)).await?;
/// ```
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Insert or overwrite the vector stored for `id`
    async fn put(&self, id: ProjectId, vector: &[f32]) -> Result<()>;

    /// Insert or overwrite several vectors in one commit
    ///
    /// Every vector is dimension-checked before anything is written. The
    /// default implementation falls back to one `put` per entry.
    async fn put_all(&self, entries: &[(ProjectId, Vec<f32>)]) -> Result<()> {
        for (id, vector) in entries {
            self.put(*id, vector).await?;
        }
        Ok(())
    }

    /// Vector stored for `id`, or `None` when absent
    async fn get(&self, id: ProjectId) -> Result<Option<Vec<f32>>>;

    /// Snapshot of every stored vector
    async fn get_all(&self) -> Result<HashMap<ProjectId, Vec<f32>>>;

    /// Remove the vector stored for `id`
    async fn delete(&self, id: ProjectId) -> Result<()>;

    /// Number of stored vectors
    async fn len(&self) -> Result<usize>;

    /// True when no vectors are stored
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Dimension established by the first write, if any
    fn dimensions(&self) -> Option<usize>;

    /// Get the name/identifier of this vector store provider
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "memory", "filesystem")
    fn provider_name(&self) -> &str;
}
