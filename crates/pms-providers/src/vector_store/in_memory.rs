//! In-memory vector store provider implementation
//!
//! Provides an in-memory vector storage backend for development and testing.
//! Data is not persisted and will be lost on restart.

use async_trait::async_trait;
use dashmap::DashMap;
use pms_domain::entities::ProjectId;
use pms_domain::error::Result;
use pms_domain::ports::providers::VectorStoreProvider;
use std::collections::HashMap;
use std::sync::Mutex;

use super::check_dimensions;

/// In-memory vector store provider
///
/// Stores vectors in a concurrent hash map; writes to one id are mutually
/// exclusive through the map's shard locks. The dimension established by
/// the first write is kept for the life of the store.
pub struct InMemoryVectorStoreProvider {
    vectors: DashMap<ProjectId, Vec<f32>>,
    dimensions: Mutex<Option<usize>>,
}

impl InMemoryVectorStoreProvider {
    /// Create a new in-memory vector store provider
    pub fn new() -> Self {
        Self {
            vectors: DashMap::new(),
            dimensions: Mutex::new(None),
        }
    }

    /// Establish or check the dimension for a batch about to be written
    fn admit<'a>(&self, batch: impl IntoIterator<Item = (ProjectId, &'a [f32])>) -> Result<()> {
        let mut dims = self
            .dimensions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *dims = check_dimensions(*dims, batch)?;
        Ok(())
    }
}

impl Default for InMemoryVectorStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    async fn put(&self, id: ProjectId, vector: &[f32]) -> Result<()> {
        self.admit([(id, vector)])?;
        self.vectors.insert(id, vector.to_vec());
        Ok(())
    }

    async fn put_all(&self, entries: &[(ProjectId, Vec<f32>)]) -> Result<()> {
        self.admit(entries.iter().map(|(id, v)| (*id, v.as_slice())))?;
        for (id, vector) in entries {
            self.vectors.insert(*id, vector.clone());
        }
        Ok(())
    }

    async fn get(&self, id: ProjectId) -> Result<Option<Vec<f32>>> {
        Ok(self.vectors.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self) -> Result<HashMap<ProjectId, Vec<f32>>> {
        Ok(self
            .vectors
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect())
    }

    async fn delete(&self, id: ProjectId) -> Result<()> {
        self.vectors.remove(&id);
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.vectors.len())
    }

    fn dimensions(&self) -> Option<usize> {
        *self
            .dimensions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
