//! Vector Store Provider Implementations
//!
//! Storage backends mapping a project id to its embedding vector.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryVectorStoreProvider | Local | Concurrent map (non-persistent) |
//! | FilesystemVectorStore | Local | Single human-readable record file |
//!
//! ## Provider Selection Guide
//!
//! - **Tests and ephemeral runs**: `InMemoryVectorStoreProvider`
//! - **Persistent local storage**: `FilesystemVectorStore`

pub mod codec;
#[cfg(feature = "vectorstore-filesystem")]
pub mod filesystem;
#[cfg(feature = "vectorstore-memory")]
pub mod in_memory;

// Re-export for convenience
#[cfg(feature = "vectorstore-filesystem")]
pub use filesystem::{FilesystemVectorStore, FilesystemVectorStoreConfig};
#[cfg(feature = "vectorstore-memory")]
pub use in_memory::InMemoryVectorStoreProvider;

use pms_domain::entities::ProjectId;
use pms_domain::error::{Error, Result};

/// Check a batch of vectors against the established dimension
///
/// Returns the dimension the batch establishes or keeps. Nothing is
/// written by the caller unless every vector passes.
pub(crate) fn check_dimensions<'a>(
    established: Option<usize>,
    vectors: impl IntoIterator<Item = (ProjectId, &'a [f32])>,
) -> Result<Option<usize>> {
    let mut expected = established;
    for (id, vector) in vectors {
        if vector.is_empty() {
            return Err(Error::invalid_argument(format!(
                "embedding for project {id} is empty"
            )));
        }
        match expected {
            None => expected = Some(vector.len()),
            Some(dims) if dims != vector.len() => {
                return Err(Error::dimension_mismatch(dims, vector.len()));
            }
            Some(_) => {}
        }
    }
    Ok(expected)
}
