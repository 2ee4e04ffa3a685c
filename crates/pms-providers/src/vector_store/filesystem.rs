//! Filesystem vector store implementation
//!
//! Keeps every vector in memory and persists the whole set to a single
//! human-readable record file (see [`codec`](super::codec)). Each mutation
//! rewrites the file atomically: write a temporary file, `fsync` it, rename
//! it over the record file, then `fsync` the directory. A crash leaves
//! either the old or the new file, never a torn one.

use crate::constants::{FILESYSTEM_DEFAULT_BASE_PATH, FILESYSTEM_DEFAULT_FILE_NAME};
use async_trait::async_trait;
use pms_domain::entities::ProjectId;
use pms_domain::error::{Error, Result};
use pms_domain::ports::providers::VectorStoreProvider;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{check_dimensions, codec};

/// Filesystem vector store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemVectorStoreConfig {
    /// Directory holding the record file
    pub base_path: PathBuf,
    /// Record file name inside `base_path`
    pub file_name: String,
}

impl Default for FilesystemVectorStoreConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(FILESYSTEM_DEFAULT_BASE_PATH),
            file_name: FILESYSTEM_DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl FilesystemVectorStoreConfig {
    /// Store in `base_path` using the default file name
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }

    /// Override the record file name
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the record file
    pub fn file_path(&self) -> PathBuf {
        self.base_path.join(&self.file_name)
    }

    fn temp_path(&self) -> PathBuf {
        self.base_path.join(format!(".{}.tmp", self.file_name))
    }
}

#[derive(Debug, Clone, Default)]
struct StoreState {
    vectors: HashMap<ProjectId, Vec<f32>>,
    dimensions: Option<usize>,
}

struct Inner {
    config: FilesystemVectorStoreConfig,
    /// Writer lock; also guards reads of the cached vectors
    state: Mutex<StoreState>,
    /// Established dimension, 0 while none is established
    dimensions: AtomicUsize,
}

/// Filesystem vector store
///
/// All mutations are serialized by one writer lock. A mutation that has
/// started runs to completion on its own task, so dropping the caller's
/// future (for example on timeout) never leaves memory and disk disagreeing.
#[derive(Clone)]
pub struct FilesystemVectorStore {
    inner: Arc<Inner>,
}

// Blocking file helpers, run on the blocking thread pool
mod file_utils {
    use super::{Path, Write};
    use std::fs;
    use std::io;

    /// Read the record file, `None` when it does not exist
    pub fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replace `path` with `contents` through `temp`
    pub fn write_atomically(path: &Path, temp: &Path, contents: &[u8]) -> io::Result<()> {
        {
            let mut file = fs::File::create(temp)?;
            file.write_all(contents)?;
            file.sync_all()?;
        }
        fs::rename(temp, path)?;
        sync_parent_dir(path)
    }

    #[cfg(unix)]
    fn sync_parent_dir(path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::File::open(dir)?.sync_all(),
            _ => Ok(()),
        }
    }

    #[cfg(not(unix))]
    fn sync_parent_dir(_path: &Path) -> io::Result<()> {
        Ok(())
    }
}

async fn run_blocking<T, F>(f: F) -> Result<std::io::Result<T>>
where
    T: Send + 'static,
    F: FnOnce() -> std::io::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::internal(format!("Blocking task failed: {e}")))
}

impl FilesystemVectorStore {
    /// Open the store, loading any existing record file
    ///
    /// Creates `base_path` when missing. A record file that cannot be read
    /// or parsed fails with [`Error::StoreInit`]; the store never starts
    /// empty over existing data.
    pub async fn open(config: FilesystemVectorStoreConfig) -> Result<Self> {
        let base_path = config.base_path.clone();
        let file_path = config.file_path();
        let temp_path = config.temp_path();

        let contents = run_blocking(move || {
            std::fs::create_dir_all(&base_path)?;
            // Leftover from a write interrupted before its rename
            if temp_path.exists() {
                std::fs::remove_file(&temp_path)?;
            }
            file_utils::read_if_exists(&file_path)
        })
        .await?
        .map_err(|e| {
            Error::store_init_with_source(
                format!("cannot read {}", config.file_path().display()),
                e,
            )
        })?;

        let state = match contents {
            Some(contents) => {
                let decoded = codec::decode_file(&contents).map_err(|e| {
                    Error::store_init(format!("{}: {e}", config.file_path().display()))
                })?;
                StoreState {
                    vectors: decoded.vectors,
                    dimensions: decoded.dimensions,
                }
            }
            None => StoreState::default(),
        };

        info!(
            path = %config.file_path().display(),
            vectors = state.vectors.len(),
            dimensions = ?state.dimensions,
            "Opened filesystem vector store"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                dimensions: AtomicUsize::new(state.dimensions.unwrap_or(0)),
                state: Mutex::new(state),
                config,
            }),
        })
    }

    /// Configuration the store was opened with
    pub fn config(&self) -> &FilesystemVectorStoreConfig {
        &self.inner.config
    }

    /// Apply `change` and commit it to disk under the writer lock
    ///
    /// `change` returns `false` when it left the state untouched, in which
    /// case nothing is written.
    async fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut StoreState) -> Result<bool> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let mut state = inner.state.lock().await;
            let mut next = state.clone();
            if !change(&mut next)? {
                return Ok(());
            }

            let contents = codec::encode_file(&next.vectors).into_bytes();
            let path = inner.config.file_path();
            let temp = inner.config.temp_path();
            run_blocking(move || file_utils::write_atomically(&path, &temp, &contents))
                .await?
                .map_err(|e| {
                    Error::io_with_source(
                        format!(
                            "Failed to write vector store {}",
                            inner.config.file_path().display()
                        ),
                        e,
                    )
                })?;

            inner
                .dimensions
                .store(next.dimensions.unwrap_or(0), Ordering::Release);
            debug!(vectors = next.vectors.len(), "Committed vector store");
            *state = next;
            Ok::<(), Error>(())
        })
        .await
        .map_err(|e| Error::internal(format!("Vector store write task failed: {e}")))?
    }
}

#[async_trait]
impl VectorStoreProvider for FilesystemVectorStore {
    async fn put(&self, id: ProjectId, vector: &[f32]) -> Result<()> {
        let vector = vector.to_vec();
        self.mutate(move |state| {
            state.dimensions = check_dimensions(state.dimensions, [(id, vector.as_slice())])?;
            state.vectors.insert(id, vector);
            Ok(true)
        })
        .await
    }

    async fn put_all(&self, entries: &[(ProjectId, Vec<f32>)]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let entries = entries.to_vec();
        self.mutate(move |state| {
            state.dimensions = check_dimensions(
                state.dimensions,
                entries.iter().map(|(id, v)| (*id, v.as_slice())),
            )?;
            state.vectors.extend(entries);
            Ok(true)
        })
        .await
    }

    async fn get(&self, id: ProjectId) -> Result<Option<Vec<f32>>> {
        Ok(self.inner.state.lock().await.vectors.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<HashMap<ProjectId, Vec<f32>>> {
        Ok(self.inner.state.lock().await.vectors.clone())
    }

    async fn delete(&self, id: ProjectId) -> Result<()> {
        self.mutate(move |state| Ok(state.vectors.remove(&id).is_some()))
            .await
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.inner.state.lock().await.vectors.len())
    }

    fn dimensions(&self) -> Option<usize> {
        match self.inner.dimensions.load(Ordering::Acquire) {
            0 => None,
            dims => Some(dims),
        }
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
