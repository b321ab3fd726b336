use crate::chapter::{Chapter, Chapters};
use crate::error::Result;
use crate::paths;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Durable home of the chapter collection.
///
/// `load` returns `None` both when nothing has been saved yet and when the
/// saved data cannot be read back as a complete collection; callers start a
/// fresh collection in either case.
pub trait ChapterStore {
    fn load(&self) -> Option<Chapters>;
    fn save(&mut self, chapters: &Chapters) -> Result<()>;
}

fn decode(data: &str) -> Option<Chapters> {
    match serde_json::from_str::<Vec<Chapter>>(data) {
        Ok(list) => {
            let chapters = Chapters::from_vec(list);
            if chapters.is_none() {
                tracing::debug!("saved chapters are incomplete, starting fresh");
            }
            chapters
        }
        Err(e) => {
            tracing::debug!(error = %e, "saved chapters unreadable, starting fresh");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// One JSON file per storage key under `.tehillim/`.
///
/// There is no locking: two processes sharing a file each overwrite the
/// whole collection, and the last write wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(root: &Path, key: &str) -> Result<Self> {
        paths::validate_storage_key(key)?;
        Ok(Self {
            path: paths::store_path(root, key),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ChapterStore for FileStore {
    fn load(&self) -> Option<Chapters> {
        match crate::io::read_if_exists(&self.path) {
            Ok(Some(data)) => decode(&data),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "chapter store unreadable");
                None
            }
        }
    }

    fn save(&mut self, chapters: &Chapters) -> Result<()> {
        let data = serde_json::to_string(chapters)?;
        crate::io::atomic_write(&self.path, data.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "saved chapters");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Key-value store held in memory. Values are kept serialized so that loads
/// go through the same decoding path as the file store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    key: String,
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: HashMap::new(),
        }
    }

    /// Seed raw data under the store's key, as if written by an earlier session.
    pub fn with_raw(mut self, data: impl Into<String>) -> Self {
        self.entries.insert(self.key.clone(), data.into());
        self
    }

    pub fn raw(&self) -> Option<&str> {
        self.entries.get(&self.key).map(String::as_str)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(paths::DEFAULT_STORAGE_KEY)
    }
}

impl ChapterStore for MemoryStore {
    fn load(&self) -> Option<Chapters> {
        self.raw().and_then(decode)
    }

    fn save(&mut self, chapters: &Chapters) -> Result<()> {
        let data = serde_json::to_string(chapters)?;
        self.entries.insert(self.key.clone(), data);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
