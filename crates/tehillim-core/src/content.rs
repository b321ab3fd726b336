use crate::error::{Result, TrackerError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Text of one chapter as it appears in the content file: either a list of
/// verses or a single blob.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChapterText {
    Lines(Vec<String>),
    Single(String),
}

impl ChapterText {
    pub fn into_lines(self) -> Vec<String> {
        match self {
            ChapterText::Lines(lines) => lines,
            ChapterText::Single(text) => vec![text],
        }
    }
}

/// Read-only chapter text keyed by the stringified chapter number.
///
/// A store that failed to load is kept as `Unavailable`; every lookup then
/// reports the chapter as not found instead of failing the session.
#[derive(Debug, Clone, Default)]
pub enum ContentStore {
    Loaded(HashMap<String, ChapterText>),
    #[default]
    Unavailable,
}

impl ContentStore {
    /// Parse a JSON object of `"1".."150"` → string or array of strings.
    /// Entries of any other shape are skipped.
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(data)?;
        let map = raw
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<ChapterText>(value) {
                Ok(text) => Some((key, text)),
                Err(_) => {
                    tracing::debug!(key = %key, "skipping content entry with unexpected shape");
                    None
                }
            })
            .collect();
        Ok(ContentStore::Loaded(map))
    }

    /// Load from a file. A missing or malformed file yields `Unavailable`.
    pub fn open(path: &Path) -> Self {
        let data = match crate::io::read_if_exists(path) {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::debug!(path = %path.display(), "content file not found");
                return ContentStore::Unavailable;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read content file");
                return ContentStore::Unavailable;
            }
        };
        match Self::from_json(&data) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "content file is not valid JSON");
                ContentStore::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ContentStore::Loaded(_))
    }

    pub fn lookup(&self, id: u32) -> Result<Vec<String>> {
        let ContentStore::Loaded(map) = self else {
            return Err(TrackerError::ContentNotFound(id));
        };
        map.get(&id.to_string())
            .cloned()
            .map(ChapterText::into_lines)
            .ok_or(TrackerError::ContentNotFound(id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
