use crate::error::{Result, TrackerError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const TEHILLIM_DIR: &str = ".tehillim";
pub const CONFIG_FILE: &str = ".tehillim/config.yaml";

/// Key the chapter collection is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "tehillim_chapters";
pub const DEFAULT_CONTENT_FILE: &str = "appData.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn tehillim_dir(root: &Path) -> PathBuf {
    root.join(TEHILLIM_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// File backing a storage key: `.tehillim/<key>.json`.
pub fn store_path(root: &Path, key: &str) -> PathBuf {
    tehillim_dir(root).join(format!("{key}.json"))
}

// ---------------------------------------------------------------------------
// Storage key validation
// ---------------------------------------------------------------------------

static KEY_RE: OnceLock<Regex> = OnceLock::new();

fn key_re() -> &'static Regex {
    KEY_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_]*$").unwrap())
}

pub fn validate_storage_key(key: &str) -> Result<()> {
    if key.len() > 64 || !key_re().is_match(key) {
        return Err(TrackerError::InvalidStorageKey(key.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
