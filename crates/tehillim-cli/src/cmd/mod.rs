pub mod chapter;
pub mod config;
pub mod draw;
pub mod init;
pub mod numeral;
pub mod session;
pub mod status;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tehillim_core::{config::Config, content::ContentStore, store::FileStore, tracker::Tracker};

/// Open the tracker for `root` using the configured storage key. A missing
/// or unreadable store is replaced by a fresh collection on disk.
pub fn open_tracker(root: &Path) -> anyhow::Result<(Config, Tracker<FileStore>)> {
    let (config, store) = chapter_store(root)?;
    let tracker = Tracker::open(store).context("failed to open chapter store")?;
    Ok((config, tracker))
}

/// Tracker for commands that only report progress. Nothing is written to
/// `.tehillim/` until a transition is applied.
pub fn load_tracker(root: &Path) -> anyhow::Result<(Config, Tracker<FileStore>)> {
    let (config, store) = chapter_store(root)?;
    Ok((config, Tracker::load(store)))
}

fn chapter_store(root: &Path) -> anyhow::Result<(Config, FileStore)> {
    let config = Config::load(root).context("failed to load config")?;
    let store = FileStore::new(root, &config.storage_key).context("invalid storage key")?;
    Ok((config, store))
}

pub fn open_content(root: &Path, config: &Config) -> ContentStore {
    ContentStore::open(&config.content_path(root))
}

/// Seeded when `--seed` is given, otherwise from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
