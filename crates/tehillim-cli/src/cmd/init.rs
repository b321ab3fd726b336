use anyhow::Context;
use std::path::Path;
use tehillim_core::{config::Config, io, paths, store::FileStore, tracker::Tracker};

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing tehillim in: {}", root.display());

    let dir = paths::tehillim_dir(root);
    io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let config_path = paths::config_path(root);
    let config = if config_path.exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        Config::load(root).context("failed to load config")?
    } else {
        let cfg = Config::default();
        cfg.save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
        cfg
    };

    let store = FileStore::new(root, &config.storage_key).context("invalid storage key")?;
    let existed = store.exists();
    let tracker = Tracker::open(store).context("failed to open chapter store")?;
    let store_name = format!("{}/{}.json", paths::TEHILLIM_DIR, config.storage_key);
    if existed {
        println!("  exists:  {store_name}");
    } else {
        println!("  created: {store_name}");
    }

    if !config.content_path(root).exists() {
        println!(
            "\nNote: no chapter text at '{}'. Chapters can be tracked but not read.",
            config.content_path.display()
        );
    }

    let stats = tracker.stats();
    println!(
        "\n{} chapters available, {} reading, {} completed.",
        stats.available, stats.reading, stats.completed
    );
    Ok(())
}
