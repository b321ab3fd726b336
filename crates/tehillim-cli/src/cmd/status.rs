use crate::output::{chapter_label, print_json, print_stats};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (_, tracker) = super::load_tracker(root)?;
    let stats = tracker.stats();

    if json {
        let reading: Vec<u32> = tracker.reading_list().iter().map(|c| c.id).collect();
        print_json(&serde_json::json!({
            "stats": stats,
            "reading": reading,
        }))?;
        return Ok(());
    }

    print_stats(&stats);

    let reading = tracker.reading_list();
    println!();
    if reading.is_empty() {
        println!("No chapters taken yet.");
    } else {
        println!("In progress:");
        for chapter in reading {
            println!("  {}", chapter_label(chapter.id));
        }
    }
    Ok(())
}
