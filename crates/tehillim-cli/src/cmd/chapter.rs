use crate::output::{
    celebrate, chapter_label, chapter_text_json, print_chapter_text, print_json, print_table,
};
use anyhow::Context;
use std::path::Path;
use tehillim_core::{numeral::to_hebrew_numeral, types::ChapterStatus};

pub fn list(root: &Path, status: Option<&str>, json: bool) -> anyhow::Result<()> {
    let filter: Option<ChapterStatus> = status
        .map(str::parse::<ChapterStatus>)
        .transpose()
        .context("expected one of: available, reading, completed")?;
    let (_, tracker) = super::load_tracker(root)?;

    let chapters: Vec<_> = tracker
        .chapters()
        .iter()
        .filter(|c| filter.map_or(true, |s| c.status == s))
        .collect();

    if json {
        print_json(&chapters)?;
        return Ok(());
    }

    if chapters.is_empty() {
        println!("No chapters match.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = chapters
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                to_hebrew_numeral(c.id),
                c.status.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NUMERAL", "STATUS"], rows);
    Ok(())
}

pub fn select(root: &Path, id: u32, json: bool) -> anyhow::Result<()> {
    let (config, mut tracker) = super::open_tracker(root)?;
    let status = tracker.chapters().status(id)?;
    if !tracker.select(id)?.is_applied() {
        anyhow::bail!("chapter {id} is already taken (status: {status})");
    }

    let content = super::open_content(root, &config);
    let text = content.lookup(id);
    if json {
        print_json(&serde_json::json!({
            "id": id,
            "status": ChapterStatus::Reading,
            "text": chapter_text_json(id, text),
        }))?;
    } else {
        println!("Took {}\n", chapter_label(id));
        print_chapter_text(id, text);
    }
    Ok(())
}

pub fn finish(root: &Path, id: u32, json: bool) -> anyhow::Result<()> {
    let (_, mut tracker) = super::open_tracker(root)?;
    let status = tracker.chapters().status(id)?;
    if !tracker.finish(id)?.is_applied() {
        anyhow::bail!("chapter {id} is not in progress (status: {status})");
    }

    if json {
        print_json(&serde_json::json!({
            "id": id,
            "status": ChapterStatus::Completed,
            "stats": tracker.stats(),
        }))?;
    } else {
        celebrate(id);
        println!("Completed: {}", tracker.stats().completed_label());
    }
    Ok(())
}

pub fn read(root: &Path, id: u32, json: bool) -> anyhow::Result<()> {
    let (config, mut tracker) = super::open_tracker(root)?;
    let status = tracker.chapters().status(id)?;
    if !tracker.view(id)?.is_applied() {
        anyhow::bail!(
            "chapter {id} is not in progress (status: {status}); take it with 'tehillim select {id}'"
        );
    }

    let content = super::open_content(root, &config);
    let Some(text) = tracker.current_text(&content) else {
        return Ok(());
    };
    if json {
        print_json(&chapter_text_json(id, text))?;
    } else {
        print_chapter_text(id, text);
    }
    Ok(())
}
