use crate::output::{chapter_label, chapter_text_json, print_chapter_text, print_json};
use anyhow::Context;
use std::path::Path;
use tehillim_core::types::Transition;

/// Draw a chapter. Without `accept` the draw is only a preview: nothing is
/// saved and the chapter stays available.
pub fn run(root: &Path, accept: bool, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let (config, mut tracker) = if accept {
        super::open_tracker(root)?
    } else {
        super::load_tracker(root)?
    };
    let mut rng = super::make_rng(seed);
    let id = tracker.draw(&mut rng).context("cannot draw a chapter")?;

    if !accept {
        if json {
            print_json(&serde_json::json!({
                "preview": id,
                "numeral": tehillim_core::numeral::to_hebrew_numeral(id),
                "accepted": false,
            }))?;
        } else {
            println!("Drew {}", chapter_label(id));
            println!("Take it with: tehillim select {id}");
        }
        return Ok(());
    }

    if tracker.accept_preview()? == Transition::Ignored {
        anyhow::bail!("chapter {id} is no longer available");
    }
    let content = super::open_content(root, &config);
    let text = tracker
        .current_text(&content)
        .context("accepted chapter is not being viewed")?;

    if json {
        print_json(&serde_json::json!({
            "preview": null,
            "accepted": true,
            "id": id,
            "text": chapter_text_json(id, text),
        }))?;
    } else {
        println!("Took {}\n", chapter_label(id));
        print_chapter_text(id, text);
    }
    Ok(())
}
