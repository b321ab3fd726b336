use serde::Serialize;
use tehillim_core::{
    error::{Result as CoreResult, TrackerError},
    numeral::to_hebrew_numeral,
    stats::Stats,
};

/// `--json` output: stats, chapter lists and chapter text go to stdout as
/// pretty JSON, leaving stderr for tracing.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Column-aligned table for `tehillim list`. Cells hold Hebrew numerals,
/// so widths are counted in chars rather than bytes.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    for line in table_lines(headers, &rows) {
        println!("{line}");
    }
}

fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let mut lines = vec![
        table_row(headers, &widths),
        table_row(&separator, &widths),
    ];
    lines.extend(rows.iter().map(|row| table_row(row, &widths)));
    lines
}

fn table_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:w$}", cell.as_ref()))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// "פרק ק״כ (120)"
pub fn chapter_label(id: u32) -> String {
    format!("פרק {} ({id})", to_hebrew_numeral(id))
}

pub fn print_stats(stats: &Stats) {
    println!("Reading:         {}", stats.reading);
    println!("Completed:       {}", stats.completed_label());
    println!("Left to draw:    {}", stats.available);
    println!("Books completed: {}", stats.books_completed);
}

/// Print a chapter's text, or an inline loading error when it is missing.
pub fn print_chapter_text(id: u32, text: CoreResult<Vec<String>>) {
    println!("{}", chapter_label(id));
    println!();
    match text {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(TrackerError::ContentNotFound(_)) => {
            println!("Error loading chapter text.");
        }
        Err(e) => println!("Error loading chapter text: {e}"),
    }
}

/// JSON form of [`print_chapter_text`].
pub fn chapter_text_json(id: u32, text: CoreResult<Vec<String>>) -> serde_json::Value {
    match text {
        Ok(lines) => serde_json::json!({
            "id": id,
            "numeral": to_hebrew_numeral(id),
            "lines": lines,
        }),
        Err(e) => serde_json::json!({
            "id": id,
            "numeral": to_hebrew_numeral(id),
            "lines": null,
            "error": e.to_string(),
        }),
    }
}

pub fn celebrate(id: u32) {
    println!("🎉 Finished {}!", chapter_label(id));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
