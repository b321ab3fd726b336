use crate::chapter::{Chapters, CHAPTER_COUNT};
use crate::types::ChapterStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub available: usize,
    pub reading: usize,
    pub completed: usize,
    /// Whole books finished. Zero until every chapter is completed.
    pub books_completed: usize,
}

impl Stats {
    pub fn compute(chapters: &Chapters) -> Self {
        let completed = chapters.count(ChapterStatus::Completed);
        Self {
            available: chapters.count(ChapterStatus::Available),
            reading: chapters.count(ChapterStatus::Reading),
            completed,
            books_completed: completed / CHAPTER_COUNT as usize,
        }
    }

    /// "N of 150"
    pub fn completed_label(&self) -> String {
        format!("{} of {}", self.completed, CHAPTER_COUNT)
    }
}
