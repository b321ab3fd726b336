use crate::error::{Result, TrackerError};
use crate::types::ChapterStatus;
use serde::{Deserialize, Serialize};

/// Number of chapters in the book. Fixed; chapters are never created or removed.
pub const CHAPTER_COUNT: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub status: ChapterStatus,
}

impl Chapter {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            status: ChapterStatus::Available,
        }
    }
}

pub fn check_id(id: u32) -> Result<()> {
    if id == 0 || id > CHAPTER_COUNT {
        return Err(TrackerError::ChapterOutOfRange(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Chapters
// ---------------------------------------------------------------------------

/// The full set of chapters, one per id in `1..=150`, in ascending id order.
///
/// Serializes as a bare JSON array of `{id, status}` objects. The only way to
/// build one from outside data is [`Chapters::from_vec`], which rejects
/// anything that is not a complete, gap-free set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Chapters(Vec<Chapter>);

impl Chapters {
    /// Every chapter `available`.
    pub fn fresh() -> Self {
        Self((1..=CHAPTER_COUNT).map(Chapter::new).collect())
    }

    /// Validate a deserialized list. Returns `None` unless it holds exactly one
    /// entry for every id in `1..=150`. Entries are re-sorted by id.
    pub fn from_vec(mut chapters: Vec<Chapter>) -> Option<Self> {
        if chapters.len() != CHAPTER_COUNT as usize {
            return None;
        }
        chapters.sort_by_key(|c| c.id);
        let complete = chapters
            .iter()
            .zip(1..=CHAPTER_COUNT)
            .all(|(c, expected)| c.id == expected);
        complete.then_some(Self(chapters))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Chapter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: u32) -> Result<&Chapter> {
        check_id(id)?;
        Ok(&self.0[(id - 1) as usize])
    }

    pub fn status(&self, id: u32) -> Result<ChapterStatus> {
        self.get(id).map(|c| c.status)
    }

    pub fn with_status(&self, status: ChapterStatus) -> impl Iterator<Item = &Chapter> + '_ {
        self.0.iter().filter(move |c| c.status == status)
    }

    pub fn count(&self, status: ChapterStatus) -> usize {
        self.with_status(status).count()
    }

    /// Advance `id` from `from` to the next status. Returns `false` (and
    /// leaves the chapter alone) when the chapter is not currently in `from`.
    pub(crate) fn advance(&mut self, id: u32, from: ChapterStatus) -> Result<bool> {
        check_id(id)?;
        let chapter = &mut self.0[(id - 1) as usize];
        if chapter.status != from {
            return Ok(false);
        }
        match from.next() {
            Some(to) => {
                chapter.status = to;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for Chapters {
    fn default() -> Self {
        Self::fresh()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
