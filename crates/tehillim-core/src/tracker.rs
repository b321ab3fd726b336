use crate::chapter::{check_id, Chapter, Chapters};
use crate::content::ContentStore;
use crate::error::{Result, TrackerError};
use crate::stats::Stats;
use crate::store::ChapterStore;
use crate::types::{ChapterStatus, Transition};
use rand::seq::SliceRandom;
use rand::Rng;

/// Chapter collection plus the selection state of one session.
///
/// The collection is written back to the store after every applied
/// transition. The preview and the viewed chapter are never persisted and
/// start empty each time a tracker is opened.
#[derive(Debug)]
pub struct Tracker<S: ChapterStore> {
    chapters: Chapters,
    store: S,
    preview: Option<u32>,
    viewing: Option<u32>,
}

impl<S: ChapterStore> Tracker<S> {
    /// Load the saved collection, or start (and save) a fresh one when the
    /// store is empty or its contents cannot be read.
    pub fn open(mut store: S) -> Result<Self> {
        let chapters = match store.load() {
            Some(chapters) => chapters,
            None => {
                let fresh = Chapters::fresh();
                store.save(&fresh)?;
                fresh
            }
        };
        Ok(Self::with_chapters(chapters, store))
    }

    /// Like [`Tracker::open`], but a missing collection is not written back.
    /// Used by commands that only look at progress.
    pub fn load(store: S) -> Self {
        let chapters = store.load().unwrap_or_default();
        Self::with_chapters(chapters, store)
    }

    fn with_chapters(chapters: Chapters, store: S) -> Self {
        Self {
            chapters,
            store,
            preview: None,
            viewing: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn chapters(&self) -> &Chapters {
        &self.chapters
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn preview(&self) -> Option<u32> {
        self.preview
    }

    pub fn viewing(&self) -> Option<u32> {
        self.viewing
    }

    pub fn stats(&self) -> Stats {
        Stats::compute(&self.chapters)
    }

    /// Chapters currently being read, by ascending id.
    pub fn reading_list(&self) -> Vec<&Chapter> {
        self.chapters.with_status(ChapterStatus::Reading).collect()
    }

    /// Chapters that may still be drawn or selected.
    pub fn selectable(&self) -> Vec<&Chapter> {
        self.chapters.with_status(ChapterStatus::Available).collect()
    }

    /// Text of the viewed chapter; `None` when nothing is being viewed.
    pub fn current_text(&self, content: &ContentStore) -> Option<Result<Vec<String>>> {
        self.viewing.map(|id| content.lookup(id))
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Pick an available chapter uniformly at random and hold it as the
    /// preview. The collection is not touched.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<u32> {
        let available: Vec<u32> = self
            .chapters
            .with_status(ChapterStatus::Available)
            .map(|c| c.id)
            .collect();
        let id = *available
            .choose(rng)
            .ok_or(TrackerError::NoChaptersAvailable)?;
        tracing::debug!(chapter = id, remaining = available.len(), "drew chapter");
        self.preview = Some(id);
        Ok(id)
    }

    /// Replace the current preview with a new draw.
    pub fn redraw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<u32> {
        self.draw(rng)
    }

    /// Commit the preview: the chapter moves to `reading` and becomes the
    /// viewed chapter. Ignored when there is no preview.
    pub fn accept_preview(&mut self) -> Result<Transition> {
        let Some(id) = self.preview else {
            return Ok(Transition::Ignored);
        };
        let transition = self.take(id)?;
        self.preview = None;
        Ok(transition)
    }

    /// Take a specific chapter without drawing. Ignored unless the chapter
    /// is `available`.
    pub fn select(&mut self, id: u32) -> Result<Transition> {
        check_id(id)?;
        let transition = self.take(id)?;
        if self.preview == Some(id) {
            self.preview = None;
        }
        Ok(transition)
    }

    /// Mark a `reading` chapter completed. Ignored for any other status.
    pub fn finish(&mut self, id: u32) -> Result<Transition> {
        if !self.commit(id, ChapterStatus::Reading)? {
            tracing::debug!(chapter = id, "finish ignored, chapter not in progress");
            return Ok(Transition::Ignored);
        }
        if self.viewing == Some(id) {
            self.viewing = None;
        }
        tracing::info!(chapter = id, "chapter completed");
        Ok(Transition::Applied)
    }

    /// Show a chapter that is being read. Ignored for any other status.
    pub fn view(&mut self, id: u32) -> Result<Transition> {
        if self.chapters.status(id)? != ChapterStatus::Reading {
            return Ok(Transition::Ignored);
        }
        self.viewing = Some(id);
        Ok(Transition::Applied)
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    fn take(&mut self, id: u32) -> Result<Transition> {
        if !self.commit(id, ChapterStatus::Available)? {
            tracing::debug!(chapter = id, "chapter already taken");
            return Ok(Transition::Ignored);
        }
        self.viewing = Some(id);
        tracing::info!(chapter = id, "chapter taken");
        Ok(Transition::Applied)
    }

    /// Advance `id` out of `from` and persist. The in-memory collection only
    /// changes once the store has accepted the new state.
    fn commit(&mut self, id: u32, from: ChapterStatus) -> Result<bool> {
        let mut next = self.chapters.clone();
        if !next.advance(id, from)? {
            return Ok(false);
        }
        self.store.save(&next)?;
        self.chapters = next;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
