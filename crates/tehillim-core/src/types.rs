use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ChapterStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a single chapter. Only ever advances forward:
/// `available → reading → completed`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChapterStatus {
    #[default]
    Available,
    Reading,
    Completed,
}

impl ChapterStatus {
    pub fn all() -> &'static [ChapterStatus] {
        &[
            ChapterStatus::Available,
            ChapterStatus::Reading,
            ChapterStatus::Completed,
        ]
    }

    /// The status a chapter moves to next, or `None` once completed.
    pub fn next(self) -> Option<ChapterStatus> {
        match self {
            ChapterStatus::Available => Some(ChapterStatus::Reading),
            ChapterStatus::Reading => Some(ChapterStatus::Completed),
            ChapterStatus::Completed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChapterStatus::Available => "available",
            ChapterStatus::Reading => "reading",
            ChapterStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ChapterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChapterStatus {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ChapterStatus::Available),
            "reading" => Ok(ChapterStatus::Reading),
            "completed" => Ok(ChapterStatus::Completed),
            _ => Err(crate::error::TrackerError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// Result of a status-changing request. Requests whose precondition does not
/// hold are ignored rather than treated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Applied,
    Ignored,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
