use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("all chapters have already been taken")]
    NoChaptersAvailable,

    #[error("content for chapter {0} not found")]
    ContentNotFound(u32),

    #[error("chapter {0} is out of range: must be between 1 and 150")]
    ChapterOutOfRange(u32),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid storage key '{0}': must be lowercase alphanumeric with underscores")]
    InvalidStorageKey(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
