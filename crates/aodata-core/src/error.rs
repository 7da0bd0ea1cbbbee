use thiserror::Error;

/// Domain construction errors surfaced before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item id must not be empty")]
    EmptyItemId,

    #[error("item id is too long: {len} characters (max {max})")]
    ItemIdTooLong { len: usize, max: usize },

    #[error("item id contains invalid character '{ch}' at index {index}")]
    ItemIdInvalidChar { ch: char, index: usize },

    #[error("item id '{value}' is missing a tier prefix (expected e.g. 'T4_...')")]
    ItemIdMissingTier { value: String },

    #[error("quality '{value}' is not an integer")]
    QualityNotNumeric { value: String },

    #[error("quality {value} is out of range (expected 0-5)")]
    QualityOutOfRange { value: i64 },
}

/// Export-time failures; these propagate to the caller instead of being
/// recovered locally.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
