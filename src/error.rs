//! Error types for store, import and deck operations.
//!
//! Display strings are user-facing: the UI shows them verbatim in the result
//! dialog or snackbar, so they name what went wrong rather than where.
use thiserror::Error;

/// Failures of the local cache write path. Remote failures never surface
/// here; the store logs and swallows them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Cache write exceeded the storage quota. Kept distinct from generic
    /// cache failures so the UI can tell the user to free up space.
    #[error("not enough storage space, please free up some space and try again")]
    QuotaExceeded,

    #[error("local cache error: {0}")]
    Cache(#[from] rusqlite::Error),

    #[error("could not serialize decks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures of file import. Import is atomic: any of these means no write
/// happened.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("please select a JSON or CSV file")]
    UnsupportedExtension,

    #[error("file appears to be empty")]
    EmptyFile,

    #[error("error reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid JSON format: expected array of decks or cards")]
    UnrecognizedArrayShape,

    #[error("invalid JSON format: expected deck or card object")]
    UnrecognizedObjectShape,

    #[error("invalid format: expected an array or object")]
    NotArrayOrObject,

    #[error("CSV file is empty")]
    EmptyCsv,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of deck/card operations triggered directly by user input.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("please provide a deck name")]
    EmptyDeckName,

    #[error("please provide both front and back")]
    EmptyCardField,

    #[error("deck not found")]
    DeckNotFound,

    #[error("card not found")]
    CardNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}
