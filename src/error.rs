//! Error types for the splitbill library.

use std::io;
use thiserror::Error;

/// Result type alias for splitbill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during reconstruction and splitting.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error when reading or writing session files.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is not an OCR table-extraction response.
    #[error("Malformed OCR response: {0}")]
    MalformedResponse(String),

    /// No item with the given id exists in the session.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// No fee with the given name exists in the session.
    #[error("Unknown fee: {0}")]
    UnknownFee(String),

    /// No participant with the given name exists in the session.
    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    /// A participant with the given name already exists.
    #[error("Person already added: {0}")]
    DuplicatePerson(String),

    /// A price string could not be parsed as an amount.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Error during rendering (text, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
