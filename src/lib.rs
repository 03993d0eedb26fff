//! # splitbill
//!
//! Receipt table reconstruction and bill splitting for Rust.
//!
//! This library turns the raw block graph produced by a cloud OCR
//! table-extraction service into clean (item, price) rows, and splits the
//! resulting bill (items plus flat or proportional fees) across
//! participants.
//!
//! ## Quick Start
//!
//! ```no_run
//! use splitbill::{reconstruct_file, Session};
//!
//! fn main() -> splitbill::Result<()> {
//!     // Rebuild line items from a saved OCR response
//!     let tables = reconstruct_file("receipt_response.json")?;
//!
//!     // Split the bill
//!     let mut session = Session::new();
//!     session.add_person("Alice")?;
//!     session.add_person("Bob")?;
//!     for table in &tables {
//!         session.import_table(table);
//!     }
//!     session.add_fee("Tip", 6.0, true);
//!     let totals = session.calculate();
//!     println!("{:?}", totals);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Hanging-value repair**: single-column OCR fragments are folded back
//!   into the row they continue
//! - **Flat and proportional fees**: tips split evenly, tax split by spend
//! - **Explicit state**: the splitting engine is a pure function over the
//!   session snapshot you hand it
//! - **Multiple output formats**: text, Markdown, JSON

pub mod error;
pub mod model;
pub mod ocr;
pub mod render;
pub mod split;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, BlockMap, BlockType, Fee, ImportReport, Item, ReconstructedRow, ReconstructedTable,
    Relationship, RelationshipType, Session,
};
pub use ocr::{OcrResponse, ReconstructOptions};
pub use render::JsonFormat;
pub use split::{generate_colors, parse_price, SplitSummary};

use std::io::Read;
use std::path::Path;

/// Reconstruct tables from a saved OCR response file.
///
/// # Arguments
///
/// * `path` - Path to the response JSON file
///
/// # Returns
///
/// A `Result` containing one [`ReconstructedTable`] per detected table.
///
/// # Example
///
/// ```no_run
/// use splitbill::reconstruct_file;
///
/// let tables = reconstruct_file("receipt_response.json").unwrap();
/// println!("Tables: {}", tables.len());
/// ```
pub fn reconstruct_file<P: AsRef<Path>>(path: P) -> Result<Vec<ReconstructedTable>> {
    let response = OcrResponse::from_path(path)?;
    Ok(ocr::reconstruct(&response.blocks))
}

/// Reconstruct tables from a saved OCR response file with custom options.
pub fn reconstruct_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ReconstructOptions,
) -> Result<Vec<ReconstructedTable>> {
    let response = OcrResponse::from_path(path)?;
    Ok(ocr::reconstruct_with_options(&response.blocks, options))
}

/// Reconstruct tables from OCR response bytes.
///
/// # Example
///
/// ```no_run
/// use splitbill::reconstruct_bytes;
///
/// let data = std::fs::read("receipt_response.json").unwrap();
/// let tables = reconstruct_bytes(&data).unwrap();
/// ```
pub fn reconstruct_bytes(data: &[u8]) -> Result<Vec<ReconstructedTable>> {
    let response = OcrResponse::from_bytes(data)?;
    Ok(ocr::reconstruct(&response.blocks))
}

/// Reconstruct tables from an OCR response reader.
pub fn reconstruct_reader<R: Read>(reader: R) -> Result<Vec<ReconstructedTable>> {
    let response = OcrResponse::from_reader(reader)?;
    Ok(ocr::reconstruct(&response.blocks))
}

/// Compute per-person totals for a session snapshot.
///
/// Pure wrapper over [`split::compute_totals`]; does not touch the cached
/// totals on the session.
pub fn compute_totals(session: &Session) -> SplitSummary {
    split::compute_totals(&session.items, &session.people, &session.fees)
}
