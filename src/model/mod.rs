//! Data model for OCR block graphs and bill-splitting state.
//!
//! This module defines the intermediate representation that bridges the OCR
//! collaborator's raw block output and the splitting engine: detected blocks,
//! reconstructed line-item tables, and the session state (items, people,
//! fees) that the engine consumes.

mod block;
mod session;
mod table;

pub use block::{Block, BlockMap, BlockType, Relationship, RelationshipType};
pub use session::{Fee, ImportReport, Item, Session};
pub use table::{ReconstructedRow, ReconstructedTable};
