//! Bill-splitting engine and helpers.
//!
//! Pure functions over session state: per-item cost division, flat and
//! proportional fee distribution, price extraction from OCR text, and
//! deterministic participant colors.

mod colors;
mod engine;
mod price;

pub use colors::generate_colors;
pub use engine::{compute_subtotals, compute_totals, SplitSummary};
pub use price::parse_price;
