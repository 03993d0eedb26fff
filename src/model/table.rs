//! Reconstructed table types.

use serde::{Deserialize, Serialize};

/// One reconstructed line item: a key (item description) and the value of
/// its last column (usually the price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructedRow {
    /// Space-joined text of every column except the last
    pub key: String,

    /// Text of the last column
    pub value: String,
}

impl ReconstructedRow {
    /// Create a new row.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A cleaned table reconstructed from one TABLE block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructedTable {
    /// Rows in OCR row-index order
    pub rows: Vec<ReconstructedRow>,
}

impl ReconstructedTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: ReconstructedRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation, one `key\tvalue` line per row.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}\t{}", row.key, row.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<ReconstructedRow> for ReconstructedTable {
    fn from_iter<I: IntoIterator<Item = ReconstructedRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
