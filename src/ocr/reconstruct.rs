//! Table reconstruction from the OCR block graph.
//!
//! Rebuilds clean key/value rows from TABLE, CELL, and WORD blocks. The
//! engine routinely over-segments receipts: a wrapped item name or a price
//! lands on its own detected row. Those single-column fragments are folded
//! back into the row they belong to (hanging-value repair) instead of being
//! emitted as rows of their own.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::model::{Block, BlockMap, BlockType, ReconstructedRow, ReconstructedTable};

use super::ReconstructOptions;

/// Reconstruct every TABLE block in the given block list.
///
/// Returns one table per TABLE block, in input order.
pub fn reconstruct(blocks: &[Block]) -> Vec<ReconstructedTable> {
    reconstruct_with_options(blocks, &ReconstructOptions::default())
}

/// Reconstruct every TABLE block with custom options.
pub fn reconstruct_with_options(
    blocks: &[Block],
    options: &ReconstructOptions,
) -> Vec<ReconstructedTable> {
    let map = BlockMap::new(blocks);
    let tables: Vec<&Block> = blocks
        .iter()
        .filter(|b| b.block_type == BlockType::Table)
        .collect();

    log::debug!(
        "reconstruct: {} table blocks among {} blocks",
        tables.len(),
        blocks.len()
    );

    if options.parallel && tables.len() > 1 {
        tables
            .par_iter()
            .map(|table| reconstruct_table(table, &map))
            .collect()
    } else {
        tables
            .iter()
            .map(|table| reconstruct_table(table, &map))
            .collect()
    }
}

/// Reconstruct one TABLE block into clean key/value rows.
fn reconstruct_table(table: &Block, map: &BlockMap) -> ReconstructedTable {
    // row index -> column index -> cell text; BTreeMap keeps both axes
    // in ascending order for the fold below
    let mut cells: BTreeMap<u32, BTreeMap<u32, String>> = BTreeMap::new();

    for child_id in table.child_ids() {
        let Some(cell) = map.get(child_id) else {
            log::debug!(
                "reconstruct: table {} references unknown block {}",
                table.id,
                child_id
            );
            continue;
        };
        if cell.block_type != BlockType::Cell {
            continue;
        }
        let (Some(row), Some(column)) = (cell.row_index, cell.column_index) else {
            continue;
        };
        cells.entry(row).or_default().insert(column, cell_text(cell, map));
    }

    fold_rows(&cells)
}

/// Concatenate the text of a cell's WORD children, space-joined and trimmed.
///
/// A cell with no resolvable words yields an empty string.
fn cell_text(cell: &Block, map: &BlockMap) -> String {
    let words: Vec<&str> = cell
        .child_ids()
        .filter_map(|id| map.get(id))
        .filter_map(|word| word.text.as_deref())
        .collect();
    words.join(" ").trim().to_string()
}

/// The row currently eligible for hanging-value repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenRow {
    /// Nothing emitted yet, or nothing repairable
    None,
    /// Index of the last emitted row in the accumulator
    At(usize),
}

/// Fold sorted cells into key/value rows, repairing hanging values.
fn fold_rows(cells: &BTreeMap<u32, BTreeMap<u32, String>>) -> ReconstructedTable {
    let mut table = ReconstructedTable::new();
    let mut open = OpenRow::None;

    for columns in cells.values() {
        let (key, value) = split_columns(columns);
        if !key.is_empty() {
            table.add_row(ReconstructedRow::new(key, value));
            open = OpenRow::At(table.rows.len() - 1);
        } else if let OpenRow::At(index) = open {
            // A keyless row is a continuation of the open row, typically a
            // price the engine detached onto its own line. Patch in place;
            // the row keeps its position.
            table.rows[index].value = value;
        }
        // Keyless with no open row: a leading fragment with nothing to
        // attach to. Dropped.
    }

    table
}

/// Split a row's sorted columns into (key, value).
///
/// Everything except the last column forms the key; the last column is the
/// value. A single-column row has an empty key.
fn split_columns(columns: &BTreeMap<u32, String>) -> (String, String) {
    let mut texts: Vec<&str> = columns.values().map(String::as_str).collect();
    match texts.len() {
        0 => (String::new(), String::new()),
        1 => (String::new(), texts[0].trim().to_string()),
        _ => {
            let value = texts.pop().unwrap_or("").trim().to_string();
            let key = texts.join(" ").trim().to_string();
            (key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relationship;

    /// Build a one-table block list from (row, column, text) cells.
    fn table_blocks(cells: &[(u32, u32, &str)]) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut cell_ids = Vec::new();

        for (i, (row, column, text)) in cells.iter().enumerate() {
            let cell_id = format!("c{}", i);
            let mut word_ids = Vec::new();
            for (j, word) in text.split_whitespace().enumerate() {
                let word_id = format!("c{}w{}", i, j);
                blocks.push(Block::word(&word_id, word));
                word_ids.push(word_id);
            }
            blocks.push(Block::cell(&cell_id, *row, *column, word_ids));
            cell_ids.push(cell_id);
        }

        blocks.push(Block::table("t0", cell_ids));
        blocks
    }

    fn rows(table: &ReconstructedTable) -> Vec<(&str, &str)> {
        table
            .rows
            .iter()
            .map(|r| (r.key.as_str(), r.value.as_str()))
            .collect()
    }

    #[test]
    fn test_two_column_rows() {
        let blocks = table_blocks(&[
            (1, 1, "Milk"),
            (1, 2, "2.50"),
            (2, 1, "Bread"),
            (2, 2, "1.00"),
        ]);
        let tables = reconstruct(&blocks);

        assert_eq!(tables.len(), 1);
        assert_eq!(rows(&tables[0]), vec![("Milk", "2.50"), ("Bread", "1.00")]);
    }

    #[test]
    fn test_extra_columns_join_into_key() {
        let blocks = table_blocks(&[(1, 1, "2x"), (1, 2, "Organic Milk"), (1, 3, "5.00")]);
        let tables = reconstruct(&blocks);

        assert_eq!(rows(&tables[0]), vec![("2x Organic Milk", "5.00")]);
    }

    #[test]
    fn test_hanging_value_overwrites_open_row() {
        let blocks = table_blocks(&[(1, 1, "Milk"), (1, 2, "2"), (2, 1, "50")]);
        let tables = reconstruct(&blocks);

        assert_eq!(rows(&tables[0]), vec![("Milk", "50")]);
    }

    #[test]
    fn test_hanging_value_without_open_row_is_dropped() {
        let blocks = table_blocks(&[(1, 1, "Organic Milk"), (2, 1, "2"), (3, 1, "50")]);
        let tables = reconstruct(&blocks);

        assert!(tables[0].is_empty());
    }

    #[test]
    fn test_empty_key_multi_column_row_repairs() {
        // Both leading columns empty: the row has no key even though it has
        // multiple columns, so it repairs the previous row
        let blocks = table_blocks(&[
            (1, 1, "Milk"),
            (1, 2, "2.50"),
            (2, 1, ""),
            (2, 2, "3.00"),
        ]);
        let tables = reconstruct(&blocks);

        assert_eq!(rows(&tables[0]), vec![("Milk", "3.00")]);
    }

    #[test]
    fn test_table_without_cells_is_empty() {
        let blocks = vec![Block::table("t0", Vec::new())];
        let tables = reconstruct(&blocks);

        assert_eq!(tables.len(), 1);
        assert!(tables[0].is_empty());
    }

    #[test]
    fn test_unknown_child_ids_degrade_to_empty_text() {
        let mut blocks = table_blocks(&[(1, 1, "Milk"), (1, 2, "2.50")]);
        // Dangling cell reference on the table, and a dangling word on a cell
        blocks.push(Block::cell("c9", 2, 1, vec!["ghost".to_string()]));
        if let Some(table) = blocks.iter_mut().find(|b| b.id == "t0") {
            table.relationships = vec![Relationship::child(vec![
                "c0".to_string(),
                "c1".to_string(),
                "c9".to_string(),
                "missing".to_string(),
            ])];
        }
        let tables = reconstruct(&blocks);

        // The dangling word yields an empty single-column row which cannot
        // open a row of its own; it repairs "Milk" with empty text instead
        assert_eq!(rows(&tables[0]), vec![("Milk", "")]);
    }

    #[test]
    fn test_out_of_order_cells_sort_by_index() {
        let blocks = table_blocks(&[
            (2, 2, "1.00"),
            (1, 2, "2.50"),
            (2, 1, "Bread"),
            (1, 1, "Milk"),
        ]);
        let tables = reconstruct(&blocks);

        assert_eq!(rows(&tables[0]), vec![("Milk", "2.50"), ("Bread", "1.00")]);
    }

    #[test]
    fn test_non_table_blocks_are_ignored() {
        let mut blocks = table_blocks(&[(1, 1, "Milk"), (1, 2, "2.50")]);
        blocks.push(Block::word("stray", "PAGE FOOTER"));
        let tables = reconstruct(&blocks);

        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut blocks = Vec::new();
        for t in 0..4 {
            let mut cell_ids = Vec::new();
            for r in 1..=3 {
                for c in 1..=2 {
                    let word_id = format!("t{}r{}c{}w", t, r, c);
                    let cell_id = format!("t{}r{}c{}", t, r, c);
                    blocks.push(Block::word(&word_id, format!("x{}{}{}", t, r, c)));
                    blocks.push(Block::cell(&cell_id, r, c, vec![word_id]));
                    cell_ids.push(cell_id);
                }
            }
            blocks.push(Block::table(format!("t{}", t), cell_ids));
        }

        let sequential =
            reconstruct_with_options(&blocks, &ReconstructOptions::new().sequential());
        let parallel =
            reconstruct_with_options(&blocks, &ReconstructOptions::new().with_parallel(true));

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), 4);
    }
}
