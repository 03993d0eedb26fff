//! Fixed-width text rendering for reconstructed tables.

use crate::model::ReconstructedTable;

const KEY_WIDTH: usize = 50;
const VALUE_WIDTH: usize = 10;

/// Render one table as a fixed-width text grid.
pub fn table_to_text(table: &ReconstructedTable) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "| {:<KEY_WIDTH$} | {:<VALUE_WIDTH$} |\n",
        "Item", "Price"
    ));
    output.push_str(&format!(
        "|{}|{}|\n",
        "-".repeat(KEY_WIDTH + 2),
        "-".repeat(VALUE_WIDTH + 2)
    ));
    for row in &table.rows {
        output.push_str(&format!(
            "| {:<KEY_WIDTH$} | {:<VALUE_WIDTH$} |\n",
            row.key, row.value
        ));
    }
    output
}

/// Render a list of tables as numbered text grids.
pub fn to_text(tables: &[ReconstructedTable]) -> String {
    let mut output = String::new();
    for (index, table) in tables.iter().enumerate() {
        output.push_str(&format!("Table {}:\n", index + 1));
        output.push_str(&table_to_text(table));
        output.push('\n');
    }
    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReconstructedRow;

    fn sample() -> ReconstructedTable {
        vec![
            ReconstructedRow::new("Milk", "2.50"),
            ReconstructedRow::new("Bread", "1.00"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_table_to_text() {
        let text = table_to_text(&sample());
        assert!(text.contains("| Item"));
        assert!(text.contains("| Milk"));
        assert!(text.contains("| 2.50"));
    }

    #[test]
    fn test_to_text_numbers_tables() {
        let text = to_text(&[sample(), sample()]);
        assert!(text.contains("Table 1:"));
        assert!(text.contains("Table 2:"));
    }

    #[test]
    fn test_to_text_empty_list() {
        assert_eq!(to_text(&[]), "");
    }
}
