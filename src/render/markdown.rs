//! Markdown rendering for reconstructed tables.

use crate::model::ReconstructedTable;

/// Render a list of tables as Markdown, separated by blank lines.
pub fn to_markdown(tables: &[ReconstructedTable]) -> String {
    let mut output = String::new();

    for table in tables {
        if table.is_empty() {
            continue;
        }
        output.push_str("| Item | Price |\n");
        output.push_str("| --- | --- |\n");
        for row in &table.rows {
            output.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&row.key),
                escape_cell(&row.value)
            ));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Keep cell text from breaking the table grid.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReconstructedRow;

    #[test]
    fn test_to_markdown() {
        let table: ReconstructedTable = vec![ReconstructedRow::new("Milk", "2.50")]
            .into_iter()
            .collect();
        let markdown = to_markdown(&[table]);

        assert_eq!(markdown, "| Item | Price |\n| --- | --- |\n| Milk | 2.50 |");
    }

    #[test]
    fn test_empty_tables_are_skipped() {
        let tables = vec![ReconstructedTable::new()];
        assert_eq!(to_markdown(&tables), "");
    }

    #[test]
    fn test_pipe_in_cell_is_escaped() {
        let table: ReconstructedTable = vec![ReconstructedRow::new("A|B", "1.00")]
            .into_iter()
            .collect();
        let markdown = to_markdown(&[table]);

        assert!(markdown.contains("A\\|B"));
    }
}
