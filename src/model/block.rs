//! OCR block graph types.
//!
//! The table-extraction service reports detected document structure as a
//! flat list of blocks: TABLE blocks own CELL blocks and CELL blocks own
//! WORD blocks through typed relationship edges. Blocks reference each
//! other by id, so lookups go through a [`BlockMap`] built once per
//! response rather than through live object references.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One unit of detected structure in a scanned document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Unique block identifier
    pub id: String,

    /// What kind of structure this block represents
    pub block_type: BlockType,

    /// Literal text (WORD blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// 1-based row position within the owning table (CELL blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,

    /// 1-based column position within the owning table (CELL blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,

    /// Typed edges to other blocks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl Block {
    /// Create a TABLE block owning the given cell ids.
    pub fn table(id: impl Into<String>, cell_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            block_type: BlockType::Table,
            text: None,
            row_index: None,
            column_index: None,
            relationships: vec![Relationship::child(cell_ids)],
        }
    }

    /// Create a CELL block at the given 1-based position owning the given
    /// word ids.
    pub fn cell(id: impl Into<String>, row: u32, column: u32, word_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            block_type: BlockType::Cell,
            text: None,
            row_index: Some(row),
            column_index: Some(column),
            relationships: if word_ids.is_empty() {
                Vec::new()
            } else {
                vec![Relationship::child(word_ids)]
            },
        }
    }

    /// Create a WORD block with literal text.
    pub fn word(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            block_type: BlockType::Word,
            text: Some(text.into()),
            row_index: None,
            column_index: None,
            relationships: Vec::new(),
        }
    }

    /// Iterate the ids of this block's CHILD relationships, in order.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .iter()
            .filter(|r| r.rel_type == RelationshipType::Child)
            .flat_map(|r| r.ids.iter().map(String::as_str))
    }
}

/// Block type tag reported by the OCR service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// A full page of the document
    Page,
    /// A detected table
    Table,
    /// A cell within a table
    Cell,
    /// A single detected word
    Word,
    /// A detected line of text
    Line,
    /// A checkbox or radio button
    SelectionElement,
    /// Any block type this library does not consume
    #[serde(other)]
    Other,
}

/// A typed, ordered edge from one block to others.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    /// Kind of relationship
    #[serde(rename = "Type")]
    pub rel_type: RelationshipType,

    /// Referenced block ids, in reading order
    pub ids: Vec<String>,
}

impl Relationship {
    /// Create a CHILD relationship to the given ids.
    pub fn child(ids: Vec<String>) -> Self {
        Self {
            rel_type: RelationshipType::Child,
            ids,
        }
    }
}

/// Relationship kind reported by the OCR service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Structural ownership (table -> cells, cell -> words)
    Child,
    /// Cell merged into a spanning cell
    MergedCell,
    /// Key-value pair target
    Value,
    /// Any relationship kind this library does not consume
    #[serde(other)]
    Other,
}

/// Identifier-indexed lookup table over a block list.
///
/// Built once per OCR response; resolves relationship ids without walking
/// the whole list per lookup. Unknown ids resolve to `None`: OCR output
/// is noisy and a dangling reference is not an error.
#[derive(Debug)]
pub struct BlockMap<'a> {
    blocks: HashMap<&'a str, &'a Block>,
}

impl<'a> BlockMap<'a> {
    /// Index the given blocks by id.
    pub fn new(blocks: &'a [Block]) -> Self {
        Self {
            blocks: blocks.iter().map(|b| (b.id.as_str(), b)).collect(),
        }
    }

    /// Look up a block by id.
    pub fn get(&self, id: &str) -> Option<&'a Block> {
        self.blocks.get(id).copied()
    }

    /// Number of indexed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_map_lookup() {
        let blocks = vec![
            Block::word("w1", "Milk"),
            Block::cell("c1", 1, 1, vec!["w1".to_string()]),
        ];
        let map = BlockMap::new(&blocks);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("w1").and_then(|b| b.text.as_deref()), Some("Milk"));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_child_ids_skip_other_relationships() {
        let mut block = Block::table("t1", vec!["c1".to_string(), "c2".to_string()]);
        block.relationships.push(Relationship {
            rel_type: RelationshipType::MergedCell,
            ids: vec!["c9".to_string()],
        });

        let ids: Vec<&str> = block.child_ids().collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[test]
    fn test_block_type_deserialization() {
        let json = r#"{"Id":"b1","BlockType":"TABLE"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Table);

        // Types this library ignores still deserialize
        let json = r#"{"Id":"b2","BlockType":"KEY_VALUE_SET"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Other);
    }

    #[test]
    fn test_cell_deserialization() {
        let json = r#"{
            "Id": "c1",
            "BlockType": "CELL",
            "RowIndex": 2,
            "ColumnIndex": 3,
            "Relationships": [{"Type": "CHILD", "Ids": ["w1", "w2"]}]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();

        assert_eq!(block.row_index, Some(2));
        assert_eq!(block.column_index, Some(3));
        assert_eq!(block.child_ids().collect::<Vec<_>>(), vec!["w1", "w2"]);
    }
}
