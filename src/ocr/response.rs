//! OCR analyze-document response parsing.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Block, BlockMap};

/// A saved response from the table-extraction service.
///
/// Only the block list is consumed; engine metadata in the payload is
/// ignored. A payload that is valid JSON but carries no block list is
/// rejected; an empty block list is fine and yields zero tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrResponse {
    /// Detected blocks, in the order the service reported them
    pub blocks: Vec<Block>,
}

impl OcrResponse {
    /// Read a response from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a response from JSON bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| Error::MalformedResponse(e.to_string()))
    }

    /// Read a response from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Build the id-indexed lookup table for this response.
    pub fn block_map(&self) -> BlockMap<'_> {
        BlockMap::new(&self.blocks)
    }
}
