//! OCR response parsing and table reconstruction.
//!
//! Consumes the table-extraction collaborator's raw block graph and
//! produces clean line-item tables. The library never calls the OCR
//! service itself; it reads the saved response document.

mod options;
mod reconstruct;
mod response;

pub use options::ReconstructOptions;
pub use reconstruct::{reconstruct, reconstruct_with_options};
pub use response::OcrResponse;
