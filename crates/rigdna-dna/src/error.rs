//! Error types for DNA extraction.
//!
//! Note that format-gate rejections are not errors: they are ordinary
//! [`ValidationOutcome`](crate::ValidationOutcome) values. The variants here
//! cover faults a parser can hit after a source has already passed the gate.

use thiserror::Error;

/// Errors that can occur while extracting rig metadata.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading the source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container data could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A joint referenced a parent that does not precede it in the arena.
    #[error("joint {index} has invalid parent index {parent_index}")]
    InvalidJointParent { index: usize, parent_index: i32 },
}

/// Result type for DNA operations.
pub type Result<T> = std::result::Result<T, Error>;
