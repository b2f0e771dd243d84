//! rigdna - DNA character rig file validation and metadata extraction.
//!
//! This crate provides a unified interface to the rigdna library ecosystem
//! for working with DNA character rig files.
//!
//! # Crates
//!
//! - [`rigdna_common`] - Byte sources and size formatting
//! - [`rigdna_dna`] - Format gate, rig summary model, upload tracking
//!
//! # Example
//!
//! ```
//! use rigdna::prelude::*;
//!
//! let mut source = MemorySource::new("hero.dna", b"DNA\x01".to_vec());
//! let mut tracker = UploadTracker::new();
//!
//! match tracker.run_upload(&mut source, &PlaceholderParser) {
//!     UploadState::Complete(summary) => println!("rig: {}", summary.metadata.name),
//!     UploadState::Error(message) => eprintln!("{message}"),
//!     _ => unreachable!("run_upload ends in a terminal state"),
//! }
//! ```

// Re-export all sub-crates
pub use rigdna_common as common;
pub use rigdna_dna as dna;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rigdna_common::{format_size, ByteSource, FileSource, MemorySource};
    pub use rigdna_dna::{
        extract, validate, CharacterRigSummary, PlaceholderParser, RejectReason, RigMetadata,
        RigParser, SchemaVariant, UploadState, UploadTracker, ValidationOutcome,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
