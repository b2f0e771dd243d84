//! DNA character rig file handling.
//!
//! DNA files are a proprietary binary container describing a character rig
//! (joints, meshes, blend shapes) in one of two schema variants, `MH.4` and
//! `DHI`. This crate validates that an uploaded file is structurally
//! plausible and extracts a bounded set of metadata without attempting full
//! semantic decoding.
//!
//! # File Format
//!
//! A plausible DNA file:
//! - has the `.dna` extension
//! - is non-empty and at most 200 MB
//! - starts with the 3-byte ASCII signature `"DNA"` (`44 4E 41`)
//!
//! The container's internal layer table is not decoded here; the
//! [`RigParser`] trait fixes the contract a full parser must satisfy, and
//! [`PlaceholderParser`] provides the conservative default (counts zeroed,
//! variant assumed).
//!
//! # Example
//!
//! ```
//! use rigdna_common::MemorySource;
//! use rigdna_dna::{validate, extract, ValidationOutcome};
//!
//! let mut source = MemorySource::new("hero.dna", b"DNA\x01\x02".to_vec());
//!
//! assert_eq!(validate(&mut source), ValidationOutcome::Valid);
//!
//! let summary = extract(&mut source)?;
//! assert_eq!(summary.metadata.name, "hero");
//! # Ok::<(), rigdna_dna::Error>(())
//! ```

mod error;
mod gate;
mod metadata;
mod parser;
mod summary;
mod upload;

#[cfg(test)]
mod test_source;

pub use error::{Error, Result};
pub use gate::{
    validate, RejectReason, ValidationOutcome, DNA_EXTENSION, DNA_SIGNATURE, MAX_FILE_SIZE,
};
pub use metadata::{Gender, RigMetadata, SchemaVariant};
pub use parser::{extract, PlaceholderParser, RigParser};
pub use summary::{BlendShape, CharacterRigSummary, Joint, JointArena, Vec3, ROOT_PARENT};
pub use upload::{Generation, UploadState, UploadTracker};
