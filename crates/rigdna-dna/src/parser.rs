//! Metadata extraction.
//!
//! [`RigParser`] is the contract any DNA parser must satisfy; a full
//! container parser (layer table, joint hierarchy, blend-shape tables) will
//! implement it over the same byte stream. [`PlaceholderParser`] is the
//! conservative implementation shipped today.

use rigdna_common::ByteSource;

use crate::error::Result;
use crate::gate::DNA_EXTENSION;
use crate::metadata::{RigMetadata, SchemaVariant};
use crate::summary::CharacterRigSummary;

/// A parser that turns a gated byte source into a [`CharacterRigSummary`].
///
/// Callers must run the source through [`validate`](crate::validate) first
/// and only parse on [`Valid`](crate::ValidationOutcome::Valid); handing an
/// ungated source to a parser is a programming error. A full implementation
/// must resolve the schema variant from the container's version field, not
/// the file name, and populate the joint arena in tree order.
pub trait RigParser {
    fn parse<S: ByteSource>(&self, source: &mut S) -> Result<CharacterRigSummary>;
}

/// Conservative parser that does not decode the container.
///
/// Structural counts default to zero and the optional sequences stay unset.
/// The schema variant is assumed to be `MH.4`; resolving the real variant
/// requires reading the container header, which is the full parser's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderParser;

impl RigParser for PlaceholderParser {
    fn parse<S: ByteSource>(&self, source: &mut S) -> Result<CharacterRigSummary> {
        let name = source
            .name()
            .strip_suffix(DNA_EXTENSION)
            .unwrap_or(source.name());

        Ok(CharacterRigSummary {
            metadata: RigMetadata::unresolved(name, SchemaVariant::Mh4),
            joint_count: 0,
            mesh_count: 0,
            blend_shape_count: 0,
            lod_count: Some(0),
            joints: None,
            blend_shapes: None,
        })
    }
}

/// Extract metadata from a validated source with the placeholder parser.
pub fn extract<S: ByteSource>(source: &mut S) -> Result<CharacterRigSummary> {
    PlaceholderParser.parse(source)
}
