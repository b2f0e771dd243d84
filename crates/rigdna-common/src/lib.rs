//! Common utilities for rigdna.
//!
//! This crate provides the foundational types used across the rigdna crates:
//!
//! - [`ByteSource`] - Named, length-aware, random-access byte input
//! - [`MemorySource`] / [`FileSource`] - In-memory and on-disk sources
//! - [`format_size`] - Human-readable file size formatting

mod fmt;
mod source;

pub use fmt::format_size;
pub use source::{ByteSource, FileSource, MemorySource};
