//! Format gate: cheap structural checks before any parsing.
//!
//! The gate classifies a byte source as plausible or not without decoding
//! it. It never fails: I/O trouble while sniffing the signature is itself a
//! rejection cause, because the gate's job is to classify, not to crash.

use rigdna_common::ByteSource;

/// Recognized file extension for DNA containers.
pub const DNA_EXTENSION: &str = ".dna";

/// Signature bytes at the start of a valid DNA file ("DNA").
pub const DNA_SIGNATURE: &[u8; 3] = b"DNA";

/// Maximum accepted file size in bytes (200 MB).
pub const MAX_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Why the format gate rejected a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The name does not end in `.dna`.
    BadExtension,
    /// The source has zero length.
    Empty,
    /// The source exceeds [`MAX_FILE_SIZE`].
    TooLarge,
    /// The first 3 bytes are not the DNA signature.
    BadSignature,
    /// The signature bytes could not be read.
    ReadError,
}

impl RejectReason {
    /// The fixed human-readable message for this rejection.
    pub const fn message(&self) -> &'static str {
        match self {
            RejectReason::BadExtension => "File must have .dna extension",
            RejectReason::Empty => "File is empty",
            RejectReason::TooLarge => "File too large (max 200MB)",
            RejectReason::BadSignature => "Invalid DNA file signature",
            RejectReason::ReadError => "Failed to read file signature",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// The result of running the format gate over a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationOutcome {
    /// All checks passed.
    Valid,
    /// A check failed; the reason is the first failure in check order.
    Invalid(RejectReason),
}

impl ValidationOutcome {
    /// Check if the outcome is [`ValidationOutcome::Valid`].
    pub const fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Validate a byte source as a plausible DNA file.
///
/// Checks run in order and short-circuit on the first failure:
/// extension, non-empty, size cap, 3-byte signature. Only the signature
/// check reads bytes, and it fetches exactly 3 of them - a source that
/// fails the name or size checks is never read.
pub fn validate<S: ByteSource>(source: &mut S) -> ValidationOutcome {
    if !source.name().ends_with(DNA_EXTENSION) {
        return ValidationOutcome::Invalid(RejectReason::BadExtension);
    }

    if source.is_empty() {
        return ValidationOutcome::Invalid(RejectReason::Empty);
    }

    if source.len() > MAX_FILE_SIZE {
        return ValidationOutcome::Invalid(RejectReason::TooLarge);
    }

    let mut signature = [0u8; 3];
    match source.read_at(0, &mut signature) {
        Ok(()) if &signature == DNA_SIGNATURE => ValidationOutcome::Valid,
        Ok(()) => ValidationOutcome::Invalid(RejectReason::BadSignature),
        Err(_) => ValidationOutcome::Invalid(RejectReason::ReadError),
    }
}
