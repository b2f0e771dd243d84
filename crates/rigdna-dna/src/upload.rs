//! Upload status tracking.
//!
//! One [`UploadTracker`] instance tracks one in-flight operation. Every
//! operation gets a fresh [`Generation`] when the caller selects a source;
//! transitions carry the generation they belong to, and a transition whose
//! generation is stale is discarded. That makes superseding an in-flight
//! upload mechanical: select a new source, and the old operation's late
//! results can no longer touch the tracker.

use rigdna_common::{format_size, ByteSource};

use crate::gate::{validate, RejectReason, ValidationOutcome};
use crate::parser::RigParser;
use crate::summary::CharacterRigSummary;

/// Monotonically increasing tag for in-flight operations.
pub type Generation = u64;

/// Where an upload currently stands.
///
/// `Idle` is the initial state; `Complete` and `Error` are terminal until
/// the caller selects a new source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", content = "detail", rename_all = "lowercase")
)]
pub enum UploadState {
    Idle,
    Validating,
    Processing,
    Complete(CharacterRigSummary),
    Error(String),
}

/// State machine for a single upload slot.
#[derive(Debug, Clone)]
pub struct UploadTracker {
    state: UploadState,
    generation: Generation,
    message: String,
    source_name: String,
    source_size: u64,
}

impl Default for UploadTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadTracker {
    /// Create a tracker in the `Idle` state.
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
            generation: 0,
            message: "No file selected".to_string(),
            source_name: String::new(),
            source_size: 0,
        }
    }

    /// The current state.
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// The generation of the most recently started operation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Human-readable status line for the current state.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Start a new operation for the named source.
    ///
    /// Allowed from any state; supersedes whatever was in flight. Returns
    /// the generation the caller must present on later transitions.
    pub fn select(&mut self, name: impl Into<String>, size: u64) -> Generation {
        self.generation += 1;
        self.source_name = name.into();
        self.source_size = size;
        self.state = UploadState::Validating;
        self.message = "Validating DNA file...".to_string();
        self.generation
    }

    /// Record a format-gate rejection: `Validating` -> `Error`.
    ///
    /// Returns `false` (and changes nothing) if `generation` is stale.
    pub fn reject(&mut self, generation: Generation, reason: RejectReason) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        debug_assert!(matches!(self.state, UploadState::Validating));

        self.message = reason.message().to_string();
        self.state = UploadState::Error(reason.message().to_string());
        true
    }

    /// Record a format-gate pass: `Validating` -> `Processing`.
    pub fn pass_validation(&mut self, generation: Generation) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        debug_assert!(matches!(self.state, UploadState::Validating));

        self.state = UploadState::Processing;
        self.message = "Extracting metadata...".to_string();
        true
    }

    /// Record successful extraction: `Processing` -> `Complete`.
    pub fn complete(&mut self, generation: Generation, summary: CharacterRigSummary) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        debug_assert!(matches!(self.state, UploadState::Processing));

        self.message = format!(
            "\u{2713} {} validated ({})",
            self.source_name,
            format_size(self.source_size)
        );
        self.state = UploadState::Complete(summary);
        true
    }

    /// Record an extraction fault: `Processing` -> `Error`.
    pub fn fail(&mut self, generation: Generation, fault: impl std::fmt::Display) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        debug_assert!(matches!(self.state, UploadState::Processing));

        let message = format!("Error: {fault}");
        self.message = message.clone();
        self.state = UploadState::Error(message);
        true
    }

    /// Drive a full upload synchronously through the tracker.
    ///
    /// This is the single mutation entry point for hosts that do not need
    /// the stepwise transitions: select, gate, then extract, ending in
    /// `Complete` or `Error`.
    pub fn run_upload<S, P>(&mut self, source: &mut S, parser: &P) -> &UploadState
    where
        S: ByteSource,
        P: RigParser,
    {
        let generation = self.select(source.name(), source.len());

        match validate(source) {
            ValidationOutcome::Invalid(reason) => {
                self.reject(generation, reason);
            }
            ValidationOutcome::Valid => {
                self.pass_validation(generation);
                match parser.parse(source) {
                    Ok(summary) => {
                        self.complete(generation, summary);
                    }
                    Err(fault) => {
                        self.fail(generation, fault);
                    }
                }
            }
        }

        &self.state
    }

    fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{extract, PlaceholderParser};
    use rigdna_common::MemorySource;

    fn dna_source(name: &str, total_len: usize) -> MemorySource {
        let mut data = b"DNA".to_vec();
        data.resize(total_len, 0);
        MemorySource::new(name, data)
    }

    #[test]
    fn test_initial_state_is_idle() {
        let tracker = UploadTracker::new();

        assert_eq!(*tracker.state(), UploadState::Idle);
        assert_eq!(tracker.message(), "No file selected");
    }

    #[test]
    fn test_happy_path() {
        let mut tracker = UploadTracker::new();
        let mut source = dna_source("hero.dna", 1024);

        let state = tracker.run_upload(&mut source, &PlaceholderParser);

        match state {
            UploadState::Complete(summary) => {
                assert_eq!(summary.metadata.name, "hero");
                assert_eq!(summary.joint_count, 0);
            }
            other => panic!("expected Complete, got {other:?}"),
        }
        assert_eq!(tracker.message(), "\u{2713} hero.dna validated (1.0 KB)");
    }

    #[test]
    fn test_rejection_path() {
        let mut tracker = UploadTracker::new();
        let mut source = MemorySource::new("hero.txt", b"DNA".to_vec());

        let state = tracker.run_upload(&mut source, &PlaceholderParser);

        assert_eq!(
            *state,
            UploadState::Error("File must have .dna extension".to_string())
        );
    }

    #[test]
    fn test_empty_file_rejection_path() {
        let mut tracker = UploadTracker::new();
        let mut source = MemorySource::new("hero.dna", vec![]);

        let state = tracker.run_upload(&mut source, &PlaceholderParser);

        assert_eq!(*state, UploadState::Error("File is empty".to_string()));
    }

    #[test]
    fn test_stepwise_transitions() {
        let mut tracker = UploadTracker::new();

        let generation = tracker.select("hero.dna", 1024);
        assert_eq!(*tracker.state(), UploadState::Validating);
        assert_eq!(tracker.message(), "Validating DNA file...");

        assert!(tracker.pass_validation(generation));
        assert_eq!(*tracker.state(), UploadState::Processing);
        assert_eq!(tracker.message(), "Extracting metadata...");

        let mut source = dna_source("hero.dna", 1024);
        let summary = extract(&mut source).unwrap();
        assert!(tracker.complete(generation, summary));
        assert!(matches!(tracker.state(), UploadState::Complete(_)));
    }

    #[test]
    fn test_superseded_completion_is_discarded() {
        let mut tracker = UploadTracker::new();

        // First operation reaches Processing.
        let old = tracker.select("old.dna", 512);
        assert!(tracker.pass_validation(old));

        // A second selection supersedes it.
        let new = tracker.select("new.dna", 1024);
        assert_eq!(*tracker.state(), UploadState::Validating);

        // The old operation finishes late; its result must not land.
        let mut source = dna_source("old.dna", 512);
        let summary = extract(&mut source).unwrap();
        assert!(!tracker.complete(old, summary));
        assert_eq!(*tracker.state(), UploadState::Validating);
        assert_eq!(tracker.generation(), new);

        // The new operation proceeds normally.
        assert!(tracker.pass_validation(new));
        assert_eq!(*tracker.state(), UploadState::Processing);
    }

    #[test]
    fn test_stale_rejection_and_fault_are_discarded() {
        let mut tracker = UploadTracker::new();

        let old = tracker.select("old.dna", 512);
        let _new = tracker.select("new.dna", 1024);

        assert!(!tracker.reject(old, RejectReason::BadSignature));
        assert!(!tracker.fail(old, "late fault"));
        assert_eq!(*tracker.state(), UploadState::Validating);
    }

    #[test]
    fn test_select_restarts_from_terminal_states() {
        let mut tracker = UploadTracker::new();

        let mut bad = MemorySource::new("hero.txt", vec![1]);
        tracker.run_upload(&mut bad, &PlaceholderParser);
        assert!(matches!(tracker.state(), UploadState::Error(_)));

        let mut good = dna_source("hero.dna", 16);
        tracker.run_upload(&mut good, &PlaceholderParser);
        assert!(matches!(tracker.state(), UploadState::Complete(_)));

        tracker.select("another.dna", 8);
        assert_eq!(*tracker.state(), UploadState::Validating);
    }
}
