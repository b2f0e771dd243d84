//! rigdna CLI - validate DNA character rig files and inspect their metadata.
//!
//! This is the main entry point for the rigdna command-line application.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rigdna::prelude::*;

/// rigdna - DNA character rig file validation tool
#[derive(Parser)]
#[command(name = "rigdna")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a file is a plausible DNA container
    Validate {
        /// Path to the .dna file
        file: PathBuf,
    },

    /// Validate a file and print its extracted metadata
    Info {
        /// Path to the .dna file
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Info { file, json } => cmd_info(&file, json),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(path: &PathBuf) -> Result<bool> {
    let mut source =
        FileSource::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    match validate(&mut source) {
        ValidationOutcome::Valid => {
            println!("{}: OK ({})", source.name(), format_size(source.len()));
            Ok(true)
        }
        ValidationOutcome::Invalid(reason) => {
            eprintln!("{}: {}", source.name(), reason);
            Ok(false)
        }
    }
}

fn cmd_info(path: &PathBuf, json: bool) -> Result<bool> {
    let mut source =
        FileSource::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let size = source.len();

    let mut tracker = UploadTracker::new();
    match tracker.run_upload(&mut source, &PlaceholderParser) {
        UploadState::Complete(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(summary)?);
            } else {
                print_summary(summary, size);
            }
            Ok(true)
        }
        UploadState::Error(message) => {
            eprintln!("{message}");
            Ok(false)
        }
        state => unreachable!("run_upload ended in non-terminal state {state:?}"),
    }
}

fn print_summary(summary: &CharacterRigSummary, size: u64) {
    let meta = &summary.metadata;

    println!("Name:         {}", meta.name);
    println!("Schema:       {}", meta.schema_variant);
    println!("Archetype:    {}", meta.archetype);
    println!("Gender:       {}", meta.gender);
    println!("Age:          {}", meta.age);
    println!("Joints:       {}", summary.joint_count);
    println!("Meshes:       {}", summary.mesh_count);
    println!("Blend shapes: {}", summary.blend_shape_count);
    if let Some(lods) = summary.lod_count {
        println!("LODs:         {}", lods);
    }
    println!("Size:         {}", format_size(size));
}
