//! Orchestrates a single extraction run.
//!
//! Scans the requested directory, extracts literals from every source
//! file and writes the JSON report. Console output beyond the opening
//! progress line is left to `report`, so the run can be driven as a library.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{args::Arguments, report::print_scanning};
use crate::core::{ExtractionContext, Report, UnitReadFailure};
use crate::json_writer::JsonWriter;

/// Result of a completed run.
pub struct RunResult {
    pub root_dir: PathBuf,
    pub output_path: PathBuf,
    pub report: Report,
    pub failures: Vec<UnitReadFailure>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

pub fn run(args: &Arguments) -> Result<RunResult> {
    let ctx = ExtractionContext::new(&args.directory, args.verbose)?;
    print_scanning(&ctx.root_dir);

    let outcome = ctx.extract();

    let output_path = std::path::absolute(&args.output)
        .with_context(|| format!("Failed to resolve output path: {}", args.output.display()))?;
    JsonWriter::new(&output_path).save(&outcome.report)?;

    Ok(RunResult {
        root_dir: ctx.root_dir,
        output_path,
        report: outcome.report,
        failures: outcome.failures,
        files_scanned: outcome.files_scanned,
        skipped_count: ctx.skipped_count,
    })
}
