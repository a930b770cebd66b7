use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use rayon::prelude::*;

use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    core::{
        file_scanner::scan_files,
        parsers::csharp::extract,
        report::{Report, UnitReadFailure},
    },
};

/// Output of one extraction run.
pub struct ExtractionOutcome {
    pub report: Report,
    /// Units that could not be read, in enumeration order.
    pub failures: Vec<UnitReadFailure>,
    pub files_scanned: usize,
}

/// Orchestrates a run: configuration, file enumeration and extraction.
///
/// # Configuration Priority
///
/// 1. `.cslitrc.json` found from the root directory upward
/// 2. Built-in defaults
pub struct ExtractionContext {
    /// Absolute root directory; unit identifiers are relative to it.
    pub root_dir: PathBuf,
    /// Unit identifiers in enumeration order.
    pub files: Vec<String>,
    /// Paths the walker could not access.
    pub skipped_count: usize,
}

impl ExtractionContext {
    pub fn new(root: &Path, verbose: bool) -> Result<Self> {
        if !root.is_dir() {
            bail!("Directory '{}' does not exist.", root.display());
        }
        let root_dir = std::path::absolute(root)
            .with_context(|| format!("Failed to resolve directory: {}", root.display()))?;

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No {CONFIG_FILE_NAME} found, using default configuration");
        }
        let config = config_result.config;
        let scan_result = scan_files(&root_dir, &config.extensions, &config.ignores, verbose);

        Ok(Self {
            root_dir,
            files: scan_result.files,
            skipped_count: scan_result.skipped_count,
        })
    }

    /// Read and scan every unit.
    ///
    /// Units are processed in parallel; the indexed `collect` keeps results
    /// in enumeration order, so the report is merged sequentially afterwards.
    pub fn extract(&self) -> ExtractionOutcome {
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|unit| {
                let literals = fs::read_to_string(self.root_dir.join(unit))
                    .map(|source| extract(&source));
                (unit, literals)
            })
            .collect();

        let mut report = Report::new();
        let mut failures = Vec::new();
        for (unit, result) in results {
            match result {
                Ok(literals) => report.insert(unit.as_str(), literals),
                Err(e) => failures.push(UnitReadFailure {
                    unit: unit.clone(),
                    error: e.to_string(),
                }),
            }
        }

        ExtractionOutcome {
            report,
            failures,
            files_scanned: self.files.len(),
        }
    }
}
