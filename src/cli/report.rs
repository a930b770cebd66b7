//! Console output for extraction runs.
//!
//! Progress and summary lines go to stdout, warnings to stderr. Each printer
//! has a `_to` variant taking explicit writers for testing.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::run::RunResult;
use crate::core::UnitReadFailure;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_scanning(root: &Path) {
    let _ = writeln!(io::stdout().lock(), "Scanning directory: {}", root.display());
}

/// Print the run summary: warnings first, then per-file counts (verbose
/// only), the totals line and the output location.
pub fn print(result: &RunResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<O: Write, E: Write>(result: &RunResult, verbose: bool, out: &mut O, err: &mut E) {
    print_read_failures_to(&result.failures, verbose, err);

    if result.skipped_count > 0 {
        let _ = writeln!(
            err,
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            result.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    if verbose {
        for unit in result.report.iter() {
            let count = unit.literals.len();
            let _ = writeln!(
                out,
                "  {} {}",
                unit.unit,
                format!("({} {})", count, plural(count, "literal", "literals")).dimmed()
            );
        }
    }

    let found = result.report.len();
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found string literals in {} {} ({} scanned)",
            found,
            plural(found, "file", "files"),
            result.files_scanned
        )
        .green()
    );
    let _ = writeln!(out, "Results written to: {}", result.output_path.display());
}

/// Print unreadable files: one line each in verbose mode, a count otherwise.
pub fn print_read_failures_to<W: Write>(failures: &[UnitReadFailure], verbose: bool, writer: &mut W) {
    if failures.is_empty() {
        return;
    }

    if verbose {
        for failure in failures {
            let _ = writeln!(
                writer,
                "{} Failed to read {}: {}",
                "warning:".bold().yellow(),
                failure.unit,
                failure.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            failures.len(),
            "-v".cyan()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
