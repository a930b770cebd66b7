use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::is_glob_pattern;

/// Result of scanning files.
pub struct ScanResult {
    /// Unit identifiers: paths relative to the scanned root, in walk order.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

/// Recursively enumerate source files under `base_dir`.
///
/// Directory entries are visited in file-name order, so the result is
/// stable across runs and platforms.
pub fn scan_files(
    base_dir: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(PathBuf::from(p));
        }
    }

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(base_dir) else {
            continue;
        };

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| relative.starts_with(ignore_path))
        {
            continue;
        }

        let relative_str = relative.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&relative_str)) {
            continue;
        }

        files.push(relative_str.into_owned());
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}
