use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

/// Writes a serializable value as pretty-printed JSON, all or nothing.
pub struct JsonWriter {
    file_path: PathBuf,
}

impl JsonWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Save `value` with 2-space indentation and a trailing newline.
    ///
    /// Content goes to a temporary file next to the target, which is then
    /// renamed over it. A failed write leaves any existing file untouched.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        let content = to_pretty_json(value)?;

        let parent = match self.file_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;

        let mut tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create temporary file in: {}", parent.display()))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.flush())
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        tmp.persist(&self.file_path)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}

/// Serialize `value` the way [`JsonWriter::save`] lays it out on disk.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}
