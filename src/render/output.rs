//! Writing the structured and raw records to disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::json::{to_json, JsonFormat};
use crate::error::Result;
use crate::parser::ParsedResume;

/// Default file name of the structured record.
pub const RECORD_FILE: &str = "resume.json";

/// Default file name of the raw text record.
pub const RAW_FILE: &str = "resume_raw.json";

/// Where the two output records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Structured record path
    pub record: PathBuf,
    /// Raw text record path
    pub raw: PathBuf,
}

impl OutputPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            record: dir.join(RECORD_FILE),
            raw: dir.join(RAW_FILE),
        }
    }

    /// Set the structured record path.
    pub fn with_record(mut self, path: impl Into<PathBuf>) -> Self {
        self.record = path.into();
        self
    }

    /// Set the raw record path.
    pub fn with_raw(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw = path.into();
        self
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Write the raw record, then the structured record.
///
/// Parent directories are created as needed. Nothing is retried.
pub fn write_outputs(parsed: &ParsedResume, paths: &OutputPaths, format: JsonFormat) -> Result<()> {
    write_json(&paths.raw, &to_json(&parsed.raw, format)?)?;
    write_json(&paths.record, &to_json(&parsed.record, format)?)?;
    log::info!(
        "Wrote {} and {}",
        paths.raw.display(),
        paths.record.display()
    );
    Ok(())
}

fn write_json(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}
