use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::Entry;

/// Repository for persisting the budget ledger to a JSON file.
///
/// The whole ledger is rewritten on every save; there is no append or
/// patch path. A missing file on load means an empty ledger.
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository backed by the file at the given path.
    /// The file is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full backing file.
    ///
    /// A nonexistent file yields an empty ledger. Any other read failure,
    /// or malformed JSON, is an error for the caller to propagate.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read budget file: {:?}", self.path));
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse budget file: {:?}", self.path))
    }

    /// Serialize the full ledger and rewrite the backing file.
    ///
    /// Writes to a sibling temp file and renames it into place, so a crash
    /// mid-write never leaves a truncated ledger behind.
    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries).context("Failed to serialize budget")?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write budget file: {:?}", tmp_path))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace budget file: {:?}", self.path))?;

        Ok(())
    }
}
