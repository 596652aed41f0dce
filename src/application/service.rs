use std::path::Path;

use crate::domain::{Entry, EntryPatch};
use crate::storage::Repository;

use super::AppError;

/// Application service providing high-level operations on the budget ledger.
/// This is the primary interface for any client (CLI, report writer, etc.).
///
/// The full entry list stays resident; every mutation rewrites the backing
/// file before returning, so the file always reflects the last `Ok`.
pub struct LedgerService {
    repo: Repository,
    entries: Vec<Entry>,
}

impl LedgerService {
    /// Open the ledger backed by the given file, loading its contents.
    /// A missing file is an empty ledger, not an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let repo = Repository::new(path.as_ref());
        let entries = repo.load()?;
        Ok(Self { repo, entries })
    }

    /// Number of entries currently in the ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only snapshot of the entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Current entries paired with their 1-based position, in order.
    /// An empty vec is the explicit "no entries" signal.
    pub fn list(&self) -> Vec<(usize, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e)).collect()
    }

    /// Append a new entry and persist. When `date` is `None` the entry is
    /// stamped with the current local date. Field contents are not
    /// validated; duplicates are permitted.
    pub fn add(
        &mut self,
        name: String,
        category: String,
        amount: f64,
        date: Option<String>,
    ) -> Result<Entry, AppError> {
        let entry = Entry::new(name, category, amount, date);
        self.entries.push(entry.clone());
        self.repo.save(&self.entries)?;
        Ok(entry)
    }

    /// Remove the entry at the given 1-based position and persist.
    /// An out-of-range index leaves the ledger untouched.
    pub fn delete(&mut self, index: usize) -> Result<Entry, AppError> {
        let pos = self.check_index(index)?;
        let removed = self.entries.remove(pos);
        self.repo.save(&self.entries)?;
        Ok(removed)
    }

    /// Overwrite the provided fields of the entry at the given 1-based
    /// position and persist. Fields left `None` in the patch are unchanged.
    pub fn update(&mut self, index: usize, patch: EntryPatch) -> Result<Entry, AppError> {
        let pos = self.check_index(index)?;
        patch.apply(&mut self.entries[pos]);
        let updated = self.entries[pos].clone();
        self.repo.save(&self.entries)?;
        Ok(updated)
    }

    /// Map a 1-based index onto the entries vec, rejecting out-of-range
    /// values before any mutation happens.
    fn check_index(&self, index: usize) -> Result<usize, AppError> {
        if index == 0 || index > self.entries.len() {
            return Err(AppError::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }
        Ok(index - 1)
    }
}
