use chrono::Local;
use serde::{Deserialize, Serialize};

/// Date format used when stamping new entries. The field itself is plain
/// text: whatever is stored in the file is kept and rendered verbatim.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl Entry {
    /// Create a new entry. When `date` is `None`, stamps the current local
    /// calendar date in `YYYY-MM-DD` form.
    pub fn new(name: String, category: String, amount: f64, date: Option<String>) -> Self {
        let date = date.unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string());
        Self {
            name,
            category,
            amount,
            date,
        }
    }
}

/// Partial update for a single entry. `None` leaves the field unchanged;
/// `Some` overwrites it, so `Some(0.0)` sets an amount to exactly zero.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

impl EntryPatch {
    /// Apply the provided fields onto an entry in place.
    pub fn apply(self, entry: &mut Entry) {
        if let Some(name) = self.name {
            entry.name = name;
        }
        if let Some(category) = self.category {
            entry.category = category;
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
        if let Some(date) = self.date {
            entry.date = date;
        }
    }
}
