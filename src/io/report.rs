use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use prettytable::{Table, row};

use crate::domain::Entry;

/// Default report artifact filename, distinct from the ledger's backing file.
pub const DEFAULT_REPORT_FILE: &str = "budget_report.txt";

pub const REPORT_TITLE: &str = "Budget Report";
pub const EMPTY_MESSAGE: &str = "No budget items found.";

/// Renderer turning a snapshot of the ledger into a report document:
/// a centered title followed by a full-grid table of the entries (or the
/// no-entries line when the ledger is empty). Field contents are rendered
/// verbatim, no validation.
pub struct Reporter<'a> {
    entries: &'a [Entry],
}

impl<'a> Reporter<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    /// Write the report document to any writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let body = self.render_body()?;

        // Center the title over the table (or over itself for an empty report).
        let width = body
            .lines()
            .next()
            .map(|line| line.chars().count())
            .unwrap_or(0)
            .max(REPORT_TITLE.len());

        writeln!(writer, "{:^width$}", REPORT_TITLE, width = width)?;
        writeln!(writer)?;
        writer.write_all(body.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the report document to a file, reporting the written path.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {:?}", path))?;
        self.write_to(BufWriter::new(file))?;
        Ok(path.to_path_buf())
    }

    fn render_body(&self) -> Result<String> {
        if self.entries.is_empty() {
            return Ok(format!("{}\n", EMPTY_MESSAGE));
        }

        // Default prettytable format draws grid lines on every cell boundary.
        let mut table = Table::new();
        table.set_titles(row![b->"No.", b->"Name", b->"Category", b->"Amount", b->"Date"]);

        for (i, entry) in self.entries.iter().enumerate() {
            let no = i + 1;
            table.add_row(row![no, entry.name, entry.category, entry.amount, entry.date]);
        }

        let mut buf = Vec::new();
        table.print(&mut buf).context("Failed to render report table")?;
        String::from_utf8(buf).context("Report table was not valid UTF-8")
    }
}
