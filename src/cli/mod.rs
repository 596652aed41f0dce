use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::application::LedgerService;
use crate::domain::EntryPatch;
use crate::io::{DEFAULT_REPORT_FILE, EMPTY_MESSAGE, Reporter};

/// Bilancio - Budget Planner
#[derive(Parser)]
#[command(name = "bilancio")]
#[command(about = "A local-first budget planner for the command line")]
#[command(version)]
pub struct Cli {
    /// Budget file path
    #[arg(short, long, default_value = "budget.json")]
    pub file: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a budget entry
    Add {
        /// Name of the entry
        name: String,

        /// Category (e.g., "Food", "Housing")
        category: String,

        /// Amount (e.g., 4.50)
        amount: f64,

        /// Date of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List all budget entries
    List,

    /// Delete the entry at the given position
    Delete {
        /// 1-based position of the entry (see `list`)
        index: usize,
    },

    /// Update fields of the entry at the given position
    Update {
        /// 1-based position of the entry (see `list`)
        index: usize,

        /// New name (omit to keep current)
        #[arg(long)]
        name: Option<String>,

        /// New category (omit to keep current)
        #[arg(long)]
        category: Option<String>,

        /// New amount (omit to keep current)
        #[arg(long)]
        amount: Option<f64>,

        /// New date (YYYY-MM-DD, omit to keep current)
        #[arg(long)]
        date: Option<String>,
    },

    /// Generate a report of the current budget
    Report {
        /// Output file for the report
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = LedgerService::open(&self.file)?;

        match self.command {
            Commands::Add {
                name,
                category,
                amount,
                date,
            } => {
                let entry = service.add(name, category, amount, date)?;
                println!(
                    "Added: {} - {} - {} - {}",
                    entry.name, entry.category, entry.amount, entry.date
                );
            }

            Commands::List => {
                run_list_command(&service);
            }

            Commands::Delete { index } => {
                let entry = service.delete(index)?;
                println!(
                    "Deleted: {} - {} - {} - {}",
                    entry.name, entry.category, entry.amount, entry.date
                );
            }

            Commands::Update {
                index,
                name,
                category,
                amount,
                date,
            } => {
                let patch = EntryPatch {
                    name,
                    category,
                    amount,
                    date,
                };
                let entry = service.update(index, patch)?;
                println!(
                    "Updated: {} - {} - {} - {}",
                    entry.name, entry.category, entry.amount, entry.date
                );
            }

            Commands::Report { output } => {
                let path = Reporter::new(service.entries()).write_to_file(&output)?;
                println!("Report generated: {}", path.display());
            }
        }

        Ok(())
    }
}

fn run_list_command(service: &LedgerService) {
    let listing = service.list();
    if listing.is_empty() {
        println!("{}", EMPTY_MESSAGE);
        return;
    }

    for (no, entry) in listing {
        println!(
            "{}. {} - {} - {} - {}",
            no, entry.name, entry.category, entry.amount, entry.date
        );
    }
}
