//! Item CLI commands
//!
//! Implements the catalog commands: listing, lookup, borrowing, returning,
//! playback, archiving and search.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::item::{format_item_details, format_item_list};
use crate::error::{LibraryError, LibraryResult};
use crate::models::{ItemId, ItemType};
use crate::services::{CatalogService, SearchQuery};
use crate::storage::Storage;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// List all items
    #[command(alias = "ls")]
    List,
    /// Show one item
    Show {
        /// Item ID
        id: ItemId,
    },
    /// Borrow an item
    Borrow {
        /// Item ID
        id: ItemId,
        /// Loan duration (e.g., "7 days"); defaults to the configured loan
        duration: Vec<String>,
    },
    /// Return a borrowed item
    Return {
        /// Item ID
        id: ItemId,
    },
    /// Play an audiobook
    Play {
        /// Audiobook ID
        id: ItemId,
    },
    /// Archive an e-magazine issue
    Archive {
        /// E-magazine ID
        id: ItemId,
    },
    /// Search by title and/or type
    Search {
        /// Keyword to look for in titles
        #[arg(short, long)]
        title: Option<String>,
        /// Item type (book, audiobook, emagazine)
        #[arg(short = 'k', long = "type")]
        item_type: Option<String>,
    },
}

/// Handle an item command
pub fn handle_item_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ItemCommands,
) -> LibraryResult<()> {
    let service = CatalogService::new(storage);

    match cmd {
        ItemCommands::List => {
            let report = service.list()?;
            let refs: Vec<_> = report.items.iter().collect();
            print!("{}", format_item_list(&refs, &settings.date_format));

            if !report.skipped.is_empty() {
                println!(
                    "Skipped {} record(s) with unknown type: {}",
                    report.skipped.len(),
                    report.skipped.join(", ")
                );
            }
        }

        ItemCommands::Show { id } => {
            let item = service.get(id)?;
            print!("{}", format_item_details(&item, &settings.date_format));
        }

        ItemCommands::Borrow { id, duration } => {
            let duration = if duration.is_empty() {
                settings.default_loan.clone()
            } else {
                duration.join(" ")
            };

            match service.borrow(id, &duration) {
                Ok(outcome) => println!("{}", outcome),
                Err(e @ LibraryError::DurationParse(_)) => println!("{}", e),
                Err(e) => return Err(e),
            }
        }

        ItemCommands::Return { id } => {
            let outcome = service.return_item(id)?;
            println!("{}", outcome);
        }

        ItemCommands::Play { id } => {
            println!("{}", service.play(id)?);
        }

        ItemCommands::Archive { id } => {
            println!("{}", service.archive_issue(id)?);
        }

        ItemCommands::Search { title, item_type } => {
            let item_type = item_type
                .map(|t| {
                    ItemType::parse(&t).ok_or_else(|| {
                        LibraryError::Validation(format!(
                            "Invalid item type: '{}'. Valid types: book, audiobook, emagazine",
                            t
                        ))
                    })
                })
                .transpose()?;

            let query = SearchQuery { title, item_type };
            let results = service.search(&query)?;

            if results.is_empty() {
                println!("No {} found.", query.describe());
            } else {
                println!("Found {} {}:", results.len(), query.describe());
                let refs: Vec<_> = results.iter().collect();
                print!("{}", format_item_list(&refs, &settings.date_format));
            }
        }
    }

    Ok(())
}
