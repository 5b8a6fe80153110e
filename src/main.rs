use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use libranet::cli::{handle_history_command, handle_item_command, ItemCommands};
use libranet::config::{paths::LibraryPaths, settings::Settings};
use libranet::services::CatalogService;
use libranet::storage::Storage;

#[derive(Parser)]
#[command(
    name = "libranet",
    version,
    about = "Personal library catalog for books, audiobooks and e-magazines",
    long_about = "LibraNet keeps a small personal catalog of books, audiobooks and \
                  e-magazines. Borrow and return items, track overdue fines, play \
                  audiobooks and search the collection from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Item(ItemCommands),

    /// Show recent borrow/return history
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write the default catalog and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LIBRANET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = LibraryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    match cli.command {
        Some(Commands::Item(cmd)) => {
            handle_item_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing LibraNet at: {}", paths.base_dir().display());
            let created = CatalogService::new(&storage).initialize()?;
            settings.save(&paths)?;
            if created {
                println!("Default catalog written to {}", paths.library_file().display());
            } else {
                println!("Library already exists, left unchanged.");
            }
        }
        Some(Commands::Config) => {
            println!("LibraNet Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Library file:   {}", paths.library_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Default loan:  {}", settings.default_loan);
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!("  Date format:   {}", settings.date_format);
        }
        None => {
            println!("LibraNet - personal library catalog");
            println!();
            println!("Run 'libranet --help' for usage information.");
            println!("Run 'libranet list' to see the catalog.");
        }
    }

    Ok(())
}
