use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use contacts::cli::Session;
use contacts::config::paths::DATA_DIR_ENV;
use contacts::config::{paths::ContactsPaths, settings::Settings};
use contacts::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal-based contact manager with birthday reminders",
    long_about = "An interactive address book for names, phone numbers and birthdays. \
                  The `birthdays` command lists contacts to congratulate in the \
                  coming days, moving weekend birthdays to the following Monday."
)]
struct Cli {
    /// Base directory for settings, data, backups and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    Session,

    /// Create the data directories and write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ContactsPaths::with_base_dir(dir),
        None => ContactsPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => run_session(paths, &settings)?,
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialized contacts at: {}", paths.base_dir().display());
        }
        Commands::Config => {
            println!("Contacts Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Address book:      {}", paths.address_book_file().display());
            println!("Backup directory:  {}", paths.backup_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Upcoming birthday window: {} days", settings.upcoming_days);
            println!("  Audit log enabled:        {}", settings.audit_enabled);
            println!("  Backups kept:             {}", settings.backup_retention.count);
        }
    }

    Ok(())
}

fn run_session(paths: ContactsPaths, settings: &Settings) -> Result<()> {
    let storage = Storage::new(paths, settings)?;

    let (book, load_error) = storage.load_address_book();
    if let Some(err) = load_error {
        eprintln!("Warning: {}. Starting with an empty address book.", err);
    }

    let stdin = io::stdin();
    let mut session = Session::new(&storage, settings, book);
    session.run(stdin.lock(), io::stdout())?;

    Ok(())
}
