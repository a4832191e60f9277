use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use libris::audit::AuditLogger;
use libris::cli::{handle_book_command, handle_history_command, run_menu, BookCommands};
use libris::config::{paths::LibrisPaths, settings::Settings};
use libris::services::Library;
use libris::storage::CatalogFile;

#[derive(Parser)]
#[command(
    name = "libris",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based library catalog manager",
    long_about = "Libris keeps track of the books on your shelf and who has \
                  borrowed them. Run it without arguments for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Shelf management commands
    #[command(subcommand)]
    Book(BookCommands),

    /// Show recent catalog changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LibrisPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings);

    let catalog_path = settings.catalog_path(&paths);
    let audit_logger = || AuditLogger::new(paths.audit_log());

    match cli.command {
        None | Some(Commands::Menu) => {
            paths.ensure_directories()?;
            let mut library = open_library(&settings, catalog_path, audit_logger());

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            run_menu(&mut library, &mut input, &mut output)?;
        }
        Some(Commands::Book(cmd)) => {
            paths.ensure_directories()?;
            let mut library = open_library(&settings, catalog_path, audit_logger());
            handle_book_command(&mut library, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&audit_logger(), limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Libris at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!("Catalog file: {}", catalog_path.display());
        }
        Some(Commands::Config) => {
            println!("Libris Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Catalog file:   {}", catalog_path.display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Initialized:   {}", paths.is_initialized());
            println!("  Audit enabled: {}", settings.audit_enabled);
            println!("  Log level:     {}", settings.log_level);
        }
    }

    Ok(())
}

fn open_library(
    settings: &Settings,
    catalog_path: std::path::PathBuf,
    audit: AuditLogger,
) -> Library {
    let library = Library::open(CatalogFile::new(catalog_path));
    if settings.audit_enabled {
        library.with_audit(audit)
    } else {
        library
    }
}

/// Log to stderr so diagnostics never interleave with menu output
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("libris={}", settings.log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
