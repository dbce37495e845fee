//! Roster CLI
//!
//! Command-line interface for Roster - local-first employee records.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roster_core::{Config, EmployeeStore, JsonFilePersistence};

mod commands;
mod i18n;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster - Local-first employee record keeping")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// Create a new employee record
    Add {
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Date of birth (MM/DD/YYYY)
        #[arg(long)]
        date_of_birth: String,
        /// Start date (MM/DD/YYYY)
        #[arg(long)]
        start_date: String,
        /// Street address
        #[arg(long)]
        street: String,
        /// City
        #[arg(long)]
        city: String,
        /// State (two-letter code or full name)
        #[arg(long)]
        state: String,
        /// Zip code
        #[arg(long)]
        zip_code: String,
        /// Department (Sales, Marketing, Engineering, Human Resources, Legal)
        #[arg(long)]
        department: String,
    },
    /// List employee records
    #[command(alias = "ls")]
    List {
        /// Filter text (matched against every column)
        #[arg(short, long)]
        filter: Option<String>,
        /// Sort column (e.g. last-name, start-date)
        #[arg(short, long)]
        sort: Option<String>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Page to show (zero-based)
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Rows per page
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show status (storage location, schema version, counts)
    Status,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, language, seed_demo_data, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())?;

    // Handle TUI (default when no command given)
    if matches!(&cli.command, Some(Commands::Tui) | None) {
        return tui::run(&config);
    }

    // CLI commands log to stderr, and only when asked
    init_cli_logging();

    config.ensure_data_dir()?;
    let persistence = Box::new(JsonFilePersistence::new(config.employees_path()));
    let mut store = if config.seed_demo_data {
        EmployeeStore::open_seeded(persistence)
    } else {
        EmployeeStore::open(persistence)
    };

    match cli.command.unwrap() {
        Commands::Tui => unreachable!(),            // Handled above
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Add {
            first_name,
            last_name,
            date_of_birth,
            start_date,
            street,
            city,
            state,
            zip_code,
            department,
        } => commands::employee::add(
            &mut store,
            commands::employee::AddArgs {
                first_name,
                last_name,
                date_of_birth,
                start_date,
                street,
                city,
                state,
                zip_code,
                department,
            },
            &output,
        ),
        Commands::List {
            filter,
            sort,
            desc,
            page,
            page_size,
        } => commands::employee::list(&store, filter, sort, desc, page, page_size, &output),
        Commands::Status => commands::status::show(&config, &store, &output),
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Initialize stderr logging for CLI commands when ROSTER_LOG is set
fn init_cli_logging() {
    let Ok(log_level) = std::env::var("ROSTER_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "roster_core={},roster_cli={}",
        log_level, log_level
    ));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
