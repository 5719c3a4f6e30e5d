mod listing;
mod tui;

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Local;
use clap::Parser;
use worktrack_core::logging::{init_file_logging, init_logging, Verbosity};
use worktrack_core::repository::default_data_dir;
use worktrack_core::{
    normalize_requirement, parse_date_key, parse_month, validate_hours, Config, FileStore, Tracker,
};

#[derive(Parser)]
#[command(name = "worktrack")]
#[command(about = "Log daily work hours and spot work outside your requirements", long_about = None)]
struct Cli {
    /// Directory holding stored data and config.toml (default: ~/.worktrack)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive calendar
    Tui,
    /// Print the calendar grid for a month (YYYY-MM, this, prev, next)
    Month { month: Option<String> },
    /// Log hours for a day (usage: log today 7.5 Wrote weekly report)
    Log {
        /// YYYY-MM-DD, today, yest, tom, +Nd, -Nd
        #[arg(allow_hyphen_values = true)]
        date: String,
        #[arg(allow_hyphen_values = true)]
        hours: String,
        /// Work description
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Show the entry logged for a day
    Show {
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// List entries for a month
    List { month: Option<String> },
    /// Manage the required-work list
    #[command(subcommand)]
    Req(ReqCommands),
}

#[derive(clap::Subcommand)]
enum ReqCommands {
    /// Add a requirement keyword or phrase
    Add {
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// List requirements with their numbers
    List,
    /// Remove a requirement by its listed number
    Rm { number: usize },
}

fn log_level(cli: &Cli, config: &Config) -> String {
    if cli.quiet || cli.verbose > 0 {
        return Verbosity::from_flags(cli.quiet, cli.verbose)
            .to_level_filter()
            .to_string();
    }
    config
        .log_level
        .clone()
        .unwrap_or_else(|| Verbosity::default().to_level_filter().to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let store = FileStore::new(Some(data_dir))?;
    let config = Config::load(store.dir())?;
    let level = log_level(&cli, &config);
    let today = Local::now().date_naive();

    let command = match cli.command {
        None | Some(Commands::Tui) => {
            init_file_logging(&level, store.dir())?;
            return tui::run(store, config, today);
        }
        Some(command) => command,
    };

    init_logging(&level);
    let mut tracker = Tracker::open(store, today)?;

    match command {
        Commands::Tui => unreachable!("handled above"),
        Commands::Month { month } => {
            let month = parse_month(month.as_deref().unwrap_or("this"), today)?;
            tracker.set_month(month);
            listing::print_month(&tracker);
        }
        Commands::Log {
            date,
            hours,
            description,
        } => {
            let date = parse_date_key(&date, today)?;
            let hours = validate_hours(&hours)?;
            let description = description.join(" ");
            tracker.log_entry(date, &hours, &description)?;
            println!("Logged {} hrs for {}", hours, date);
            if let Some(status) = tracker.entry_status(&date) {
                println!("  {}", status.message());
            }
        }
        Commands::Show { date } => {
            let date = parse_date_key(&date, today)?;
            listing::print_entry(&tracker, &date);
        }
        Commands::List { month } => {
            let month = parse_month(month.as_deref().unwrap_or("this"), today)?;
            listing::print_entries(&tracker, &month);
        }
        Commands::Req(ReqCommands::Add { text }) => {
            let text = normalize_requirement(&text.join(" "))?;
            tracker.add_requirement(&text)?;
            println!("Requirement added: {}", text);
        }
        Commands::Req(ReqCommands::List) => {
            listing::print_requirements(tracker.requirements());
        }
        Commands::Req(ReqCommands::Rm { number }) => {
            let Some(index) = number.checked_sub(1) else {
                bail!("requirement numbers start at 1");
            };
            let removed = tracker.remove_requirement(index)?;
            println!("Requirement removed: {}", removed);
        }
    }
    Ok(())
}
