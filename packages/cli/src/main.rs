//! Ticketboard terminal client
//!
//! Fetches tickets and users, then prints the board grouped and ordered by
//! the selected modes.

mod config;
mod render;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use config::{CliConfig, Overrides, Settings};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use ticketboard::models::{BoardSnapshot, GroupingMode, OrderingMode};
use ticketboard::services::BoardService;
use ticketboard::source::create_data_source;

/// Ticket board in the terminal
#[derive(Parser)]
#[command(name = "ticketboard-cli")]
#[command(author = "Ticketboard Team")]
#[command(version = "0.1.0")]
#[command(about = "Render the ticket board grouped and ordered in the terminal")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Column grouping (status, user, priority)
    #[arg(short, long)]
    grouping: Option<GroupingMode>,

    /// Card ordering inside columns (priority, title)
    #[arg(short, long)]
    ordering: Option<OrderingMode>,

    /// Endpoint returning { tickets, users }
    #[arg(long, env = "TICKETBOARD_URL")]
    url: Option<String>,

    /// Read tickets from a local JSON file instead of the endpoint
    #[arg(long)]
    file: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short = 'c', long)]
    config_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the board (default)
    Show,

    /// List the available grouping and ordering modes
    Modes,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Colored columns of cards
    Text,
    /// The board as JSON
    Json,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            grouping: self.grouping,
            ordering: self.ordering,
            url: self.url.clone(),
            file: self.file.clone(),
            timeout_secs: self.timeout,
            no_color: self.no_color,
        }
    }

    fn load_settings(&self) -> anyhow::Result<Settings> {
        let config = match &self.config_file {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                CliConfig::from_file(path)?
            }
            None => CliConfig::default(),
        };

        Ok(config.resolve(&self.overrides()))
    }
}

async fn show_board(settings: &Settings, format: OutputFormat) -> anyhow::Result<()> {
    let source = create_data_source(&settings.data_source)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Fetching tickets from {}", source.describe()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let fetched = source.fetch().await;
    spinner.finish_and_clear();

    let snapshot = BoardSnapshot::new(fetched?);
    let board = BoardService::render(&snapshot, settings.view)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&board)?),
        OutputFormat::Text => print!("{}", render::render_board(&board)?),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.load_settings()?;

    if !settings.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Modes) => {
            print!("{}", render::render_modes(settings.view)?);
        }
        Some(Commands::Show) | None => {
            show_board(&settings, cli.format).await?;
        }
    }

    Ok(())
}
