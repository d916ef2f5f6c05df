mod commands;
mod config;
mod ics;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "icsgen")]
#[command(about = "Build iCalendar (.ics) files from the command line or calendar documents")]
struct Cli {
    /// Config file (defaults to ~/.config/icsgen/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a calendar holding a single event
    Event(commands::event::EventArgs),
    /// Render a calendar document (TOML or JSON) to iCalendar
    Render {
        /// Calendar document to read
        input: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the order event properties are written in
    Properties,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Event(args) => commands::event::run(args, &cfg),
        Commands::Render { input, output } => {
            commands::render::run(&input, output.as_deref(), &cfg)
        }
        Commands::Properties => commands::properties::run(),
    }
}

/// Log to stderr so rendered output on stdout stays clean.
/// RUST_LOG takes precedence over -v.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
