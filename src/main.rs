mod commands;
mod config;
mod failure;
mod io;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use eventfeed_core::normalize::{IdMode, NormalizeOptions};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::config::FeedArgs;

#[derive(Parser)]
#[command(name = "eventfeed")]
#[command(about = "Publish a club's events as normalized JSON and an iCalendar feed")]
struct Cli {
    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an .ics feed from events.json
    Ics {
        /// Path to events.json
        #[arg(long = "in", default_value = "./assets/events.json")]
        input: PathBuf,

        /// Path to write the .ics file
        #[arg(long = "out", default_value = "./assets/sawc-events.ics")]
        output: PathBuf,

        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Clean, id and sort event records into the published events.json
    Normalize {
        /// Path to the raw event records
        #[arg(long = "in")]
        input: PathBuf,

        /// Path to write the normalized events.json
        #[arg(long = "out", default_value = "./assets/events.json")]
        output: PathBuf,

        /// Also write an .ics feed to this path
        #[arg(long)]
        ics: Option<PathBuf>,

        /// How to fill in missing ids
        #[arg(long, value_enum, default_value_t = IdModeArg::Uuid)]
        id_mode: IdModeArg,

        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Show config locations and the effective feed options
    Config {
        #[command(flatten)]
        feed: FeedArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum IdModeArg {
    Uuid,
    Deterministic,
}

impl From<IdModeArg> for IdMode {
    fn from(arg: IdModeArg) -> Self {
        match arg {
            IdModeArg::Uuid => IdMode::Uuid,
            IdModeArg::Deterministic => IdMode::Deterministic,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "ERROR:".red().bold(), err);
            ExitCode::from(failure::exit_code(&err))
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Ics {
            input,
            output,
            feed,
        } => {
            let options = config::load(&feed)?;
            commands::ics::run(&input, &output, &options)
        }
        Commands::Normalize {
            input,
            output,
            ics,
            id_mode,
            feed,
        } => {
            let options = config::load(&feed)?;
            let normalize_options = NormalizeOptions {
                id_mode: id_mode.into(),
            };
            commands::normalize::run(&input, &output, ics.as_deref(), &normalize_options, &options)
        }
        Commands::Config { feed } => {
            let options = config::load(&feed)?;
            commands::config::run(&options)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
