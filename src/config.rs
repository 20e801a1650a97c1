//! Feed settings: built-in defaults, then config files, then environment, then flags.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use config::{Config, Environment, File, FileFormat};
use eventfeed_core::{FeedError, FeedOptions};

/// Config file picked up from the working directory when `--config` isn't given.
pub static LOCAL_CONFIG_FILE: &str = "eventfeed.toml";

static ENV_PREFIX: &str = "EVENTFEED";

/// Feed settings accepted on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct FeedArgs {
    /// TZID paired with event times (default Australia/Sydney)
    #[arg(long)]
    pub tzid: Option<String>,

    /// Calendar display name
    #[arg(long)]
    pub name: Option<String>,

    /// Calendar description
    #[arg(long)]
    pub desc: Option<String>,

    /// PRODID string
    #[arg(long)]
    pub prodid: Option<String>,

    /// Fallback LOCATION when an event has none
    #[arg(long)]
    pub default_location: Option<String>,

    /// Domain appended to event UIDs
    #[arg(long)]
    pub uid_domain: Option<String>,

    /// Config file to read instead of ./eventfeed.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl FeedArgs {
    fn apply(&self, options: &mut FeedOptions) {
        let overrides = [
            (&self.tzid, &mut options.tzid),
            (&self.name, &mut options.calendar_name),
            (&self.desc, &mut options.calendar_description),
            (&self.prodid, &mut options.prodid),
            (&self.default_location, &mut options.default_location),
            (&self.uid_domain, &mut options.uid_domain),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }
    }
}

/// User-wide config at ~/.config/eventfeed/config.toml
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("eventfeed").join("config.toml"))
}

/// Resolve the effective feed options for a run.
pub fn load(args: &FeedArgs) -> Result<FeedOptions> {
    let mut options = load_files(global_config_path().as_deref(), args.config.as_deref())?;
    args.apply(&mut options);
    validate_tzid(&options.tzid)?;

    tracing::debug!(?options, "resolved feed options");
    Ok(options)
}

fn load_files(global: Option<&Path>, explicit: Option<&Path>) -> Result<FeedOptions, FeedError> {
    let mut builder = Config::builder();

    if let Some(path) = global {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }

    builder = match explicit {
        Some(path) => {
            builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
        }
        None => {
            builder.add_source(File::new(LOCAL_CONFIG_FILE, FileFormat::Toml).required(false))
        }
    };

    builder
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()
        .map_err(|e| FeedError::Config(e.to_string()))?
        .try_deserialize()
        .map_err(|e| FeedError::Config(e.to_string()))
}

/// The TZID goes straight into the feed, so it must at least be a real IANA zone.
fn validate_tzid(tzid: &str) -> Result<(), FeedError> {
    tzid.parse::<chrono_tz::Tz>()
        .map(|_| ())
        .map_err(|_| FeedError::Config(format!("Unknown time zone '{}'", tzid)))
}
