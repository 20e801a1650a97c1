use anyhow::{Context, Result};
use eventfeed_core::FeedOptions;
use owo_colors::OwoColorize;

use crate::config::{global_config_path, LOCAL_CONFIG_FILE};

pub fn run(options: &FeedOptions) -> Result<()> {
    println!("{}", "Paths".bold());
    println!(
        "  Global config:  {}",
        global_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(no config directory)".to_string())
    );
    println!("  Local config:   ./{}", LOCAL_CONFIG_FILE);
    println!();

    let rendered = toml::to_string_pretty(options).context("Could not render options as TOML")?;
    println!("{}", "Effective options".bold());
    for line in rendered.lines() {
        println!("  {}", line);
    }

    Ok(())
}
