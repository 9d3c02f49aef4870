use std::path::Path;

use bmi_calculator::{ColorChoice, Config, OutputFormat};
use clap::ValueEnum;
use tracing::instrument;

use super::terminal::Styler;

const KEYS: &str = "color, output";

#[derive(Debug, clap::Parser)]
/// Show or modify configuration settings
///
/// Settings are read from the file given with --config.
///
/// Available configuration keys:
///   color   When to colour output: auto, always, never (default: auto)
///   output  Default output format: text, json (default: text)
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key to retrieve (color, output)
        key: String,
    },

    /// Set a configuration value, creating the file if needed
    ///
    /// Examples:
    ///   bmi --config bmi.toml config set color never
    ///   bmi --config bmi.toml config set output json
    Set {
        /// Configuration key to set (color, output)
        key: String,

        /// Value to set
        value: String,
    },
}

impl Command {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config, path: Option<&Path>) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show => {
                let styler = Styler::new(config.color);
                println!("{}", styler.heading("Configuration:"));
                println!("  color: {}", value_name(config.color));
                println!("  output: {}", value_name(config.output));
                if path.is_none() {
                    println!("{}", styler.dim("(defaults; no --config file given)"));
                }
            }
            ConfigCommand::Get { key } => println!("{}", get(config, &key)?),
            ConfigCommand::Set { key, value } => {
                let Some(path) = path else {
                    anyhow::bail!("No configuration file given; pass --config <PATH>");
                };
                set_in_file(path, &key, &value)?;
                println!("Set {key} = {value} in {}", path.display());
            }
        }
        Ok(())
    }
}

fn value_name(value: impl ValueEnum) -> String {
    value
        .to_possible_value()
        .map(|possible| possible.get_name().to_string())
        .unwrap_or_default()
}

fn get(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "color" => Ok(value_name(config.color)),
        "output" => Ok(value_name(config.output)),
        _ => anyhow::bail!("Unknown configuration key: '{key}'\nAvailable keys: {KEYS}"),
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "color" => {
            config.color = ColorChoice::from_str(value, true)
                .map_err(|_| anyhow::anyhow!("Value must be one of: auto, always, never"))?;
        }
        "output" => {
            config.output = OutputFormat::from_str(value, true)
                .map_err(|_| anyhow::anyhow!("Value must be one of: text, json"))?;
        }
        _ => anyhow::bail!("Unknown configuration key: '{key}'\nSupported keys: {KEYS}"),
    }
    Ok(())
}

/// Loads the file (or defaults if it does not exist yet), applies one setting
/// and writes it back.
fn set_in_file(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = if path.exists() {
        Config::load(path)?
    } else {
        Config::default()
    };
    set(&mut config, key, value)?;
    config.save(path)?;
    Ok(())
}
