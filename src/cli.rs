use std::path::{Path, PathBuf};

mod calc;
mod config;
mod form;
mod scale;
mod terminal;

use anyhow::Context;
use bmi_calculator::Config;
use clap::ArgAction;
use tracing::debug;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            // `config set` creates the file
            Some(path) if !path.exists() && matches!(self.command, Some(Command::Config(_))) => {
                Config::default()
            }
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => Config::default(),
        };
        debug!(?config, "configuration loaded");

        self.command
            .unwrap_or_else(|| Command::Form(form::Command::default()))
            .run(&config, self.config.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Fill in the form interactively (default)
    Form(form::Command),

    /// Calculate BMI from a weight and a height
    ///
    /// Both values accept a comma or a period as the decimal separator.
    Calc(calc::Command),

    /// Show the BMI categories and their ranges
    Scale(scale::Command),

    /// Show or modify configuration settings
    Config(config::Command),
}

impl Command {
    fn run(self, config: &Config, config_path: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Self::Form(command) => command.run(config)?,
            Self::Calc(command) => command.run(config)?,
            Self::Scale(command) => command.run(config)?,
            Self::Config(command) => command.run(config, config_path)?,
        }
        Ok(())
    }
}
