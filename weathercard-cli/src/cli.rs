use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use tracing::info;
use weathercard_core::{Card, Config, Controller, OpenWeatherClient};

use crate::terminal;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercard", version, about = "Weather card for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Look up one city and draw its card.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// Prompt for cities until cancelled (default).
    Watch,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Watch) {
            Command::Configure => configure(),
            Command::Show { city } => {
                let controller = controller_from_config()?;
                controller.submit(&city).await;
                print!("{}", controller.with_surface(terminal::draw));
                Ok(())
            }
            Command::Watch => watch(controller_from_config()?).await,
        }
    }
}

type CardController = Controller<OpenWeatherClient, Card>;

fn controller_from_config() -> anyhow::Result<CardController> {
    let config = Config::load()?.with_env_overrides();
    let client = OpenWeatherClient::from_config(&config)?;
    Ok(Controller::new(client, Card::new()))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "Saved configuration");
    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn watch(controller: CardController) -> anyhow::Result<()> {
    loop {
        let input = match Text::new("City:").with_help_message("Esc to quit").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read city"),
        };

        controller.submit(&input).await;
        print!("{}", controller.with_surface(terminal::draw));
    }
}
