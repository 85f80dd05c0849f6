use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{
    Config, QuerySession, WatchConnectivity, WeatherClient, provider::provider_from_config, view,
};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather and 5-day forecast by city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name, e.g. "London" or "Paris,FR".
        city: String,

        /// Behave as if the host had no network connection.
        #[arg(long)]
        offline: bool,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    ///
    /// Entering `/offline` or `/online` switches connectivity for the rest of
    /// the session.
    Interactive {
        /// Start as if the host had no network connection.
        #[arg(long)]
        offline: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        debug!(command = ?self.command, "running command");
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, offline } => {
                let (session, _conn) = build_session(offline)?;
                session.submit(&city).await;
                print!("{}", view::render(&session.snapshot()));
                Ok(())
            }
            Command::Interactive { offline } => interactive(offline).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn build_session(offline: bool) -> anyhow::Result<(Arc<QuerySession>, Arc<WatchConnectivity>)> {
    let config = Config::load()?;
    debug!(
        base_url = %config.base_url,
        initial_loading = config.initial_loading,
        "loaded configuration"
    );
    let provider = provider_from_config(&config)?;

    let conn = Arc::new(WatchConnectivity::new(!offline));
    let client = WeatherClient::new(Arc::from(provider), conn.clone());
    let session = Arc::new(QuerySession::new(client, config.initial_loading));

    Ok((session, conn))
}

async fn interactive(offline: bool) -> anyhow::Result<()> {
    let (session, conn) = build_session(offline)?;
    let watcher = session.watch_connectivity(conn.subscribe());

    print!("{}", view::render(&session.snapshot()));
    loop {
        let city = match Text::new("City:")
            .with_placeholder("Enter the city...")
            .prompt()
        {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        if let Some(online) = connectivity_toggle(&city) {
            debug!(online, "connectivity switched from the prompt");
            conn.set_online(online);
            // The watcher catches up asynchronously; the render below must not lag.
            session.set_online(online);
            print!("{}", view::render(&session.snapshot()));
            continue;
        }

        session.submit(&city).await;
        print!("{}", view::render(&session.snapshot()));
    }

    watcher.abort();
    Ok(())
}

/// `/offline` and `/online` typed at the city prompt.
fn connectivity_toggle(input: &str) -> Option<bool> {
    match input.trim() {
        "/offline" => Some(false),
        "/online" => Some(true),
        _ => None,
    }
}
