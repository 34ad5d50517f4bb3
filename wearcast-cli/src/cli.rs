use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Password, PasswordDisplayMode};
use wearcast_core::{Config, provider_from_config, report_for};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wearcast", version, about = "Weather alerts and what to wear")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and request timeout.
    Configure,

    /// Show current weather, alerts and outfit suggestions for a city.
    Show {
        /// City name, optionally followed by a country code ("Paris, FR").
        city: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List cities matching a partial name.
    Search {
        /// At least three characters of a city name.
        query: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city, json).await,
            Command::Search { query } => search(&query).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(cfg.timeout_secs)
        .prompt()
        .context("Failed to read timeout")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.timeout_secs = timeout_secs;

    let path = cfg.save()?;
    tracing::info!(path = %path.display(), "saved configuration");
    println!("Configuration saved to {}", path.display());

    Ok(())
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;

    let report = match report_for(provider.as_ref(), city).await {
        Ok(report) => report,
        Err(err) if err.is_not_found() => return Err(not_found(city)),
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", render::report_json(&report)?);
    } else {
        print!("{}", render::report_text(&report));
    }

    Ok(())
}

async fn search(query: &str) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;

    let cities = provider.search_cities(query).await?;
    print!("{}", render::cities_text(query, &cities));

    Ok(())
}

fn not_found(city: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Could not find weather for '{}'. Please check the spelling and try again.",
        city.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wearcast_core::FetchError;

    #[test]
    fn parses_show_with_json_flag() {
        let cli = Cli::try_parse_from(["wearcast", "show", "Paris, FR", "--json"]).expect("parse");

        match cli.command {
            Command::Show { city, json } => {
                assert_eq!(city, "Paris, FR");
                assert!(json);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn show_requires_a_city() {
        assert!(Cli::try_parse_from(["wearcast", "show"]).is_err());
    }

    #[test]
    fn not_found_message_names_the_city() {
        let msg = not_found(" Atlantis ").to_string();

        assert_eq!(
            msg,
            "Could not find weather for 'Atlantis'. Please check the spelling and try again."
        );
    }

    #[test]
    fn fetch_errors_keep_their_message() {
        let err: anyhow::Error = FetchError::Status { status: 401, body: "bad key".into() }.into();

        assert!(err.to_string().contains("401"));
    }
}
