use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use wear_core::Config;
use wear_outfit::{classify, parse_forecast, parse_today, Gender, OutfitCard, TemperatureUnit};

#[derive(Parser)]
#[command(name = "weatherwear")]
#[command(about = "Outfit pictograms and cards for the WeatherWear API.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the pictogram for each garment label
    #[command(alias = "c")]
    Classify {
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Render outfit cards from an API response ("-" reads stdin)
    Card {
        /// Treat the input as a multi-day forecast
        #[arg(long)]
        forecast: bool,
        file: PathBuf,
    },
    /// Show or update saved preferences
    Config {
        #[arg(long)]
        city: Option<String>,
        /// Temperature unit: C or F
        #[arg(long)]
        unit: Option<TemperatureUnit>,
        /// Wardrobe category: male, female or baby
        #[arg(long)]
        gender: Option<Gender>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub fn classify_labels(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|label| format!("{}\t{}", label, classify(label.as_str())))
        .collect()
}

pub fn render_cards(body: &str, forecast: bool) -> Result<String> {
    let cards: Vec<OutfitCard> = if forecast {
        parse_forecast(body)?.iter().map(OutfitCard::from).collect()
    } else {
        vec![OutfitCard::from(&parse_today(body)?)]
    };
    tracing::debug!("Rendering {} outfit cards", cards.len());

    Ok(cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

/// Apply any changed preferences, then print the effective settings.
pub fn show_config(
    city: Option<String>,
    unit: Option<TemperatureUnit>,
    gender: Option<Gender>,
) -> Result<()> {
    let path = Config::config_path()?;
    let mut config = Config::load()?;

    let changed = city.is_some() || unit.is_some() || gender.is_some();
    if let Some(city) = city {
        config.preferences.city = city.trim().to_string();
    }
    if let Some(unit) = unit {
        config.preferences.unit = unit;
    }
    if let Some(gender) = gender {
        config.preferences.gender = gender;
    }
    if changed {
        config.save()?;
    }

    let validation = config.checked()?;
    let prefs = &config.preferences;

    println!("Config file: {}", path.display());
    println!("API: {}", config.api.base_url);
    println!(
        "City: {}",
        if prefs.is_complete() { prefs.city.as_str() } else { "(not set)" }
    );
    println!("Unit: {}", prefs.unit);
    println!("Wardrobe: {}", prefs.gender);
    if prefs.is_complete() {
        println!("Outfit URL: {}", config.api.outfit_url(prefs)?);
        println!("Forecast URL: {}", config.api.forecast_url(prefs)?);
    }

    for warning in &validation.warnings {
        println!("warning: {}", warning);
    }
    Ok(())
}
