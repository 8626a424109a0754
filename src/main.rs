use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cuaca::{
    CuacaConfig, CuacaError, LocationQuery, OpenWeatherClient, RegionClient, WeatherEvent,
    WeatherService, WeatherUpdate, logging,
};

/// Weather for Indonesian provinces and regencies
#[derive(Parser, Debug)]
#[command(name = "cuaca", version, about)]
struct Cli {
    /// Path to a TOML config file (default: <config dir>/cuaca/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging for cuaca
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all provinces
    Provinces,
    /// List the regencies of a province
    Regencies {
        /// Province id as listed by `provinces`
        province_id: String,
    },
    /// Current weather and daily forecast for a regency
    Weather {
        /// Regency name, e.g. "KABUPATEN BANDUNG"
        #[arg(long)]
        regency: String,
        /// Province name used when the regency is unknown to the provider
        #[arg(long)]
        province: Option<String>,
        /// Your name, used in the greeting
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    run(cli).await.inspect_err(|err| {
        if let Some(e) = err.downcast_ref::<CuacaError>() {
            eprintln!("{}", e.user_message());
        }
    })
}

async fn run(cli: Cli) -> Result<()> {
    let config = CuacaConfig::load_from_path(cli.config.as_deref())
        .context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose);
    tracing::debug!("Using config from: {:?}", cli.config);

    match cli.command {
        Command::Provinces => {
            let client = RegionClient::new(&config)?;
            let provinces = client.provinces().await.context("Failed to load provinces")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&provinces)?);
            } else {
                for province in provinces {
                    println!("{:>4}  {}", province.id, province.name);
                }
            }
        }
        Command::Regencies { province_id } => {
            let client = RegionClient::new(&config)?;
            let regencies = client
                .regencies(&province_id)
                .await
                .with_context(|| format!("Failed to load regencies for province {province_id}"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&regencies)?);
            } else {
                for regency in regencies {
                    println!("{:>6}  {}", regency.id, regency.name);
                }
            }
        }
        Command::Weather {
            regency,
            province,
            name,
        } => {
            if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                return Err(CuacaError::validation("Name cannot be empty").into());
            }
            let query = LocationQuery::new(regency, province)?;
            let provider = Arc::new(OpenWeatherClient::new(&config)?);
            let (service, mut events) = WeatherService::new(provider, &config);

            let result = service.resolve_weather(&query).await;

            if cli.json {
                let report = result.context("Weather lookup failed")?;
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            while let Ok(event) = events.try_recv() {
                print_event(&event, name.as_deref());
            }
            result.context("Weather lookup failed")?;
        }
    }

    Ok(())
}

fn print_event(event: &WeatherEvent, name: Option<&str>) {
    match &event.update {
        WeatherUpdate::CurrentConditions(report) => {
            let c = &report.conditions;
            println!("{}!", report.greeting.address(name));
            println!("📍 {} (matched by {})", c.display_name(), report.tier);
            println!(
                "🌡️  {} (feels like {:.1}°C, range {})",
                c.format_temperature(),
                c.feels_like_c,
                c.format_range()
            );
            println!("☁️  {} - {}", c.condition_main, c.condition_description);
            println!("💧 {}%   ⏲️  {}", c.humidity_pct, c.format_pressure());
        }
        WeatherUpdate::ForecastUpdated(days) => {
            println!();
            println!("Forecast:");
            for day in days {
                println!(
                    "  {}  {:>7}  {} ({})",
                    day.date,
                    day.format_temperature(),
                    day.condition_main,
                    day.icon_id
                );
            }
        }
        WeatherUpdate::Failed(message) => {
            eprintln!("⚠️  {message}");
        }
    }
}
