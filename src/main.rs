//! `promocheck` command line front end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use promocheck::{
    InMemoryStore, NewPromoCode, OpenWeatherClient, PromoCodeError, PromoCodes, WeatherConfig,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Check promo codes and their restrictions
#[derive(Debug, Parser)]
#[command(name = "promocheck", about = "Promo code restriction engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    weather: WeatherArgs,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a promo code against caller arguments
    Validate {
        /// JSON file holding an array of `{name, advantage, restrictions}`
        #[arg(long)]
        codes: PathBuf,

        /// Promo code name
        #[arg(long)]
        name: String,

        /// Caller arguments as a JSON object, e.g. `{"age": 25, "town": "Lyon"}`
        #[arg(long, default_value = "{}")]
        arguments: String,
    },
    /// Check that every promo code in a file is well formed
    Check {
        #[arg(long)]
        codes: PathBuf,
    },
}

#[derive(Debug, Args)]
struct WeatherArgs {
    /// OpenWeather API key
    #[arg(long, env = "OPEN_WEATHER_KEY", hide_env_values = true, global = true)]
    weather_api_key: Option<String>,

    /// OpenWeather geocoding endpoint
    #[arg(long, env = "OPEN_WEATHER_GEO_URL", global = true)]
    weather_geo_url: Option<String>,

    /// OpenWeather current conditions endpoint
    #[arg(long, env = "OPEN_WEATHER_URL", global = true)]
    weather_url: Option<String>,

    /// Timeout for each weather request, in seconds
    #[arg(long, env = "OPEN_WEATHER_TIMEOUT_SECS", default_value_t = 5, global = true)]
    weather_timeout_secs: u64,
}

impl WeatherArgs {
    fn config(self) -> WeatherConfig {
        let mut config = WeatherConfig::new(self.weather_api_key.unwrap_or_default())
            .with_timeout(Duration::from_secs(self.weather_timeout_secs));
        if let Some(url) = self.weather_geo_url {
            config.geo_url = url;
        }
        if let Some(url) = self.weather_url {
            config.weather_url = url;
        }
        config
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a list of promo codes: {source}", path.display())]
    Codes {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("arguments are not valid JSON: {0}")]
    Arguments(serde_json::Error),

    #[error("cannot render decision: {0}")]
    Render(serde_json::Error),

    #[error(transparent)]
    PromoCode(#[from] PromoCodeError),
}

type Service = PromoCodes<InMemoryStore, OpenWeatherClient>;

fn load(path: &Path, weather: OpenWeatherClient) -> Result<Service, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let codes: Vec<NewPromoCode> = serde_json::from_str(&text).map_err(|source| CliError::Codes {
        path: path.to_owned(),
        source,
    })?;

    let service = PromoCodes::new(InMemoryStore::new(), weather);
    for code in codes {
        service.create(code)?;
    }
    info!(count = service.store().len(), path = %path.display(), "promo codes loaded");
    Ok(service)
}

fn run(command: Command, weather: OpenWeatherClient) -> Result<ExitCode, CliError> {
    match command {
        Command::Validate {
            codes,
            name,
            arguments,
        } => {
            let arguments: serde_json::Value =
                serde_json::from_str(&arguments).map_err(CliError::Arguments)?;
            let service = load(&codes, weather)?;
            let decision = service.validate(&name, &arguments)?;
            let rendered = serde_json::to_string(&decision).map_err(CliError::Render)?;
            println!("{rendered}");
            Ok(if decision.is_accepted() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Check { codes } => {
            let service = load(&codes, weather)?;
            println!("{} promo codes valid", service.store().len());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("promocheck={}", cli.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let weather = OpenWeatherClient::new(cli.weather.config());
    match run(cli.command, weather) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
