use std::fmt;

use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use super::{CurrentWeather, WeatherConfig, WeatherError, WeatherProvider};

/// [`WeatherProvider`] backed by the OpenWeather HTTP API.
///
/// A lookup is two sequential requests: geocode the town, then fetch current
/// conditions at its coordinates. The second request is only made once the
/// first has produced a location.
#[derive(Clone)]
pub struct OpenWeatherClient {
    agent: Agent,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    #[must_use]
    pub fn new(config: WeatherConfig) -> Self {
        let agent = Agent::new_with_config(
            Agent::config_builder()
                .timeout_global(Some(config.timeout))
                .build(),
        );
        Self { agent, config }
    }

    #[must_use]
    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    fn locate(&self, town: &str) -> Result<Location, WeatherError> {
        let locations: Vec<Location> = self
            .agent
            .get(&self.config.geo_url)
            .query("q", town)
            .query("limit", "1")
            .query("appid", &self.config.api_key)
            .call()?
            .into_body()
            .read_json()?;
        first_location(locations, town)
    }

    fn conditions_at(&self, location: &Location) -> Result<CurrentWeather, WeatherError> {
        let report: OneCallReport = self
            .agent
            .get(&self.config.weather_url)
            .query("lat", location.lat.to_string())
            .query("lon", location.lon.to_string())
            .query("appid", &self.config.api_key)
            .query("exclude", "minutely,hourly,daily,alerts")
            .query("units", "metric")
            .call()?
            .into_body()
            .read_json()?;
        report.into_current()
    }
}

impl WeatherProvider for OpenWeatherClient {
    #[tracing::instrument(name = "weather.lookup", skip(self), err)]
    fn current_weather(&self, town: &str) -> Result<CurrentWeather, WeatherError> {
        let location = self.locate(town)?;
        debug!(lat = location.lat, lon = location.lon, "geocoded town");
        self.conditions_at(&location)
    }
}

impl fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct Location {
    lat: f64,
    lon: f64,
}

fn first_location(locations: Vec<Location>, town: &str) -> Result<Location, WeatherError> {
    locations
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::UnknownLocation {
            town: town.to_owned(),
        })
}

#[derive(Debug, Deserialize)]
struct OneCallReport {
    current: CurrentReport,
}

#[derive(Debug, Deserialize)]
struct CurrentReport {
    temp: f64,
    #[serde(default)]
    weather: Vec<ConditionReport>,
}

#[derive(Debug, Deserialize)]
struct ConditionReport {
    main: String,
}

impl OneCallReport {
    fn into_current(self) -> Result<CurrentWeather, WeatherError> {
        let CurrentReport { temp, weather } = self.current;
        let primary = weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingConditions)?;
        Ok(CurrentWeather {
            label: primary.main,
            temperature: temp,
        })
    }
}
