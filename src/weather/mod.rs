//! Current-weather lookup used by `weather` restrictions.

mod client;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

pub use client::OpenWeatherClient;

/// Weather reported for a town at lookup time.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Provider label such as `Clear` or `Clouds`, as returned.
    pub label: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
}

/// Why a weather lookup produced no reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("weather provider unreachable: {0}")]
    Transport(String),

    #[error("weather provider timed out")]
    Timeout,

    #[error("weather provider returned status {status}")]
    Status { status: u16 },

    #[error("weather provider sent an unreadable response: {0}")]
    Decode(String),

    #[error("no location found for '{town}'")]
    UnknownLocation { town: String },

    #[error("weather provider reported no current conditions")]
    MissingConditions,
}

impl From<ureq::Error> for WeatherError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => WeatherError::Status { status },
            ureq::Error::Timeout(_) => WeatherError::Timeout,
            ureq::Error::Json(source) => WeatherError::Decode(source.to_string()),
            other => WeatherError::Transport(other.to_string()),
        }
    }
}

/// Source of current weather for a town.
///
/// Implementations must not panic on provider failures; every failure is a
/// [`WeatherError`].
#[cfg_attr(test, mockall::automock)]
pub trait WeatherProvider {
    /// Look up the current weather in `town`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] if any step of the lookup fails.
    fn current_weather(&self, town: &str) -> Result<CurrentWeather, WeatherError>;
}

impl<T: WeatherProvider + ?Sized> WeatherProvider for &T {
    fn current_weather(&self, town: &str) -> Result<CurrentWeather, WeatherError> {
        (**self).current_weather(town)
    }
}

impl<T: WeatherProvider + ?Sized> WeatherProvider for Arc<T> {
    fn current_weather(&self, town: &str) -> Result<CurrentWeather, WeatherError> {
        (**self).current_weather(town)
    }
}

/// Connection settings for [`OpenWeatherClient`].
#[derive(Clone)]
pub struct WeatherConfig {
    /// OpenWeather API key, sent as `appid`.
    pub api_key: String,
    /// Direct geocoding endpoint (town name to coordinates).
    pub geo_url: String,
    /// Current conditions endpoint (coordinates to weather).
    pub weather_url: String,
    /// Upper bound on each request, connection included.
    pub timeout: Duration,
}

impl WeatherConfig {
    pub const DEFAULT_GEO_URL: &'static str = "http://api.openweathermap.org/geo/1.0/direct";
    pub const DEFAULT_WEATHER_URL: &'static str = "http://api.openweathermap.org/data/2.5/onecall";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Default endpoints and timeout with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            geo_url: Self::DEFAULT_GEO_URL.to_owned(),
            weather_url: Self::DEFAULT_WEATHER_URL.to_owned(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("geo_url", &self.geo_url)
            .field("weather_url", &self.weather_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
