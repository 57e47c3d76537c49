//! Current weather model and display helpers

use serde::{Deserialize, Serialize};

use super::DaySummary;

/// Geographic coordinates resolved for a city
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Current conditions for a city, as shown on the weather page
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentWeather {
    /// City as typed by the visitor
    pub city: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Perceived temperature in Celsius
    pub feels_like: f64,
    /// Capitalized description of the conditions
    pub description: String,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Visibility in meters, when reported
    pub visibility: Option<f64>,
    /// Provider icon code (e.g. "10d")
    pub icon: String,
    pub coordinates: Coordinates,
}

/// Everything the weather page displays for one city
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    /// Summaries for the next days, empty when the forecast was unavailable
    pub forecast: Vec<DaySummary>,
    /// Why the forecast is missing, if it is
    pub forecast_error: Option<String>,
}

impl CurrentWeather {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    /// Format visibility, falling back to "N/A" when the provider omits it
    #[must_use]
    pub fn format_visibility(&self) -> String {
        self.visibility
            .map_or_else(|| "N/A".to_string(), |meters| format!("{meters:.0} m"))
    }
}

/// Uppercase the first character and lowercase the rest
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
