//! Weather provider: current conditions, 5-day/3-hour forecast and air pollution

use chrono::DateTime;
use tracing::{debug, instrument, warn};

use super::ApiClient;
use crate::EcoError;
use crate::models::weather::capitalize;
use crate::models::{Coordinates, CurrentWeather, ForecastSample, Pollutants};

const WEATHER: &str = "datos del clima";
const FORECAST: &str = "pronóstico";
const COORDINATES: &str = "coordenadas";
const AIR_QUALITY: &str = "datos de calidad del aire";

impl ApiClient {
    /// Current conditions for a city, metric units, Spanish descriptions
    #[instrument(skip(self, api_key))]
    pub async fn current_weather(&self, api_key: &str, city: &str) -> Result<CurrentWeather, EcoError> {
        let response: wire::WeatherResponse = self.city_request("weather", api_key, city, WEATHER).await?;
        current_from_wire(city, response)
    }

    /// Coordinates of a city, resolved through the current-weather endpoint
    #[instrument(skip(self, api_key))]
    pub async fn resolve_coordinates(&self, api_key: &str, city: &str) -> Result<Coordinates, EcoError> {
        let response: wire::WeatherResponse =
            self.city_request("weather", api_key, city, COORDINATES).await?;
        Ok(response.coord.into())
    }

    /// Raw 3-hour forecast samples for a city
    #[instrument(skip(self, api_key))]
    pub async fn forecast_samples(&self, api_key: &str, city: &str) -> Result<Vec<ForecastSample>, EcoError> {
        let response: wire::ForecastResponse =
            self.city_request("forecast", api_key, city, FORECAST).await?;

        let samples: Vec<ForecastSample> = response
            .list
            .into_iter()
            .filter_map(sample_from_wire)
            .collect();
        debug!("Received {} forecast samples for {}", samples.len(), city);
        Ok(samples)
    }

    /// AQI and pollutant concentrations at a position; `city` labels errors
    #[instrument(skip(self, api_key))]
    pub async fn air_pollution(
        &self,
        api_key: &str,
        coordinates: Coordinates,
        city: &str,
    ) -> Result<(u8, Pollutants), EcoError> {
        let request = self
            .client
            .get(Self::url(&self.endpoints.openweather, "air_pollution"))
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", api_key.to_string()),
            ]);
        let response: wire::PollutionResponse = self.send_json(request, AIR_QUALITY, city).await?;

        let entry = response.list.into_iter().next().ok_or_else(|| {
            EcoError::invalid_response(AIR_QUALITY, city, "empty pollution list")
        })?;
        Ok((entry.main.aqi, entry.components))
    }

    async fn city_request<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        api_key: &str,
        city: &str,
        resource: &'static str,
    ) -> Result<T, EcoError> {
        let request = self
            .client
            .get(Self::url(&self.endpoints.openweather, path))
            .query(&[
                ("q", city),
                ("appid", api_key),
                ("units", "metric"),
                ("lang", "es"),
            ]);
        self.send_json(request, resource, city).await
    }
}

fn current_from_wire(city: &str, response: wire::WeatherResponse) -> Result<CurrentWeather, EcoError> {
    let condition = response
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| EcoError::invalid_response(WEATHER, city, "no weather conditions"))?;

    Ok(CurrentWeather {
        city: city.to_string(),
        temperature: response.main.temp,
        feels_like: response.main.feels_like,
        description: capitalize(&condition.description),
        humidity: response.main.humidity,
        pressure: response.main.pressure,
        wind_speed: response.wind.map_or(0.0, |wind| wind.speed),
        visibility: response.visibility,
        icon: condition.icon,
        coordinates: response.coord.into(),
    })
}

fn sample_from_wire(item: wire::ForecastItem) -> Option<ForecastSample> {
    let timestamp = DateTime::from_timestamp(item.dt, 0)?.naive_utc();
    let Some(condition) = item.weather.into_iter().next() else {
        warn!("Skipping forecast sample at {} without conditions", timestamp);
        return None;
    };

    Some(ForecastSample {
        timestamp,
        temperature: item.main.temp,
        description: condition.description,
        icon: condition.icon,
    })
}

/// Weather provider response structures
mod wire {
    use serde::Deserialize;

    use crate::models::{Coordinates, Pollutants};

    #[derive(Debug, Deserialize)]
    pub struct Coord {
        pub lat: f64,
        pub lon: f64,
    }

    impl From<Coord> for Coordinates {
        fn from(coord: Coord) -> Self {
            Coordinates {
                latitude: coord.lat,
                longitude: coord.lon,
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
        pub icon: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainReadings {
        pub temp: f64,
        pub feels_like: f64,
        pub pressure: f64,
        pub humidity: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    /// Current weather response
    #[derive(Debug, Deserialize)]
    pub struct WeatherResponse {
        pub coord: Coord,
        pub weather: Vec<Condition>,
        pub main: MainReadings,
        pub wind: Option<Wind>,
        pub visibility: Option<f64>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastMain {
        pub temp: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        /// Unix timestamp of the slot start
        pub dt: i64,
        pub main: ForecastMain,
        #[serde(default)]
        pub weather: Vec<Condition>,
    }

    /// 5-day/3-hour forecast response
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PollutionIndex {
        pub aqi: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct PollutionEntry {
        pub main: PollutionIndex,
        #[serde(default)]
        pub components: Pollutants,
    }

    /// Air pollution response
    #[derive(Debug, Deserialize)]
    pub struct PollutionResponse {
        pub list: Vec<PollutionEntry>,
    }
}
