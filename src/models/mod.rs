//! Data models for the EcoPortal site
//!
//! This module contains the display records built from upstream responses,
//! organized by concern:
//! - Weather: current conditions and capitalization helpers
//! - Forecast: 3-hour forecast samples and per-day summaries
//! - Air quality: pollutant concentrations and the AQI tier table
//! - Event: natural events and the filtered listing
//! - Media: video and news records

pub mod air_quality;
pub mod event;
pub mod forecast;
pub mod media;
pub mod weather;

// Re-export all public types for convenient access
pub use air_quality::{AirQualityReport, AqiTier, Pollutants};
pub use event::{EnvironmentalEvent, EventListing};
pub use forecast::{DaySummary, ForecastSample};
pub use media::{NewsArticle, Video};
pub use weather::{Coordinates, CurrentWeather, WeatherReport};
