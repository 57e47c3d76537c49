//! Request-scoped lookups combining one or more upstream calls
//!
//! Outbound calls within a lookup run sequentially and are never retried.

use tracing::{info, warn};

use crate::EcoError;
use crate::api::ApiClient;
use crate::forecast::summarize_days;
use crate::models::event::available_categories;
use crate::models::{AirQualityReport, EventListing, WeatherReport};

/// Current conditions plus the 5-day summary for a city.
///
/// A failed current-weather call fails the lookup. A failed forecast call
/// only empties the summary and records why.
pub async fn weather_report(api: &ApiClient, api_key: &str, city: &str) -> crate::Result<WeatherReport> {
    let current = api.current_weather(api_key, city).await?;

    let (forecast, forecast_error) = match api.forecast_samples(api_key, city).await {
        Ok(samples) => (summarize_days(&samples), None),
        Err(e) => {
            warn!("Forecast unavailable for {}: {}", city, e);
            (Vec::new(), Some(e.user_message()))
        }
    };

    info!("Built weather report for {} with {} forecast days", city, forecast.len());
    Ok(WeatherReport {
        current,
        forecast,
        forecast_error,
    })
}

/// Resolve the city to coordinates, then query pollution at that position
pub async fn air_quality_report(
    api: &ApiClient,
    api_key: &str,
    city: &str,
) -> crate::Result<AirQualityReport> {
    let coordinates = api.resolve_coordinates(api_key, city).await?;
    let (aqi, pollutants) = api.air_pollution(api_key, coordinates, city).await?;

    let report = AirQualityReport::new(city.to_string(), aqi, pollutants, coordinates);
    if report.tier.is_unknown() {
        warn!("AQI {} for {} is outside the known scale", aqi, city);
    }
    Ok(report)
}

/// Event listing filtered by category, plus the categories to offer
pub async fn event_listing(api: &ApiClient, category: Option<&str>) -> (EventListing, Vec<String>) {
    match api.list_events().await {
        Ok(events) => {
            let categories = available_categories(&events);
            let fetched = events.len();
            let listing = EventListing::from_events(events, category);
            info!(
                "Fetched {} events, showing {} entries for filter {:?}",
                fetched,
                listing.entry_count(),
                category
            );
            (listing, categories)
        }
        Err(e) => {
            warn!("Event feed unavailable: {}", e);
            (EventListing::Error(event_error_message(&e)), available_categories(&[]))
        }
    }
}

fn event_error_message(error: &EcoError) -> String {
    match error {
        EcoError::Upstream { status, .. } => format!("Error de la API de NASA: Código {status}"),
        EcoError::Transport { message, .. } => format!("Error de conexión a la API: {message}"),
        other => other.user_message(),
    }
}
