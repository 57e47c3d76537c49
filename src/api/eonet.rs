//! Natural event feed (unauthenticated)

use std::time::Duration;

use serde_json::Value;
use tracing::instrument;

use super::ApiClient;
use crate::EcoError;
use crate::models::{Coordinates, EnvironmentalEvent};

/// Maximum number of events requested
pub const EVENT_LIMIT: u16 = 50;
/// Time window of the feed, in days
pub const EVENT_DAYS: u16 = 60;
/// The feed gets its own, shorter timeout
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(10);

const EVENTS: &str = "eventos naturales";

impl ApiClient {
    /// Recent natural events worldwide
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<EnvironmentalEvent>, EcoError> {
        let request = self
            .client
            .get(Self::url(&self.endpoints.eonet, "events"))
            .query(&[("limit", EVENT_LIMIT), ("days", EVENT_DAYS)])
            .timeout(EVENT_TIMEOUT);
        let response: wire::EventsResponse = self.send_json(request, EVENTS, "EONET").await?;

        Ok(response.events.into_iter().map(EnvironmentalEvent::from).collect())
    }
}

impl From<wire::Event> for EnvironmentalEvent {
    fn from(event: wire::Event) -> Self {
        let category = event
            .categories
            .into_iter()
            .next()
            .map_or_else(|| "Desconocido".to_string(), |category| category.title);
        let latest = event.geometries.last();

        let date = event
            .date
            .or_else(|| latest.and_then(|geometry| geometry.date.clone()))
            .unwrap_or_else(|| "Fecha desconocida".to_string());

        Self {
            id: event.id,
            title: event.title,
            description: event
                .description
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| "Sin descripción".to_string()),
            category,
            date,
            coordinates: latest.and_then(|geometry| point_coordinates(&geometry.coordinates)),
        }
    }
}

/// `[lon, lat]` for point geometries; polygons and anything else give `None`
fn point_coordinates(coordinates: &Value) -> Option<Coordinates> {
    match coordinates.as_array()?.as_slice() {
        [lon, lat] => Some(Coordinates {
            latitude: lat.as_f64()?,
            longitude: lon.as_f64()?,
        }),
        _ => None,
    }
}

/// Event feed response structures
mod wire {
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Debug, Deserialize)]
    pub struct EventsResponse {
        #[serde(default)]
        pub events: Vec<Event>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Event {
        pub id: String,
        pub title: String,
        pub description: Option<String>,
        pub date: Option<String>,
        #[serde(default)]
        pub categories: Vec<Category>,
        #[serde(default)]
        pub geometries: Vec<Geometry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Category {
        pub title: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Geometry {
        pub date: Option<String>,
        #[serde(default)]
        pub coordinates: Value,
    }
}
