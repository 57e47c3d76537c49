//! Natural event model and category filtering

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Coordinates;

/// Shown when a category filter leaves nothing to display
pub const NO_RESULTS_MESSAGE: &str =
    "No se encontraron eventos con los filtros aplicados. Intenta con otra categoría.";

/// Categories always offered in the filter, even when the feed has none of them
pub const COMMON_CATEGORIES: [&str; 8] = [
    "Volcanoes",
    "Earthquakes",
    "Storms",
    "Wildfires",
    "Floods",
    "Droughts",
    "Severe Storms",
    "Landslides",
];

/// A natural event from the public event feed
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnvironmentalEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Title of the event's first category
    pub category: String,
    pub date: String,
    /// Position of the latest point geometry, if the event has one
    pub coordinates: Option<Coordinates>,
}

/// What the events page shows in place of the list
#[derive(Debug, Serialize, Clone, PartialEq)]
pub enum EventListing {
    Events(Vec<EnvironmentalEvent>),
    /// Single placeholder when filtering (or the feed) left nothing
    NoResults(String),
    /// The feed could not be fetched
    Error(String),
}

impl EventListing {
    /// Build a listing from fetched events, keeping only `category` when given.
    ///
    /// The match is exact and case-sensitive. An empty result becomes the
    /// `NoResults` placeholder rather than an empty list.
    #[must_use]
    pub fn from_events(events: Vec<EnvironmentalEvent>, category: Option<&str>) -> Self {
        let events: Vec<EnvironmentalEvent> = match category {
            Some(category) => events
                .into_iter()
                .filter(|event| event.category == category)
                .collect(),
            None => events,
        };

        if events.is_empty() {
            EventListing::NoResults(NO_RESULTS_MESSAGE.to_string())
        } else {
            EventListing::Events(events)
        }
    }

    /// Number of entries the page renders
    #[must_use]
    pub fn entry_count(&self) -> usize {
        match self {
            EventListing::Events(events) => events.len(),
            EventListing::NoResults(_) | EventListing::Error(_) => 1,
        }
    }
}

/// Sorted union of the categories present in `events` and the common ones
#[must_use]
pub fn available_categories(events: &[EnvironmentalEvent]) -> Vec<String> {
    let mut categories: BTreeSet<String> = COMMON_CATEGORIES
        .iter()
        .map(|category| (*category).to_string())
        .collect();
    categories.extend(events.iter().map(|event| event.category.clone()));
    categories.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, category: &str) -> EnvironmentalEvent {
        EnvironmentalEvent {
            id: id.to_string(),
            title: format!("Event {id}"),
            description: "Sin descripción".to_string(),
            category: category.to_string(),
            date: "Fecha desconocida".to_string(),
            coordinates: None,
        }
    }

    #[test]
    fn test_filter_keeps_exact_category_only() {
        let events = vec![
            event("EONET_1", "Wildfires"),
            event("EONET_2", "Volcanoes"),
            event("EONET_3", "Wildfires"),
        ];
        let listing = EventListing::from_events(events, Some("Wildfires"));

        match listing {
            EventListing::Events(events) => {
                let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
                assert_eq!(ids, vec!["EONET_1", "EONET_3"]);
            }
            other => panic!("expected events, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let listing = EventListing::from_events(vec![event("EONET_1", "Wildfires")], Some("wildfires"));
        assert_eq!(
            listing,
            EventListing::NoResults(NO_RESULTS_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_unmatched_category_yields_single_placeholder() {
        let listing = EventListing::from_events(vec![event("EONET_1", "Floods")], Some("Landslides"));
        assert_eq!(listing.entry_count(), 1);
        assert!(matches!(listing, EventListing::NoResults(_)));
    }

    #[test]
    fn test_empty_feed_without_filter_yields_placeholder() {
        let listing = EventListing::from_events(Vec::new(), None);
        assert!(matches!(listing, EventListing::NoResults(_)));
    }

    #[test]
    fn test_available_categories_are_sorted_and_merged() {
        let categories = available_categories(&[event("EONET_1", "Sea and Lake Ice")]);
        assert_eq!(categories.len(), COMMON_CATEGORIES.len() + 1);
        assert!(categories.contains(&"Sea and Lake Ice".to_string()));
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }
}
