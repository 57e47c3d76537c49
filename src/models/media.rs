//! Video and news display records

use serde::{Deserialize, Serialize};

/// Image shown for articles without one
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Sin+Imagen";

/// A video search result
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

/// A news search result with display defaults applied
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
    pub published: String,
}

impl Video {
    /// Link to watch the video on the platform
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

impl NewsArticle {
    /// Apply the display defaults for fields the provider left out or null
    #[must_use]
    pub fn with_defaults(
        title: Option<String>,
        description: Option<String>,
        link: Option<String>,
        image_url: Option<String>,
        published: Option<String>,
    ) -> Self {
        fn or(value: Option<String>, fallback: &str) -> String {
            value
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        }

        Self {
            title: or(title, "Sin título"),
            description: or(description, "Sin descripción"),
            link: or(link, "#"),
            image_url: or(image_url, PLACEHOLDER_IMAGE),
            published: or(published, "Fecha desconocida"),
        }
    }
}
