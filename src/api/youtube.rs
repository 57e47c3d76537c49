//! Video platform search

use tracing::instrument;

use super::ApiClient;
use crate::EcoError;
use crate::models::Video;

/// Fixed search term for the videos page
pub const VIDEO_QUERY: &str = "medio ambiente";
/// Number of videos requested
pub const VIDEO_RESULTS: u8 = 10;

const VIDEOS: &str = "videos";

impl ApiClient {
    /// Search the video platform for environmental videos
    #[instrument(skip(self, api_key))]
    pub async fn search_videos(&self, api_key: &str) -> Result<Vec<Video>, EcoError> {
        let request = self
            .client
            .get(Self::url(&self.endpoints.youtube, "search"))
            .query(&[
                ("q", VIDEO_QUERY.to_string()),
                ("part", "snippet".to_string()),
                ("type", "video".to_string()),
                ("maxResults", VIDEO_RESULTS.to_string()),
                ("key", api_key.to_string()),
            ]);
        let response: wire::SearchResponse = self.send_json(request, VIDEOS, VIDEO_QUERY).await?;

        Ok(response.items.into_iter().filter_map(Video::from_item).collect())
    }
}

impl Video {
    /// Items without a video id (channels, playlists) are dropped
    fn from_item(item: wire::SearchItem) -> Option<Self> {
        let id = item.id.video_id?;
        let snippet = item.snippet;
        Some(Self {
            id,
            title: snippet.title,
            description: snippet.description,
            thumbnail: snippet
                .thumbnails
                .default
                .map(|thumbnail| thumbnail.url)
                .unwrap_or_default(),
        })
    }
}

/// Video search response structures
mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        #[serde(default)]
        pub items: Vec<SearchItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchItem {
        pub id: ItemId,
        pub snippet: Snippet,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ItemId {
        pub video_id: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Snippet {
        pub title: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub thumbnails: Thumbnails,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Thumbnails {
        pub default: Option<Thumbnail>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Thumbnail {
        pub url: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_items_map_to_videos() {
        let response: wire::SearchResponse = serde_json::from_value(serde_json::json!({
            "items": [
                {
                    "id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"},
                    "snippet": {
                        "title": "Cambio climático explicado",
                        "description": "Documental",
                        "thumbnails": {"default": {"url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg"}}
                    }
                },
                {
                    "id": {"kind": "youtube#channel", "channelId": "UC123"},
                    "snippet": {"title": "Canal", "description": ""}
                }
            ]
        }))
        .unwrap();

        let videos: Vec<Video> = response.items.into_iter().filter_map(Video::from_item).collect();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "dQw4w9WgXcQ");
        assert_eq!(videos[0].title, "Cambio climático explicado");
        assert!(videos[0].thumbnail.ends_with("default.jpg"));
    }
}
