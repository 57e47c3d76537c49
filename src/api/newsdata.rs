//! News provider search

use tracing::{info, instrument};

use super::ApiClient;
use crate::EcoError;
use crate::models::NewsArticle;

/// Category used when the visitor picks none
pub const DEFAULT_NEWS_CATEGORY: &str = "medio ambiente";
/// Number of articles requested
pub const NEWS_RESULTS: u8 = 10;

const NEWS: &str = "noticias";

impl ApiClient {
    /// Search Spanish-language news for a category term
    #[instrument(skip(self, api_key))]
    pub async fn search_news(&self, api_key: &str, category: &str) -> Result<Vec<NewsArticle>, EcoError> {
        let request = self
            .client
            .get(Self::url(&self.endpoints.newsdata, "news"))
            .query(&[
                ("apikey", api_key.to_string()),
                ("q", category.to_string()),
                ("language", "es".to_string()),
                ("size", NEWS_RESULTS.to_string()),
            ]);
        let response: wire::NewsResponse = self.send_json(request, NEWS, category).await?;

        let articles: Vec<NewsArticle> = response
            .results
            .into_iter()
            .map(|article| {
                NewsArticle::with_defaults(
                    article.title,
                    article.description,
                    article.link,
                    article.image_url,
                    article.pub_date,
                )
            })
            .collect();
        info!("Processed {} news articles for '{}'", articles.len(), category);
        Ok(articles)
    }
}

/// News search response structures
mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct NewsResponse {
        #[serde(default)]
        pub results: Vec<Article>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Article {
        pub title: Option<String>,
        pub description: Option<String>,
        pub link: Option<String>,
        pub image_url: Option<String>,
        #[serde(rename = "pubDate")]
        pub pub_date: Option<String>,
    }
}
