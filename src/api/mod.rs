//! Clients for the upstream REST APIs
//!
//! One shared `reqwest` client with an explicit timeout serves every
//! provider. Each call is made once: non-success statuses, transport
//! failures and undecodable bodies all come back as [`EcoError`] values
//! tagged with the resource and the city or search term they were for.

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::EcoError;
use crate::config::{EcoConfig, EndpointsConfig};

pub mod eonet;
pub mod newsdata;
pub mod openweather;
pub mod youtube;

/// HTTP client shared by all request handlers
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: EndpointsConfig,
}

impl ApiClient {
    /// Create a new API client from the site configuration
    pub fn new(config: &EcoConfig) -> Result<Self, EcoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_seconds.into()))
            .user_agent(config.http.user_agent.as_str())
            .build()
            .map_err(|e| EcoError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoints: config.endpoints.clone(),
        })
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Send a GET request and decode its JSON body
    #[instrument(skip(self, request))]
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &'static str,
        query: &str,
    ) -> Result<T, EcoError> {
        let start_time = Instant::now();

        let response = request.send().await.map_err(|e| {
            let message = error_chain(e);
            warn!("Request for {} failed: {}", resource, message);
            EcoError::transport(resource, query, message)
        })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Upstream returned {} for {}: {}",
                status,
                resource,
                body.chars().take(200).collect::<String>()
            );
            return Err(EcoError::upstream(resource, query, status.as_u16()));
        }

        let parsed = response.json::<T>().await.map_err(|e| {
            let message = error_chain(e);
            error!("Failed to parse {} response: {}", resource, message);
            EcoError::invalid_response(resource, query, message)
        })?;

        info!(
            "Retrieved {} in {:.3}s",
            resource,
            start_time.elapsed().as_secs_f64()
        );

        Ok(parsed)
    }
}

/// Error text with every underlying cause appended, and the request URL
/// (which carries the API key) removed
fn error_chain(error: reqwest::Error) -> String {
    let url = error.url().map(ToString::to_string);
    let error = error.without_url();

    let mut message = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    match url {
        Some(url) if message.contains(&url) => message.replace(&url, "<url>"),
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        assert_eq!(
            ApiClient::url("http://localhost:1234/", "/weather"),
            "http://localhost:1234/weather"
        );
        assert_eq!(
            ApiClient::url("https://newsdata.io/api/1", "news"),
            "https://newsdata.io/api/1/news"
        );
    }

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(ApiClient::new(&EcoConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_connection_failure_keeps_cause_and_drops_key() {
        let client = Client::new();
        let error = client
            .get("http://127.0.0.1:9/weather")
            .query(&[("appid", "secret-key")])
            .send()
            .await
            .unwrap_err();

        let message = error_chain(error);
        assert!(message.starts_with("error sending request: "), "{message}");
        assert!(!message.contains("secret-key"), "{message}");
    }
}
