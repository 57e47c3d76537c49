//! Configuration management for the `EcoPortal` site
//!
//! Handles loading settings from an optional TOML file and `ECOPORTAL_*`
//! environment variables, plus the upstream API credentials which are read
//! from their well-known plain environment variables.

use crate::EcoError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the weather provider key
pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
/// Environment variable holding the video platform key
pub const YOUTUBE_API_KEY: &str = "YOUTUBE_API_KEY";
/// Environment variable holding the news provider key
pub const NEWSDATA_API_KEY: &str = "NEWSDATA_API_KEY";
/// Environment variable holding the (optional) maps embed key
pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

/// Root configuration structure for the `EcoPortal` site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcoConfig {
    /// Inbound server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Outbound HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Upstream API base URLs
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    /// API credentials, never read from the config file
    #[serde(skip)]
    pub credentials: Credentials,
}

/// Inbound server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for handling one inbound request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Outbound HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds, applied to every upstream call
    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Upstream API base URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_openweather_url")]
    pub openweather: String,
    #[serde(default = "default_youtube_url")]
    pub youtube: String,
    #[serde(default = "default_newsdata_url")]
    pub newsdata: String,
    #[serde(default = "default_eonet_url")]
    pub eonet: String,
}

/// API credentials loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub openweather: Option<String>,
    pub youtube: Option<String>,
    pub newsdata: Option<String>,
    pub google_maps: Option<String>,
}

/// Credentials a route may require before making upstream calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    OpenWeather,
    YouTube,
    NewsData,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u32 {
    30
}

fn default_http_timeout() -> u32 {
    10
}

fn default_user_agent() -> String {
    format!("EcoPortal/{}", crate::VERSION)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_openweather_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_youtube_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_newsdata_url() -> String {
    "https://newsdata.io/api/1".to_string()
}

fn default_eonet_url() -> String {
    "https://eonet.gsfc.nasa.gov/api/v2.1".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            openweather: default_openweather_url(),
            youtube: default_youtube_url(),
            newsdata: default_newsdata_url(),
            eonet: default_eonet_url(),
        }
    }
}

impl Credential {
    /// Name of the environment variable the credential is read from
    #[must_use]
    pub fn env_var(self) -> &'static str {
        match self {
            Credential::OpenWeather => OPENWEATHER_API_KEY,
            Credential::YouTube => YOUTUBE_API_KEY,
            Credential::NewsData => NEWSDATA_API_KEY,
        }
    }

    /// Plain-text message shown when the credential is absent
    #[must_use]
    pub fn missing_message(self) -> String {
        let provider = match self {
            Credential::OpenWeather => "",
            Credential::YouTube => " de YouTube",
            Credential::NewsData => " de NewsData",
        };
        format!(
            "Error: API key{provider} no configurada. Establece la variable de entorno {}.",
            self.env_var()
        )
    }
}

impl Credentials {
    /// Read credentials from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup; empty values count as absent
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            openweather: read(OPENWEATHER_API_KEY),
            youtube: read(YOUTUBE_API_KEY),
            newsdata: read(NEWSDATA_API_KEY),
            google_maps: read(GOOGLE_MAPS_API_KEY),
        }
    }

    /// Return the credential or the configuration error to show instead
    pub fn require(&self, credential: Credential) -> std::result::Result<&str, EcoError> {
        let value = match credential {
            Credential::OpenWeather => self.openweather.as_deref(),
            Credential::YouTube => self.youtube.as_deref(),
            Credential::NewsData => self.newsdata.as_deref(),
        };
        value.ok_or_else(|| EcoError::config(credential.missing_message()))
    }
}

impl EcoConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let path = std::env::var("ECOPORTAL_CONFIG").ok().map(PathBuf::from);
        Self::load_from_path(path)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("ecoportal.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. ECOPORTAL_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("ECOPORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: EcoConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;
        config.credentials = Credentials::from_env();

        Ok(config)
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.port == 0 {
            self.server.port = default_port();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.http.timeout_seconds == 0 {
            self.http.timeout_seconds = default_http_timeout();
        }
        if self.http.user_agent.is_empty() {
            self.http.user_agent = default_user_agent();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Address the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.http.timeout_seconds > 120 {
            return Err(EcoError::config("HTTP client timeout cannot exceed 120 seconds").into());
        }

        if self.server.request_timeout_seconds > 300 {
            return Err(EcoError::config("Request timeout cannot exceed 300 seconds").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(EcoError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(EcoError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let endpoints = [
            ("openweather", &self.endpoints.openweather),
            ("youtube", &self.endpoints.youtube),
            ("newsdata", &self.endpoints.newsdata),
            ("eonet", &self.endpoints.eonet),
        ];
        for (name, url) in endpoints {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(EcoError::config(format!(
                    "Endpoint '{name}' must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
