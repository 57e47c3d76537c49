//! `EcoPortal` - server-rendered environmental information site
//!
//! This library aggregates weather, air quality, news, video and natural
//! event feeds and shapes them into display records for the HTML pages.

pub mod api;
pub mod calculator;
pub mod config;
pub mod error;
pub mod forecast;
pub mod logging;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod web;

// Re-export core types for public API
pub use api::ApiClient;
pub use config::EcoConfig;
pub use error::EcoError;
pub use forecast::summarize_days;
pub use models::{DaySummary, ForecastSample};
pub use routes::{AppState, router};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, EcoError>;
