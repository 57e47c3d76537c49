//! Forecast sample and per-day summary models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One 3-hour reading from the 5-day forecast feed
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastSample {
    /// Start of the 3-hour slot, in the provider's (UTC) clock
    pub timestamp: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Provider description, as returned (not capitalized)
    pub description: String,
    /// Provider icon code
    pub icon: String,
}

/// Aggregated view of one calendar day of forecast samples
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Localized day-of-week name
    pub day_name: String,
    /// Day and month, "dd/mm"
    pub date_short: String,
    pub min_temp: f64,
    pub max_temp: f64,
    /// Most frequent description of the day, capitalized
    pub description: String,
    /// Icon of the day's first sample
    pub icon: String,
}

impl ForecastSample {
    /// Calendar date the sample belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl DaySummary {
    /// Format the temperature range with unit
    #[must_use]
    pub fn format_range(&self) -> String {
        format!("{:.0}°C / {:.0}°C", self.min_temp, self.max_temp)
    }
}
