//! Air quality model and the AQI tier table

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Human-readable tier for an AQI value
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct AqiTier {
    /// Tier name (e.g. "Moderada")
    pub level: &'static str,
    /// Severity color class used by the page styling
    pub color: &'static str,
    /// Health guidance for the tier
    pub description: &'static str,
}

/// Pollutant concentrations in μg/m³; pollutants the provider omits are 0
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct Pollutants {
    #[serde(default)]
    pub co: f64,
    #[serde(default)]
    pub no: f64,
    #[serde(default)]
    pub no2: f64,
    #[serde(default)]
    pub o3: f64,
    #[serde(default)]
    pub so2: f64,
    #[serde(default)]
    pub pm2_5: f64,
    #[serde(default)]
    pub pm10: f64,
    #[serde(default)]
    pub nh3: f64,
}

/// Everything the air quality page displays for one city
#[derive(Debug, Serialize, Clone)]
pub struct AirQualityReport {
    pub city: String,
    /// Provider index, 1 (good) to 5 (very poor)
    pub aqi: u8,
    pub tier: AqiTier,
    pub pollutants: Pollutants,
    pub coordinates: Coordinates,
}

const TIERS: [AqiTier; 5] = [
    AqiTier {
        level: "Buena",
        color: "success",
        description: "La calidad del aire es satisfactoria y no representa riesgo para la salud.",
    },
    AqiTier {
        level: "Aceptable",
        color: "warning",
        description: "La calidad del aire es aceptable. Sin embargo, puede haber un riesgo moderado para la salud de un número muy pequeño de personas.",
    },
    AqiTier {
        level: "Moderada",
        color: "warning",
        description: "Miembros de grupos sensibles pueden experimentar efectos en la salud. El público en general no debería verse afectado.",
    },
    AqiTier {
        level: "Mala",
        color: "danger",
        description: "Todos pueden comenzar a experimentar efectos en la salud; miembros de grupos sensibles pueden experimentar efectos más graves.",
    },
    AqiTier {
        level: "Muy Mala",
        color: "danger",
        description: "Advertencia de salud: todos pueden experimentar efectos más graves en la salud.",
    },
];

const UNKNOWN_TIER: AqiTier = AqiTier {
    level: "Desconocido",
    color: "secondary",
    description: "No se pudo determinar la calidad del aire.",
};

impl AqiTier {
    /// Look up the tier for an AQI value; anything outside 1-5 is unknown
    #[must_use]
    pub fn for_index(aqi: u8) -> Self {
        match aqi {
            1..=5 => TIERS[usize::from(aqi - 1)],
            _ => UNKNOWN_TIER,
        }
    }

    /// Whether the index fell outside the known scale
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == UNKNOWN_TIER
    }
}

impl AirQualityReport {
    #[must_use]
    pub fn new(city: String, aqi: u8, pollutants: Pollutants, coordinates: Coordinates) -> Self {
        Self {
            city,
            aqi,
            tier: AqiTier::for_index(aqi),
            pollutants,
            coordinates,
        }
    }
}
