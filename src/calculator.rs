//! Carbon footprint calculator
//!
//! Rough monthly estimate in kg of CO2 from four activity inputs.

use serde::Deserialize;

use crate::EcoError;

/// kg CO2 per kWh of electricity
pub const ELECTRICITY_FACTOR: f64 = 0.5;
/// kg CO2 per km travelled by car
pub const TRANSPORT_FACTOR: f64 = 0.2;
/// kg CO2 per kg of meat eaten
pub const MEAT_FACTOR: f64 = 50.0;
/// kg CO2 per hour of flight
pub const FLIGHT_FACTOR: f64 = 0.25;

/// Shown when any field is not a number
pub const INVALID_INPUT_MESSAGE: &str = "Error: Ingresa valores numéricos válidos.";

/// Raw form fields; absent fields count as zero
#[derive(Debug, Default, Deserialize)]
pub struct CalculatorForm {
    pub electrico: Option<String>,
    pub transporte: Option<String>,
    pub carne: Option<String>,
    pub vuelo: Option<String>,
}

impl CalculatorForm {
    /// Total footprint in kg CO2
    pub fn footprint(&self) -> Result<f64, EcoError> {
        let inputs = [
            (&self.electrico, ELECTRICITY_FACTOR),
            (&self.transporte, TRANSPORT_FACTOR),
            (&self.carne, MEAT_FACTOR),
            (&self.vuelo, FLIGHT_FACTOR),
        ];

        inputs.into_iter().try_fold(0.0, |total, (value, factor)| {
            Ok(total + parse_amount(value.as_deref())? * factor)
        })
    }
}

fn parse_amount(value: Option<&str>) -> Result<f64, EcoError> {
    match value {
        None => Ok(0.0),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| EcoError::validation(INVALID_INPUT_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn form(electrico: Option<&str>, transporte: Option<&str>, carne: Option<&str>, vuelo: Option<&str>) -> CalculatorForm {
        CalculatorForm {
            electrico: electrico.map(str::to_string),
            transporte: transporte.map(str::to_string),
            carne: carne.map(str::to_string),
            vuelo: vuelo.map(str::to_string),
        }
    }

    #[rstest]
    #[case(form(Some("100"), Some("50"), Some("2"), Some("4")), 161.0)]
    #[case(form(Some("100"), None, None, None), 50.0)]
    #[case(form(None, None, None, None), 0.0)]
    #[case(form(Some(" 10 "), Some("0"), Some("0.5"), Some("0")), 30.0)]
    fn test_footprint(#[case] form: CalculatorForm, #[case] expected: f64) {
        let total = form.footprint().unwrap();
        assert!((total - expected).abs() < 1e-9, "got {total}");
    }

    #[rstest]
    #[case(form(Some("diez"), None, None, None))]
    #[case(form(None, Some(""), None, None))]
    #[case(form(None, None, None, Some("3,5")))]
    fn test_invalid_input(#[case] form: CalculatorForm) {
        let err = form.footprint().unwrap_err();
        assert_eq!(err.user_message(), INVALID_INPUT_MESSAGE);
    }
}
