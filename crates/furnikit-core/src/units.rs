//! Unit conversion utilities
//!
//! The engine works in centimeters throughout. This module handles
//! conversion between centimeters and millimeters for boundary layers
//! that accept either, plus display formatting and parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length units accepted at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Centimeters (canonical unit of the engine)
    Cm,
    /// Millimeters
    Mm,
}

impl Default for Units {
    fn default() -> Self {
        Self::Cm
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cm => write!(f, "cm"),
            Self::Mm => write!(f, "mm"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(Self::Cm),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Mm),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

impl Units {
    /// Convert a value from one unit to another
    ///
    /// # Arguments
    /// * `value` - The value to convert
    /// * `from` - The unit of the input value
    /// * `to` - The target unit
    pub fn convert(value: f64, from: Units, to: Units) -> f64 {
        if from == to {
            return value;
        }

        match (from, to) {
            (Units::Cm, Units::Mm) => value * 10.0,
            (Units::Mm, Units::Cm) => value / 10.0,
            _ => value,
        }
    }
}

/// Format a length value for display
///
/// * `value_cm` - Value in centimeters
/// * `units` - Target display units
pub fn format_length(value_cm: f64, units: Units) -> String {
    match units {
        Units::Cm => format!("{:.1}", value_cm),
        Units::Mm => format!("{:.0}", value_cm * 10.0),
    }
}

/// Parse a length string to centimeters
///
/// * `input` - String to parse
/// * `units` - Assumed units of the input
pub fn parse_length(input: &str, units: Units) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let value = input.parse::<f64>().map_err(|e| e.to_string())?;

    match units {
        Units::Cm => Ok(value),
        Units::Mm => Ok(value / 10.0),
    }
}

/// Get the unit label for the given units ("cm" or "mm")
pub fn get_unit_label(units: Units) -> &'static str {
    match units {
        Units::Cm => "cm",
        Units::Mm => "mm",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_roundtrip() {
        assert_eq!(format_length(10.5, Units::Cm), "10.5");
        assert_eq!(parse_length("10.5", Units::Cm).unwrap(), 10.5);
    }

    #[test]
    fn test_mm_conversion() {
        assert_eq!(format_length(10.5, Units::Mm), "105");
        assert_eq!(parse_length("105", Units::Mm).unwrap(), 10.5);
        assert_eq!(Units::convert(25.0, Units::Cm, Units::Mm), 250.0);
        assert_eq!(Units::convert(250.0, Units::Mm, Units::Cm), 25.0);
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(Units::convert(42.0, Units::Cm, Units::Cm), 42.0);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(get_unit_label(Units::Cm), "cm");
        assert_eq!(get_unit_label(Units::Mm), "mm");
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_length("abc", Units::Cm).is_err());
        assert_eq!(parse_length("", Units::Cm).unwrap(), 0.0);
        assert_eq!(parse_length("  42  ", Units::Cm).unwrap(), 42.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mm".parse::<Units>().unwrap(), Units::Mm);
        assert_eq!("Centimeters".parse::<Units>().unwrap(), Units::Cm);
        assert!("furlong".parse::<Units>().is_err());
    }
}
