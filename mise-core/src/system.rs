//! Measurement systems

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for unit system names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitSystemError {
    #[error("Unknown unit system: {0}")]
    Unknown(String),
}

/// The two measurement systems an amount can be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// US customary (cups, tablespoons, ounces, pounds, Fahrenheit)
    #[default]
    Us,
    /// Metric (ml, L, g, kg, Celsius)
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Us => "us",
            UnitSystem::Metric => "metric",
        }
    }

    /// The other system
    pub fn other(&self) -> UnitSystem {
        match self {
            UnitSystem::Us => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Us,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = UnitSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "us" => Ok(UnitSystem::Us),
            "metric" => Ok(UnitSystem::Metric),
            _ => Err(UnitSystemError::Unknown(s.to_string())),
        }
    }
}
