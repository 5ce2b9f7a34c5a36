//! Oven temperatures

use mise_core::UnitSystem;

const TEMPERATURE_UNITS: [&str; 6] = ["f", "fahrenheit", "degf", "c", "celsius", "degc"];

/// Lowercase and drop degree signs, whitespace and dots: "°F" -> "f", "deg. C" -> "degc"
pub fn normalize_temperature_unit(token: &str) -> String {
    token.chars()
        .filter(|c| *c != '°' && *c != '.' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_temperature_unit(token: &str) -> bool {
    let normalized = normalize_temperature_unit(token);
    TEMPERATURE_UNITS.contains(&normalized.as_str())
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Round half toward positive infinity (2.5 -> 3, -2.5 -> -2)
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Render a temperature in the target system, rounded to whole degrees.
/// The value is taken to be in the other system.
pub fn convert_temperature(value: f64, to: UnitSystem) -> String {
    match to {
        UnitSystem::Metric => format!("{}°C", round_half_up(fahrenheit_to_celsius(value))),
        UnitSystem::Us => format!("{}°F", round_half_up(celsius_to_fahrenheit(value))),
    }
}
