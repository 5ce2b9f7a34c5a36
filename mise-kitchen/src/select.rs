//! Best display unit for a converted quantity

use std::fmt;

use crate::format::format_number;
use crate::units::{MetricBase, UsBase};

/// A value paired with the unit it should be shown in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayUnit {
    pub value: f64,
    pub unit: &'static str,
}

impl DisplayUnit {
    fn new(value: f64, unit: &'static str) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value, false), self.unit)
    }
}

/// Pick a US unit for a quantity in cups or ounces.
///
/// Volumes step through drops, tsp, tbsp, cups, quarts and gallons.
/// Weights of a pound or more switch to pounds.
pub fn choose_best_us_unit(value: f64, base: UsBase) -> DisplayUnit {
    match base {
        UsBase::Cup => {
            if value < 1.0 / 16.0 {
                let tsp = value * 48.0;
                if tsp < 0.1 {
                    DisplayUnit::new(value * 768.0, "drops")
                } else {
                    DisplayUnit::new(tsp, "tsp")
                }
            } else if value < 0.25 {
                DisplayUnit::new(value * 16.0, "tbsp")
            } else if value < 4.0 {
                DisplayUnit::new(value, if value == 1.0 { "cup" } else { "cups" })
            } else if value < 16.0 {
                let quarts = value / 4.0;
                DisplayUnit::new(quarts, if quarts == 1.0 { "quart" } else { "quarts" })
            } else {
                let gallons = value / 16.0;
                DisplayUnit::new(gallons, if gallons == 1.0 { "gallon" } else { "gallons" })
            }
        }
        UsBase::Ounce => {
            if value < 16.0 {
                DisplayUnit::new(value, "oz")
            } else {
                let pounds = value / 16.0;
                DisplayUnit::new(pounds, if pounds == 1.0 { "lb" } else { "lbs" })
            }
        }
    }
}

/// Pick a metric unit for a quantity in millilitres or grams
pub fn choose_best_metric_unit(value: f64, base: MetricBase) -> DisplayUnit {
    match base {
        MetricBase::Milliliter if value >= 1000.0 => DisplayUnit::new(value / 1000.0, "L"),
        MetricBase::Milliliter => DisplayUnit::new(value, "ml"),
        MetricBase::Gram if value >= 1000.0 => DisplayUnit::new(value / 1000.0, "kg"),
        MetricBase::Gram => DisplayUnit::new(value, "g"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us(value: f64, base: UsBase) -> (String, &'static str) {
        let d = choose_best_us_unit(value, base);
        (format_number(d.value, false), d.unit)
    }

    #[test]
    fn test_small_volumes() {
        assert_eq!(choose_best_us_unit(0.001, UsBase::Cup).unit, "drops");
        assert_eq!(us(1.0 / 48.0, UsBase::Cup), ("1".to_string(), "tsp"));
        assert_eq!(us(1.0 / 8.0, UsBase::Cup), ("2".to_string(), "tbsp"));
    }

    #[test]
    fn test_cups_and_up() {
        assert_eq!(us(1.0, UsBase::Cup), ("1".to_string(), "cup"));
        assert_eq!(us(2.5, UsBase::Cup), ("2½".to_string(), "cups"));
        assert_eq!(us(4.0, UsBase::Cup), ("1".to_string(), "quart"));
        assert_eq!(us(6.0, UsBase::Cup), ("1½".to_string(), "quarts"));
        assert_eq!(us(16.0, UsBase::Cup), ("1".to_string(), "gallon"));
        assert_eq!(us(40.0, UsBase::Cup), ("2½".to_string(), "gallons"));
    }

    #[test]
    fn test_weights() {
        assert_eq!(us(8.0, UsBase::Ounce), ("8".to_string(), "oz"));
        assert_eq!(us(16.0, UsBase::Ounce), ("1".to_string(), "lb"));
        assert_eq!(us(24.0, UsBase::Ounce), ("1½".to_string(), "lbs"));
    }

    #[test]
    fn test_metric_thresholds() {
        assert_eq!(choose_best_metric_unit(999.0, MetricBase::Milliliter).to_string(), "999 ml");
        assert_eq!(choose_best_metric_unit(1000.0, MetricBase::Milliliter).to_string(), "1 L");
        assert_eq!(choose_best_metric_unit(1500.0, MetricBase::Gram).to_string(), "1½ kg");
        assert_eq!(choose_best_metric_unit(250.0, MetricBase::Gram).to_string(), "250 g");
    }
}
