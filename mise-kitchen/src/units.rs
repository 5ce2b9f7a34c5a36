//! Unit tables for the US customary and metric systems
//!
//! US units carry a factor into millilitres or grams. Metric units carry a
//! factor into cups or ounces. Lookups are case-insensitive except for
//! single-character tokens, where `T` (tablespoon) and `t` (teaspoon) differ.

use mise_core::UnitSystem;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::temperature::is_temperature_unit;

/// Millilitres per US cup
pub const ML_PER_CUP: f64 = 240.0;
/// Grams per avoirdupois ounce
pub const G_PER_OZ: f64 = 28.3495;

/// Metric base a US unit converts into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricBase {
    Milliliter,
    Gram,
}

/// US base a metric unit converts into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsBase {
    Cup,
    Ounce,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsUnitDef {
    pub name: &'static str,
    /// Multiply by this to get `base` units
    pub to_metric: f64,
    pub base: MetricBase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricUnitDef {
    pub name: &'static str,
    /// Multiply by this to get `base` units
    pub to_us: f64,
    pub base: UsBase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Volume,
    Weight,
    Temperature,
}

/// What a unit token measures and which system it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitClass {
    pub kind: UnitKind,
    pub system: UnitSystem,
}

/// Alias table for one family of units
pub struct UnitTable<T> {
    entries: HashMap<&'static str, T>,
}

impl<T: Copy> UnitTable<T> {
    fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    fn register(&mut self, aliases: &[&'static str], def: T) {
        for alias in aliases {
            self.entries.insert(*alias, def);
        }
    }

    /// Resolve a unit token. A single character is tried with its case
    /// intact before the lowercase lookup.
    pub fn get(&self, token: &str) -> Option<T> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if token.chars().count() == 1 {
            if let Some(def) = self.entries.get(token) {
                return Some(*def);
            }
        }
        self.entries.get(token.to_lowercase().as_str()).copied()
    }

    /// All accepted spellings, sorted
    pub fn aliases(&self) -> Vec<&'static str> {
        let mut aliases: Vec<&'static str> = self.entries.keys().copied().collect();
        aliases.sort_unstable();
        aliases
    }
}

pub static US_VOLUME: LazyLock<UnitTable<UsUnitDef>> = LazyLock::new(|| {
    let mut table = UnitTable::new();
    let ml = |name, to_metric| UsUnitDef { name, to_metric, base: MetricBase::Milliliter };

    table.register(&["cup", "cups", "c"], ml("cup", ML_PER_CUP));
    table.register(&["tablespoon", "tablespoons", "tbsp", "tbs", "tb", "T"], ml("tbsp", 14.787));
    table.register(&["teaspoon", "teaspoons", "tsp", "t"], ml("tsp", 4.929));
    table.register(
        &["fluid ounce", "fluid ounces", "fl oz", "fl. oz", "fl.oz", "floz"],
        ml("fl oz", 29.574),
    );
    table.register(&["pint", "pints", "pt"], ml("pint", 473.176));
    table.register(&["quart", "quarts", "qt"], ml("quart", 946.353));
    table.register(&["gallon", "gallons", "gal"], ml("gallon", 3785.41));
    table
});

pub static US_WEIGHT: LazyLock<UnitTable<UsUnitDef>> = LazyLock::new(|| {
    let mut table = UnitTable::new();
    let g = |name, to_metric| UsUnitDef { name, to_metric, base: MetricBase::Gram };

    table.register(&["ounce", "ounces", "oz"], g("oz", G_PER_OZ));
    table.register(&["pound", "pounds", "lb", "lbs", "#"], g("lb", 453.592));
    table
});

pub static METRIC_VOLUME: LazyLock<UnitTable<MetricUnitDef>> = LazyLock::new(|| {
    let mut table = UnitTable::new();
    let cup = |name, to_us| MetricUnitDef { name, to_us, base: UsBase::Cup };

    table.register(
        &["ml", "milliliter", "milliliters", "millilitre", "millilitres"],
        cup("ml", 1.0 / ML_PER_CUP),
    );
    table.register(
        &["l", "L", "liter", "liters", "litre", "litres"],
        cup("L", 1000.0 / ML_PER_CUP),
    );
    table
});

pub static METRIC_WEIGHT: LazyLock<UnitTable<MetricUnitDef>> = LazyLock::new(|| {
    let mut table = UnitTable::new();
    let oz = |name, to_us| MetricUnitDef { name, to_us, base: UsBase::Ounce };

    table.register(&["g", "gram", "grams", "gr"], oz("g", 1.0 / G_PER_OZ));
    table.register(
        &["kg", "kilogram", "kilograms", "kilo", "kilos"],
        oz("kg", 1000.0 / G_PER_OZ),
    );
    table
});

pub fn lookup_us_volume(token: &str) -> Option<UsUnitDef> {
    US_VOLUME.get(token)
}

pub fn lookup_us_weight(token: &str) -> Option<UsUnitDef> {
    US_WEIGHT.get(token)
}

pub fn lookup_metric_volume(token: &str) -> Option<MetricUnitDef> {
    METRIC_VOLUME.get(token)
}

pub fn lookup_metric_weight(token: &str) -> Option<MetricUnitDef> {
    METRIC_WEIGHT.get(token)
}

/// Any US volume or weight unit
pub fn lookup_us(token: &str) -> Option<UsUnitDef> {
    lookup_us_volume(token).or_else(|| lookup_us_weight(token))
}

/// Any metric volume or weight unit
pub fn lookup_metric(token: &str) -> Option<MetricUnitDef> {
    lookup_metric_volume(token).or_else(|| lookup_metric_weight(token))
}

/// Classify a unit token.
///
/// Temperature wins over the tables, so a bare `c` reads as Celsius.
pub fn classify(token: &str) -> Option<UnitClass> {
    if is_temperature_unit(token) {
        let normalized = crate::temperature::normalize_temperature_unit(token);
        let system = if normalized.starts_with('c') || normalized == "degc" {
            UnitSystem::Metric
        } else {
            UnitSystem::Us
        };
        return Some(UnitClass { kind: UnitKind::Temperature, system });
    }

    let class = |kind, system| Some(UnitClass { kind, system });
    if lookup_us_volume(token).is_some() {
        class(UnitKind::Volume, UnitSystem::Us)
    } else if lookup_us_weight(token).is_some() {
        class(UnitKind::Weight, UnitSystem::Us)
    } else if lookup_metric_volume(token).is_some() {
        class(UnitKind::Volume, UnitSystem::Metric)
    } else if lookup_metric_weight(token).is_some() {
        class(UnitKind::Weight, UnitSystem::Metric)
    } else {
        None
    }
}
