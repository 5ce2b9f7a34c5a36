//! Conversion between US customary and metric amounts
//!
//! Conversion is best-effort: anything that cannot be parsed or has no
//! known unit comes back exactly as it went in.

use mise_core::{MiseError, UnitSystem, Value};
use mise_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin};
use tracing::trace;

use crate::helpers::{extract_text, extract_unit_system, require_args};
use crate::parse::{extract_unit, parse_quantity};
use crate::select::{choose_best_metric_unit, choose_best_us_unit};
use crate::temperature::{convert_temperature, is_temperature_unit, normalize_temperature_unit};
use crate::units::{lookup_metric, lookup_us};

/// Convert an amount string from one unit system to the other.
///
/// ```
/// use mise_kitchen::{convert_amount, UnitSystem};
///
/// assert_eq!(convert_amount("1 cup", UnitSystem::Us, UnitSystem::Metric), "240 ml");
/// assert_eq!(convert_amount("350°F", UnitSystem::Us, UnitSystem::Metric), "177°C");
/// assert_eq!(convert_amount("2 eggs", UnitSystem::Us, UnitSystem::Metric), "2 eggs");
/// ```
pub fn convert_amount(amount: &str, from: UnitSystem, to: UnitSystem) -> String {
    if from == to || amount.trim().is_empty() {
        return amount.to_string();
    }

    let quantity = match parse_quantity(amount) {
        Some(q) if q.magnitude > 0.0 => q,
        _ => {
            trace!(amount, "no positive quantity, leaving as is");
            return amount.to_string();
        }
    };

    if is_temperature_unit(&quantity.unit) {
        return convert_temperature(quantity.magnitude, to);
    }

    let converted = match to {
        UnitSystem::Metric => lookup_us(&quantity.unit)
            .map(|def| choose_best_metric_unit(quantity.magnitude * def.to_metric, def.base)),
        UnitSystem::Us => lookup_metric(&quantity.unit)
            .map(|def| choose_best_us_unit(quantity.magnitude * def.to_us, def.base)),
    };

    match converted {
        Some(display) => display.to_string(),
        None => {
            trace!(amount, unit = %quantity.unit, %from, %to, "unit not in conversion tables");
            amount.to_string()
        }
    }
}

/// Whether the amount ends in a US volume, weight or Fahrenheit unit.
/// The trailing unit is lowercased before lookup.
pub fn contains_us_units(amount: &str) -> bool {
    let Some(unit) = extract_unit(amount) else {
        return false;
    };
    let unit = unit.to_lowercase();
    lookup_us(&unit).is_some()
        || matches!(normalize_temperature_unit(&unit).as_str(), "f" | "fahrenheit" | "degf")
}

/// Whether the amount ends in a metric volume, weight or Celsius unit
pub fn contains_metric_units(amount: &str) -> bool {
    let Some(unit) = extract_unit(amount) else {
        return false;
    };
    let unit = unit.to_lowercase();
    lookup_metric(&unit).is_some()
        || matches!(normalize_temperature_unit(&unit).as_str(), "c" | "celsius" | "degc")
}

// ============ convert_amount ============

pub struct ConvertAmount;

static CONVERT_AMOUNT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("amount", "Text", "Amount with unit, e.g. \"1 1/2 cups\""),
    ArgMeta::required("from", "Text", "Source system: \"us\" or \"metric\""),
    ArgMeta::required("to", "Text", "Target system: \"us\" or \"metric\""),
];

static CONVERT_AMOUNT_EXAMPLES: [&str; 4] = [
    "convert_amount(\"1 cup\", \"us\", \"metric\") -> \"240 ml\"",
    "convert_amount(\"500 ml\", \"metric\", \"us\") -> \"2.1 cups\"",
    "convert_amount(\"350°F\", \"us\", \"metric\") -> \"177°C\"",
    "convert_amount(\"2 eggs\", \"us\", \"metric\") -> \"2 eggs\"",
];

static CONVERT_AMOUNT_RELATED: [&str; 3] = ["contains_us_units", "contains_metric_units", "adjust_amount"];

impl FunctionPlugin for ConvertAmount {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_amount",
            description: "Convert an ingredient amount between US and metric units",
            usage: "convert_amount(amount, from, to)",
            args: &CONVERT_AMOUNT_ARGS,
            returns: "Text",
            examples: &CONVERT_AMOUNT_EXAMPLES,
            category: "kitchen",
            related: &CONVERT_AMOUNT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let run = || -> Result<String, MiseError> {
            require_args(args, 3, "convert_amount")?;
            let amount = extract_text(&args[0], "convert_amount", "amount")?;
            let from = extract_unit_system(&args[1], "convert_amount", "from")?;
            let to = extract_unit_system(&args[2], "convert_amount", "to")?;
            Ok(convert_amount(&amount, from, to))
        };

        match run() {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ contains_us_units / contains_metric_units ============

pub struct ContainsUsUnits;

static CONTAINS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("amount", "Text", "Amount with unit"),
];

static CONTAINS_US_EXAMPLES: [&str; 3] = [
    "contains_us_units(\"2 cups\") -> true",
    "contains_us_units(\"350°F\") -> true",
    "contains_us_units(\"500 g\") -> false",
];

static CONTAINS_US_RELATED: [&str; 2] = ["contains_metric_units", "convert_amount"];

impl FunctionPlugin for ContainsUsUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "contains_us_units",
            description: "Check whether an amount ends in a US customary unit",
            usage: "contains_us_units(amount)",
            args: &CONTAINS_ARGS,
            returns: "Bool",
            examples: &CONTAINS_US_EXAMPLES,
            category: "kitchen",
            related: &CONTAINS_US_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(MiseError::arg_count("contains_us_units", 1, 0));
        }
        match extract_text(&args[0], "contains_us_units", "amount") {
            Ok(amount) => Value::Bool(contains_us_units(&amount)),
            Err(e) => Value::Error(e),
        }
    }
}

pub struct ContainsMetricUnits;

static CONTAINS_METRIC_EXAMPLES: [&str; 3] = [
    "contains_metric_units(\"250 ml\") -> true",
    "contains_metric_units(\"180°C\") -> true",
    "contains_metric_units(\"1 cup\") -> false",
];

static CONTAINS_METRIC_RELATED: [&str; 2] = ["contains_us_units", "convert_amount"];

impl FunctionPlugin for ContainsMetricUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "contains_metric_units",
            description: "Check whether an amount ends in a metric unit",
            usage: "contains_metric_units(amount)",
            args: &CONTAINS_ARGS,
            returns: "Bool",
            examples: &CONTAINS_METRIC_EXAMPLES,
            category: "kitchen",
            related: &CONTAINS_METRIC_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(MiseError::arg_count("contains_metric_units", 1, 0));
        }
        match extract_text(&args[0], "contains_metric_units", "amount") {
            Ok(amount) => Value::Bool(contains_metric_units(&amount)),
            Err(e) => Value::Error(e),
        }
    }
}
