//! Serving-based scaling of ingredient amounts

use mise_core::{MiseError, UnitSystem, Value};
use mise_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::convert::{contains_metric_units, contains_us_units, convert_amount};
use crate::format::format_scaled_number;
use crate::helpers::{
    extract_number, extract_optional_number, extract_optional_unit_system, extract_text,
    require_args,
};
use crate::parse::{parse_number, split_amount};
use crate::temperature::round_half_up;

/// Parse `input` and multiply it. `None` when the input has no readable
/// number or the product is not finite.
pub fn scale_number(input: &str, multiplier: f64) -> Option<f64> {
    parse_number(input)
        .map(|value| value * multiplier)
        .filter(|scaled| scaled.is_finite())
}

/// Scale the leading quantity of an amount, keeping whatever text follows it.
///
/// "1 1/2 cups" at 2x becomes "3 cups". Amounts without a readable number
/// are returned untouched.
pub fn scale_amount(amount: &str, multiplier: f64) -> String {
    if multiplier == 1.0 || amount.trim().is_empty() {
        return amount.to_string();
    }

    let Some((number, rest)) = split_amount(amount) else {
        trace!(amount, "no numeric prefix to scale");
        return amount.to_string();
    };

    let Some(scaled) = scale_number(number, multiplier) else {
        trace!(amount, number, "numeric prefix did not parse");
        return amount.to_string();
    };

    let formatted = format_scaled_number(scaled);
    if rest.is_empty() {
        formatted
    } else {
        format!("{} {}", formatted, rest)
    }
}

/// Scale an amount, then show it in the reader's unit system
pub fn adjust_amount(amount: &str, multiplier: f64, target: UnitSystem) -> String {
    let scaled = scale_amount(amount, multiplier);
    match target {
        UnitSystem::Metric if contains_us_units(&scaled) => {
            convert_amount(&scaled, UnitSystem::Us, UnitSystem::Metric)
        }
        UnitSystem::Us if contains_metric_units(&scaled) => {
            convert_amount(&scaled, UnitSystem::Metric, UnitSystem::Us)
        }
        _ => scaled,
    }
}

/// Serving count after scaling, rounded half up
pub fn adjusted_servings(servings: u32, multiplier: f64) -> u32 {
    let adjusted = round_half_up(servings as f64 * multiplier);
    if adjusted.is_finite() && adjusted > 0.0 {
        adjusted as u32
    } else {
        0
    }
}

/// Multiplier applied to every ingredient, kept within half to ten times
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct ServingMultiplier(f64);

impl ServingMultiplier {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 10.0;
    pub const STEP: f64 = 0.5;

    /// Clamp into range; non-finite values reset to 1
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self::default()
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn increase(&mut self) {
        self.0 = (self.0 + Self::STEP).min(Self::MAX);
    }

    pub fn decrease(&mut self) {
        self.0 = (self.0 - Self::STEP).max(Self::MIN);
    }

    pub fn can_increase(self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_decrease(self) -> bool {
        self.0 > Self::MIN
    }

    pub fn is_unscaled(self) -> bool {
        self.0 == 1.0
    }
}

impl Default for ServingMultiplier {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f64> for ServingMultiplier {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<ServingMultiplier> for f64 {
    fn from(m: ServingMultiplier) -> f64 {
        m.0
    }
}

// ============ scale_number ============

pub struct ScaleNumber;

static SCALE_NUMBER_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("input", "Text", "Number as written: \"1 1/2\", \"¾\", \"2-3\""),
    ArgMeta::required("multiplier", "Number", "Scale factor"),
];

static SCALE_NUMBER_EXAMPLES: [&str; 3] = [
    "scale_number(\"1 1/2\", 2) -> 3",
    "scale_number(\"2/3\", 3) -> 2",
    "scale_number(\"abc\", 2) -> null",
];

static SCALE_NUMBER_RELATED: [&str; 2] = ["format_scaled_number", "scale_amount"];

impl FunctionPlugin for ScaleNumber {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "scale_number",
            description: "Parse a written quantity and multiply it",
            usage: "scale_number(input, multiplier)",
            args: &SCALE_NUMBER_ARGS,
            returns: "Number or Null",
            examples: &SCALE_NUMBER_EXAMPLES,
            category: "kitchen",
            related: &SCALE_NUMBER_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.len() < 2 {
            return Value::Error(MiseError::arg_count("scale_number", 2, args.len()));
        }

        let input = match extract_text(&args[0], "scale_number", "input") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let multiplier = match extract_number(&args[1], "scale_number", "multiplier") {
            Ok(n) => n,
            Err(e) => return Value::Error(e),
        };

        scale_number(&input, multiplier).into()
    }
}

// ============ format_scaled_number ============

pub struct FormatScaledNumber;

static FORMAT_SCALED_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("value", "Number", "Quantity to display"),
];

static FORMAT_SCALED_EXAMPLES: [&str; 4] = [
    "format_scaled_number(1.5) -> \"1½\"",
    "format_scaled_number(0.333) -> \"⅓\"",
    "format_scaled_number(453.592) -> \"453.6\"",
    "format_scaled_number(12500) -> \"12.5k\"",
];

static FORMAT_SCALED_RELATED: [&str; 1] = ["scale_number"];

impl FunctionPlugin for FormatScaledNumber {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "format_scaled_number",
            description: "Render a quantity with kitchen fractions",
            usage: "format_scaled_number(value)",
            args: &FORMAT_SCALED_ARGS,
            returns: "Text",
            examples: &FORMAT_SCALED_EXAMPLES,
            category: "kitchen",
            related: &FORMAT_SCALED_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(MiseError::arg_count("format_scaled_number", 1, 0));
        }
        match extract_number(&args[0], "format_scaled_number", "value") {
            Ok(n) => Value::Text(format_scaled_number(n)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ scale_amount ============

pub struct ScaleAmount;

static SCALE_AMOUNT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("amount", "Text", "Ingredient amount, e.g. \"1 1/2 cups\""),
    ArgMeta::optional("multiplier", "Number", "Scale factor", "current serving multiplier"),
];

static SCALE_AMOUNT_EXAMPLES: [&str; 3] = [
    "scale_amount(\"1 1/2 cups\", 2) -> \"3 cups\"",
    "scale_amount(\"½ tsp\", 0.5) -> \"¼ tsp\"",
    "scale_amount(\"salt to taste\", 2) -> \"salt to taste\"",
];

static SCALE_AMOUNT_RELATED: [&str; 2] = ["scale_number", "adjust_amount"];

impl FunctionPlugin for ScaleAmount {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "scale_amount",
            description: "Scale the quantity at the start of an ingredient amount",
            usage: "scale_amount(amount, [multiplier])",
            args: &SCALE_AMOUNT_ARGS,
            returns: "Text",
            examples: &SCALE_AMOUNT_EXAMPLES,
            category: "kitchen",
            related: &SCALE_AMOUNT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let run = || -> Result<String, MiseError> {
            require_args(args, 1, "scale_amount")?;
            let amount = extract_text(&args[0], "scale_amount", "amount")?;
            let multiplier = extract_optional_number(args, 1, "scale_amount", "multiplier")?
                .unwrap_or_else(|| ctx.serving_multiplier());
            Ok(scale_amount(&amount, multiplier))
        };

        match run() {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ adjust_amount ============

pub struct AdjustAmount;

static ADJUST_AMOUNT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("amount", "Text", "Ingredient amount as written in the recipe"),
    ArgMeta::optional("multiplier", "Number", "Scale factor", "current serving multiplier"),
    ArgMeta::optional("system", "Text", "Display system: \"us\" or \"metric\"", "current unit system"),
];

static ADJUST_AMOUNT_EXAMPLES: [&str; 3] = [
    "adjust_amount(\"1 cup\", 2, \"metric\") -> \"480 ml\"",
    "adjust_amount(\"250 g\", 1, \"us\") -> \"8.8 oz\"",
    "adjust_amount(\"2 eggs\", 1.5, \"metric\") -> \"3 eggs\"",
];

static ADJUST_AMOUNT_RELATED: [&str; 2] = ["scale_amount", "convert_amount"];

impl FunctionPlugin for AdjustAmount {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "adjust_amount",
            description: "Scale an amount and show it in the chosen unit system",
            usage: "adjust_amount(amount, [multiplier], [system])",
            args: &ADJUST_AMOUNT_ARGS,
            returns: "Text",
            examples: &ADJUST_AMOUNT_EXAMPLES,
            category: "kitchen",
            related: &ADJUST_AMOUNT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let run = || -> Result<String, MiseError> {
            require_args(args, 1, "adjust_amount")?;
            let amount = extract_text(&args[0], "adjust_amount", "amount")?;
            let multiplier = extract_optional_number(args, 1, "adjust_amount", "multiplier")?
                .unwrap_or_else(|| ctx.serving_multiplier());
            let system = extract_optional_unit_system(args, 2, "adjust_amount", "system")?
                .unwrap_or_else(|| ctx.unit_system());
            Ok(adjust_amount(&amount, multiplier, system))
        };

        match run() {
            Ok(s) => Value::Text(s),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ adjusted_servings ============

pub struct AdjustedServings;

static ADJUSTED_SERVINGS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("servings", "Number", "Servings the recipe makes"),
    ArgMeta::optional("multiplier", "Number", "Scale factor", "current serving multiplier"),
];

static ADJUSTED_SERVINGS_EXAMPLES: [&str; 2] = [
    "adjusted_servings(4, 1.5) -> 6",
    "adjusted_servings(3, 0.5) -> 2",
];

static ADJUSTED_SERVINGS_RELATED: [&str; 1] = ["scale_amount"];

impl FunctionPlugin for AdjustedServings {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "adjusted_servings",
            description: "Serving count after applying a multiplier",
            usage: "adjusted_servings(servings, [multiplier])",
            args: &ADJUSTED_SERVINGS_ARGS,
            returns: "Number",
            examples: &ADJUSTED_SERVINGS_EXAMPLES,
            category: "kitchen",
            related: &ADJUSTED_SERVINGS_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let run = || -> Result<f64, MiseError> {
            require_args(args, 1, "adjusted_servings")?;
            let servings = extract_number(&args[0], "adjusted_servings", "servings")?;
            if servings < 0.0 || servings.fract() != 0.0 {
                return Err(MiseError::domain_error(format!(
                    "adjusted_servings(): servings must be a whole number, got {}",
                    servings
                )));
            }
            let multiplier = extract_optional_number(args, 1, "adjusted_servings", "multiplier")?
                .unwrap_or_else(|| ctx.serving_multiplier());
            Ok(adjusted_servings(servings as u32, multiplier) as f64)
        };

        match run() {
            Ok(n) => Value::Number(n),
            Err(e) => Value::Error(e),
        }
    }
}
