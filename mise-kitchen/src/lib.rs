//! Mise Kitchen
//!
//! The quantity engine behind recipe display: reads amounts such as
//! "1 1/2 cups" or "350°F", scales them by a serving multiplier and
//! re-expresses them in US customary or metric units.
//!
//! Every engine function is total. Input it cannot make sense of comes back
//! unchanged (or as `None` for the numeric helpers), never as an error.
//! Argument errors only exist at the plugin layer.

mod helpers;
mod parse;
mod units;
mod temperature;
mod select;
mod format;
mod convert;
mod scaling;
mod time;

use mise_plugin::PluginRegistry;

pub use mise_core::UnitSystem;
pub use parse::{
    extract_unit, parse_number, parse_quantity, split_amount, unicode_fraction, NumericLiteral,
    ParsedQuantity, UNICODE_FRACTIONS,
};
pub use units::{
    classify, lookup_metric, lookup_metric_volume, lookup_metric_weight, lookup_us,
    lookup_us_volume, lookup_us_weight, MetricBase, MetricUnitDef, UnitClass, UnitKind,
    UnitTable, UsBase, UsUnitDef, G_PER_OZ, ML_PER_CUP,
};
pub use temperature::{
    celsius_to_fahrenheit, convert_temperature, fahrenheit_to_celsius, is_temperature_unit,
    normalize_temperature_unit, round_half_up,
};
pub use select::{choose_best_metric_unit, choose_best_us_unit, DisplayUnit};
pub use format::{format_number, format_scaled_number, to_fixed};
pub use convert::{contains_metric_units, contains_us_units, convert_amount};
pub use scaling::{adjust_amount, adjusted_servings, scale_amount, scale_number, ServingMultiplier};
pub use time::format_time;

/// Load kitchen functions into registry
pub fn load_kitchen_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Unit conversion (3 functions)
        .with_function(convert::ConvertAmount)
        .with_function(convert::ContainsUsUnits)
        .with_function(convert::ContainsMetricUnits)

        // Scaling (5 functions)
        .with_function(scaling::ScaleNumber)
        .with_function(scaling::FormatScaledNumber)
        .with_function(scaling::ScaleAmount)
        .with_function(scaling::AdjustAmount)
        .with_function(scaling::AdjustedServings)

        // Display
        .with_function(time::FormatTime)
}
