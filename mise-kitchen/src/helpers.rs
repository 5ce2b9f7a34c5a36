//! Argument extraction shared by the kitchen plugins

use mise_core::{MiseError, UnitSystem, Value};

/// Extract a number from a Value, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, MiseError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Null => Err(MiseError::arg_type(func, arg, "Number", "Null")),
        Value::Error(e) => Err(e.clone()),
        other => Err(MiseError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract a Text string from a Value
pub fn extract_text(value: &Value, func: &str, arg: &str) -> Result<String, MiseError> {
    match value {
        Value::Text(s) => Ok(s.clone()),
        Value::Null => Err(MiseError::arg_type(func, arg, "Text", "Null")),
        Value::Error(e) => Err(e.clone()),
        other => Err(MiseError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Extract a unit system name ("us" or "metric")
pub fn extract_unit_system(value: &Value, func: &str, arg: &str) -> Result<UnitSystem, MiseError> {
    let name = extract_text(value, func, arg)?;
    name.parse::<UnitSystem>()
        .map_err(|_| MiseError::invalid_unit_system(&name).in_function(func))
}

/// Optional number at `index`; missing or null gives `None`, other types are errors
pub fn extract_optional_number(args: &[Value], index: usize, func: &str, arg: &str) -> Result<Option<f64>, MiseError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => extract_number(v, func, arg).map(Some),
    }
}

/// Optional unit system at `index`
pub fn extract_optional_unit_system(args: &[Value], index: usize, func: &str, arg: &str) -> Result<Option<UnitSystem>, MiseError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => extract_unit_system(v, func, arg).map(Some),
    }
}

/// Ensure at least `expected` arguments were supplied
pub fn require_args(args: &[Value], expected: usize, func: &str) -> Result<(), MiseError> {
    if args.len() < expected {
        return Err(MiseError::arg_count(func, expected, args.len()));
    }
    Ok(())
}
