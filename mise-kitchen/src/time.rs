//! Prep and cook time display

use mise_core::{MiseError, Value};
use mise_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin};

/// "45 min", "1 hour", "2 hours", "1 hour 30 min". Missing or zero is "0 min".
pub fn format_time(minutes: Option<u32>) -> String {
    let minutes = match minutes {
        None | Some(0) => return "0 min".to_string(),
        Some(m) => m,
    };

    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    let hour_text = if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    };

    if remaining == 0 {
        hour_text
    } else {
        format!("{} {} min", hour_text, remaining)
    }
}

// ============ format_time ============

pub struct FormatTime;

static FORMAT_TIME_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("minutes", "Number", "Whole minutes", "0"),
];

static FORMAT_TIME_EXAMPLES: [&str; 4] = [
    "format_time(45) -> \"45 min\"",
    "format_time(60) -> \"1 hour\"",
    "format_time(90) -> \"1 hour 30 min\"",
    "format_time(150) -> \"2 hours 30 min\"",
];

static FORMAT_TIME_RELATED: [&str; 0] = [];

impl FunctionPlugin for FormatTime {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "format_time",
            description: "Render a duration in minutes as hours and minutes",
            usage: "format_time(minutes)",
            args: &FORMAT_TIME_ARGS,
            returns: "Text",
            examples: &FORMAT_TIME_EXAMPLES,
            category: "kitchen",
            related: &FORMAT_TIME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let minutes = match args.first() {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) if *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64 => {
                Some(*n as u32)
            }
            Some(Value::Number(n)) => {
                return Value::Error(MiseError::domain_error(format!(
                    "format_time(): minutes must be a whole, non-negative number, got {}",
                    n
                )));
            }
            Some(Value::Error(e)) => return Value::Error(e.clone()),
            Some(other) => {
                return Value::Error(MiseError::arg_type("format_time", "minutes", "Number", other.type_name()));
            }
        };
        Value::Text(format_time(minutes))
    }
}
