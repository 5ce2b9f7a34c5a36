//! Quantity expression parsing
//!
//! Splits strings like "1 1/2 cups" or "350°F" into a magnitude and a unit
//! token. Every entry point returns `Option`; `None` means "leave the input
//! alone".

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Unicode vulgar fractions and their exact values
pub const UNICODE_FRACTIONS: [(char, f64); 15] = [
    ('¼', 1.0 / 4.0),
    ('½', 1.0 / 2.0),
    ('¾', 3.0 / 4.0),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('⅛', 1.0 / 8.0),
    ('⅜', 3.0 / 8.0),
    ('⅝', 5.0 / 8.0),
    ('⅞', 7.0 / 8.0),
    ('⅕', 1.0 / 5.0),
    ('⅖', 2.0 / 5.0),
    ('⅗', 3.0 / 5.0),
    ('⅘', 4.0 / 5.0),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
];

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9./\s\-¼½¾⅓⅔⅛⅜⅝⅞⅕⅖⅗⅘⅙⅚]+)\s*(.*)$").unwrap()
    })
}

fn trailing_unit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z°#.]+\s*$").unwrap())
}

fn mixed_unicode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)\s*([¼½¾⅓⅔⅛⅜⅝⅞⅕⅖⅗⅘⅙⅚])$").unwrap())
}

fn mixed_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)\s+([0-9]+)/([0-9]+)$").unwrap())
}

fn range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([0-9]+\.?[0-9]*)\s*-\s*([0-9]+\.?[0-9]*)$").unwrap()
    })
}

/// Value of a single vulgar fraction glyph
pub fn unicode_fraction(c: char) -> Option<f64> {
    UNICODE_FRACTIONS.iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, value)| *value)
}

/// The numeric shapes a quantity prefix can take
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLiteral {
    /// A lone glyph: "¾"
    Vulgar(f64),
    /// Whole number plus fraction: "1½", "1 1/2"
    Mixed { whole: f64, fraction: f64 },
    /// "3/4"
    Fraction { numerator: f64, denominator: f64 },
    /// "1-2", "1 - 2"
    Range { low: f64, high: f64 },
    /// "1.5", "2"
    Decimal(f64),
}

impl NumericLiteral {
    /// Classify a numeric prefix. Zero denominators yield `None`.
    pub fn lex(input: &str) -> Option<NumericLiteral> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(value) = unicode_fraction(c) {
                return Some(NumericLiteral::Vulgar(value));
            }
        }

        if let Some(caps) = mixed_unicode_regex().captures(trimmed) {
            let whole: f64 = caps[1].parse().ok()?;
            let fraction = caps[2].chars().next().and_then(unicode_fraction)?;
            return Some(NumericLiteral::Mixed { whole, fraction });
        }

        if let Some(caps) = mixed_text_regex().captures(trimmed) {
            let whole: f64 = caps[1].parse().ok()?;
            let numerator: f64 = caps[2].parse().ok()?;
            let denominator: f64 = caps[3].parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            return Some(NumericLiteral::Mixed { whole, fraction: numerator / denominator });
        }

        if trimmed.contains('/') {
            let parts: Vec<&str> = trimmed.split('/').collect();
            if let [num, den] = parts.as_slice() {
                let numerator = leading_float(num)?;
                let denominator = leading_float(den)?;
                if denominator == 0.0 {
                    return None;
                }
                return Some(NumericLiteral::Fraction { numerator, denominator });
            }
        }

        if let Some(caps) = range_regex().captures(trimmed) {
            let low: f64 = caps[1].parse().ok()?;
            let high: f64 = caps[2].parse().ok()?;
            return Some(NumericLiteral::Range { low, high });
        }

        leading_float(trimmed).map(NumericLiteral::Decimal)
    }

    /// Numeric value; ranges collapse to their midpoint
    pub fn value(&self) -> f64 {
        match *self {
            NumericLiteral::Vulgar(v) | NumericLiteral::Decimal(v) => v,
            NumericLiteral::Mixed { whole, fraction } => whole + fraction,
            NumericLiteral::Fraction { numerator, denominator } => numerator / denominator,
            NumericLiteral::Range { low, high } => (low + high) / 2.0,
        }
    }
}

/// Parse the numeric part of a quantity expression.
///
/// Accepts vulgar fractions, mixed numbers, ASCII fractions, ranges and
/// decimals. Never panics; unparseable or non-finite input gives `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    NumericLiteral::lex(input)
        .map(|literal| literal.value())
        .filter(|v| v.is_finite())
}

/// Longest decimal literal at the start of `s`, after leading whitespace.
/// "12abc" reads as 12, "abc" as nothing.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Split an amount into its numeric prefix and the remainder, both trimmed.
///
/// `None` when the amount does not start with a numeric character.
pub fn split_amount(amount: &str) -> Option<(&str, &str)> {
    let trimmed = amount.trim();
    let caps = amount_regex().captures(trimmed)?;
    let number = caps.get(1)?.as_str().trim();
    let rest = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((number, rest))
}

/// Trailing unit token of an amount ("2 cups" -> "cups", "350°F" -> "°F").
/// Case is preserved so that single-letter tokens stay distinguishable.
pub fn extract_unit(amount: &str) -> Option<&str> {
    trailing_unit_regex()
        .find(amount)
        .map(|m| m.as_str().trim())
        .filter(|unit| !unit.is_empty())
}

/// A magnitude with the unit token that followed it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    pub magnitude: f64,
    /// Trimmed unit text, original case kept
    pub unit: String,
}

impl ParsedQuantity {
    pub fn unit_lower(&self) -> String {
        self.unit.to_lowercase()
    }

    pub fn has_unit(&self) -> bool {
        !self.unit.is_empty()
    }
}

/// Parse a whole quantity expression
pub fn parse_quantity(amount: &str) -> Option<ParsedQuantity> {
    let (number, rest) = split_amount(amount)?;
    let magnitude = parse_number(number)?;
    Some(ParsedQuantity { magnitude, unit: rest.to_string() })
}
