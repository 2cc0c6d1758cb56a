use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Raw form fields, exactly as typed. Empty means absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInput<'a> {
    pub weight: &'a str,
    pub height: &'a str,
    pub age: &'a str,
}

/// Per-field validity. Computation proceeds only when all flags are false.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ValidationFlags {
    pub weight_invalid: bool,
    pub height_invalid: bool,
    pub age_invalid: bool,
}

impl ValidationFlags {
    pub fn is_valid(&self) -> bool {
        !self.weight_invalid && !self.height_invalid && !self.age_invalid
    }

    /// Message tags for the failing fields, in form order.
    pub fn message_tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.weight_invalid {
            tags.push("errorWeight");
        }
        if self.height_invalid {
            tags.push("errorHeight");
        }
        if self.age_invalid {
            tags.push("errorAge");
        }
        tags
    }
}

#[derive(Debug, Error)]
#[error("invalid input: {}", .flags.message_tags().join(", "))]
pub struct ValidationError {
    pub flags: ValidationFlags,
}

/// Numeric fields that passed validation, still in the user's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInput {
    pub weight: f64,
    pub height: f64,
    pub age: Option<u8>,
}

/// Parse the leading number of a form field (`"72.5kg"` gives 72.5,
/// `"1.8e2"` gives 180).
pub fn parse_number(raw: &str) -> Option<f64> {
    let re = Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").ok()?;
    let caps = re.captures(raw)?;
    let v: f64 = caps[1].parse().ok()?;
    v.is_finite().then_some(v)
}

pub fn validate(raw: &RawInput) -> ValidationFlags {
    let weight = parse_number(raw.weight);
    let height = parse_number(raw.height);
    let age_invalid = match raw.age.trim() {
        "" => false,
        s => parse_number(s).is_none_or(|a| !(2.0..=120.0).contains(&a)),
    };
    ValidationFlags {
        weight_invalid: weight.is_none_or(|w| w <= 0.0),
        height_invalid: height.is_none_or(|h| h <= 0.0),
        age_invalid,
    }
}

/// Validate and extract the numeric fields. Age is truncated to whole years.
pub fn check(raw: &RawInput) -> Result<ValidInput, ValidationError> {
    let flags = validate(raw);
    if !flags.is_valid() {
        tracing::debug!(?flags, "input rejected");
        return Err(ValidationError { flags });
    }
    match (parse_number(raw.weight), parse_number(raw.height)) {
        (Some(weight), Some(height)) => Ok(ValidInput {
            weight,
            height,
            age: parse_number(raw.age).map(|a| a.trunc() as u8),
        }),
        _ => Err(ValidationError { flags }),
    }
}
