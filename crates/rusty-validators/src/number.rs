//! Numeric validation

use crate::error::{Outcome, ValidationError};
use serde::Deserialize;

/// A number, or text that should hold one
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Number(value)
    }
}

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        NumberInput::Number(value as f64)
    }
}

impl From<i32> for NumberInput {
    fn from(value: i32) -> Self {
        NumberInput::Number(value as f64)
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        NumberInput::Number(value as f64)
    }
}

impl From<u32> for NumberInput {
    fn from(value: u32) -> Self {
        NumberInput::Number(value as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}

impl NumberInput {
    /// Coerces the input to an `f64`
    ///
    /// Text is trimmed and must parse as a whole; `NaN` is rejected.
    pub fn coerce(&self) -> Outcome<f64> {
        let value = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::TypeCoercion { input: text.clone() })?,
        };
        if value.is_nan() {
            return Err(ValidationError::TypeCoercion {
                input: match self {
                    NumberInput::Text(text) => text.clone(),
                    NumberInput::Number(_) => "NaN".to_string(),
                },
            });
        }
        Ok(value)
    }
}

/// Options for [`validate_number`]; every bound is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Maximum digits after the decimal point
    pub decimal_places: Option<usize>,
}

/// Validates a number, or text holding one, against range and precision bounds
///
/// # Examples
/// ```
/// use rusty_validators::{validate_number, NumberOptions};
///
/// let opts = NumberOptions { min: Some(1.0), max: Some(5.0), decimal_places: Some(4) };
/// assert_eq!(validate_number(3.2449, &opts).unwrap(), 3.2449);
/// assert_eq!(validate_number("3.5", &opts).unwrap(), 3.5);
/// assert!(validate_number("3.5kg", &opts).is_err());
/// ```
pub fn validate_number(value: impl Into<NumberInput>, options: &NumberOptions) -> Outcome<f64> {
    let result = check_number(&value.into(), options);
    match &result {
        Ok(n) => tracing::trace!("number accepted: {}", n),
        Err(e) => tracing::debug!("number rejected: {}", e),
    }
    result
}

fn check_number(input: &NumberInput, options: &NumberOptions) -> Outcome<f64> {
    let value = input.coerce()?;

    if let Some(min) = options.min {
        if value < min {
            return Err(ValidationError::range(format!("must be at least {}", min)));
        }
    }
    if let Some(max) = options.max {
        if value > max {
            return Err(ValidationError::range(format!("must be at most {}", max)));
        }
    }

    if let Some(places) = options.decimal_places {
        let found = decimal_places(value);
        if found > places {
            return Err(ValidationError::range(format!(
                "must have at most {} decimal places (got {})",
                places, found
            )));
        }
    }

    Ok(value)
}

/// Digits after the decimal point in the shortest decimal form of `value`
///
/// `f64`'s `Display` never uses exponent notation, so `3.2449` yields 4 and
/// `0.1 + 0.2` yields 17.
pub fn decimal_places(value: f64) -> usize {
    value
        .to_string()
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}
