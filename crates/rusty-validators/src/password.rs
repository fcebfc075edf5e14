//! Password validation

use crate::config::pattern_serde;
use crate::constants::DEFAULT_SPECIAL_CHARS;
use crate::error::{CharClass, Outcome, ValidationError};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;

/// Options for [`validate_password`]
///
/// Every `require_*` field is a minimum count; 0 means no requirement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordOptions {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub require_uppercase: usize,
    pub require_lowercase: usize,
    pub require_numbers: usize,
    pub require_special_chars: usize,
    /// Characters counted towards `require_special_chars`
    pub special_chars: String,
    pub min_unique_chars: usize,
    /// Extra pattern the password must match, checked last
    #[serde(deserialize_with = "pattern_serde::deserialize")]
    pub pattern: Option<Regex>,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: None,
            require_uppercase: 0,
            require_lowercase: 0,
            require_numbers: 0,
            require_special_chars: 0,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
            min_unique_chars: 0,
            pattern: None,
        }
    }
}

/// Validates a password against length and composition requirements
///
/// Checks, in order: length, uppercase, lowercase, digits, special
/// characters, unique characters, pattern. The password is returned
/// unchanged.
///
/// # Examples
/// ```
/// use rusty_validators::{validate_password, PasswordOptions};
///
/// let opts = PasswordOptions {
///     require_lowercase: 3,
///     require_uppercase: 3,
///     require_numbers: 3,
///     require_special_chars: 3,
///     special_chars: "#".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(validate_password("mmmOOO778###", &opts).unwrap(), "mmmOOO778###");
/// ```
pub fn validate_password(password: &str, options: &PasswordOptions) -> Outcome<String> {
    let result = check_password(password, options);
    match &result {
        Ok(_) => tracing::trace!("password accepted"),
        Err(e) => tracing::debug!("password rejected: {}", e),
    }
    result
}

fn check_password(password: &str, options: &PasswordOptions) -> Outcome<String> {
    let length = password.chars().count();
    if length < options.min_length {
        return Err(ValidationError::TooShort {
            min: options.min_length,
            actual: length,
        });
    }
    if let Some(max) = options.max_length {
        if length > max {
            return Err(ValidationError::TooLong { max, actual: length });
        }
    }

    let counts = [
        (
            CharClass::Uppercase,
            options.require_uppercase,
            password.chars().filter(|c| c.is_ascii_uppercase()).count(),
        ),
        (
            CharClass::Lowercase,
            options.require_lowercase,
            password.chars().filter(|c| c.is_ascii_lowercase()).count(),
        ),
        (
            CharClass::Digit,
            options.require_numbers,
            password.chars().filter(|c| c.is_ascii_digit()).count(),
        ),
    ];
    let short = counts.iter().find(|(_, required, found)| found < required);
    if let Some(&(class, required, found)) = short {
        return Err(ValidationError::Count { class, required, found });
    }

    if options.require_special_chars > 0 {
        let found = count_special(password, &options.special_chars)?;
        if found < options.require_special_chars {
            return Err(ValidationError::Count {
                class: CharClass::Special,
                required: options.require_special_chars,
                found,
            });
        }
    }

    let unique = password.chars().collect::<HashSet<_>>().len();
    if unique < options.min_unique_chars {
        return Err(ValidationError::Count {
            class: CharClass::Unique,
            required: options.min_unique_chars,
            found: unique,
        });
    }

    if let Some(pattern) = &options.pattern {
        if !pattern.is_match(password) {
            return Err(ValidationError::format("password does not match the required pattern"));
        }
    }

    Ok(password.to_string())
}

/// Counts the characters of `password` that belong to `special_chars`
///
/// The set is compiled into a character class at call time.
fn count_special(password: &str, special_chars: &str) -> Outcome<usize> {
    if special_chars.is_empty() {
        return Ok(0);
    }
    let class = Regex::new(&format!("[{}]", escape_class(special_chars)))?;
    Ok(class.find_iter(password).count())
}

/// Backslash-escapes characters that are special inside a regex character class
///
/// `&`, `~` and `#` are escaped as well: `&&` and `~~` are class set
/// operators in `regex`.
pub fn escape_class(chars: &str) -> String {
    let mut escaped = String::with_capacity(chars.len() * 2);
    for c in chars.chars() {
        if matches!(
            c,
            '-' | '/' | '\\' | '^' | '$' | '*' | '+' | '?' | '.' | '(' | ')' | '|' | '[' | ']'
                | '{' | '}' | '&' | '~' | '#'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
