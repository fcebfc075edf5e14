//! Email validation

use crate::config::pattern_serde;
use crate::constants::EMAIL_VALIDATION_PATTERN;
use crate::error::{Outcome, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static TLD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\.[a-zA-Z]{2,}$").unwrap()
});

static LOCAL_SPECIAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9@.]").unwrap()
});

/// Options for [`validate_email`]
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailOptions {
    /// Pattern the whole (normalized) email must match.
    /// `None` uses [`EMAIL_VALIDATION_PATTERN`].
    #[serde(deserialize_with = "pattern_serde::deserialize")]
    pub pattern: Option<Regex>,
    pub min_length: usize,
    /// Upper bound on the length; `Some(0)` means no limit, same as `None`
    pub max_length: Option<usize>,
    /// When false, the local part may only contain letters, digits and dots
    pub allow_special_characters: bool,
    /// When set, the domain must be exactly one of these
    pub allowed_domains: Option<Vec<String>>,
    pub disallowed_domains: Option<Vec<String>>,
    /// When false the email is lowercased before every check
    pub case_sensitive: bool,
    pub allow_subdomains: bool,
    /// Require the domain to end in a dot and at least two letters
    #[serde(rename = "requiredTLD")]
    pub required_tld: bool,
    pub is_required: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            pattern: None,
            min_length: 0,
            max_length: None,
            allow_special_characters: true,
            allowed_domains: None,
            disallowed_domains: None,
            case_sensitive: false,
            allow_subdomains: true,
            required_tld: true,
            is_required: true,
        }
    }
}

/// Validates an email address
///
/// Checks run in a fixed order and the first failure is returned:
/// required, length, local/domain split, special characters, TLD,
/// subdomains, allow-list, deny-list, and finally the pattern.
///
/// Returns the email, lowercased unless `case_sensitive` is set.
///
/// # Examples
/// ```
/// use rusty_validators::{validate_email, EmailOptions};
///
/// let opts = EmailOptions { max_length: Some(30), ..Default::default() };
/// assert_eq!(validate_email("example@gmail.com", &opts).unwrap(), "example@gmail.com");
///
/// let opts = EmailOptions { max_length: Some(10), ..Default::default() };
/// assert!(validate_email("example@gmail.com", &opts).is_err());
/// ```
pub fn validate_email(email: &str, options: &EmailOptions) -> Outcome<String> {
    let result = check_email(email, options);
    match &result {
        Ok(_) => tracing::trace!("email accepted"),
        Err(e) => tracing::debug!("email rejected: {}", e),
    }
    result
}

fn check_email(email: &str, options: &EmailOptions) -> Outcome<String> {
    if options.is_required && email.is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }

    let normalized = if options.case_sensitive {
        email.to_string()
    } else {
        email.to_lowercase()
    };

    let length = normalized.chars().count();
    if length < options.min_length {
        return Err(ValidationError::TooShort {
            min: options.min_length,
            actual: length,
        });
    }
    if let Some(max) = options.max_length.filter(|&max| max > 0) {
        if length > max {
            return Err(ValidationError::TooLong { max, actual: length });
        }
    }

    let (local, domain) = split_address(&normalized)?;

    if !options.allow_special_characters && LOCAL_SPECIAL_REGEX.is_match(local) {
        return Err(ValidationError::policy(
            "special characters are not allowed in the local part",
        ));
    }

    if options.required_tld && !TLD_REGEX.is_match(domain) {
        return Err(ValidationError::format(
            "domain must end with a top-level domain of at least 2 letters",
        ));
    }

    if !options.allow_subdomains && has_subdomain(domain) {
        return Err(ValidationError::policy("subdomains are not allowed"));
    }

    if let Some(allowed) = &options.allowed_domains {
        if !allowed.iter().any(|d| d == domain) {
            return Err(ValidationError::policy(format!(
                "domain '{}' is not in the allowed list",
                domain
            )));
        }
    }

    if let Some(disallowed) = &options.disallowed_domains {
        if disallowed.iter().any(|d| d == domain) {
            return Err(ValidationError::policy(format!(
                "domain '{}' is not allowed",
                domain
            )));
        }
    }

    let pattern = options.pattern.as_ref().unwrap_or(&*EMAIL_VALIDATION_PATTERN);
    if !pattern.is_match(&normalized) {
        return Err(ValidationError::format("email does not match the required pattern"));
    }

    Ok(normalized)
}

/// Splits an address into its local part and domain
///
/// Exactly one `@` is accepted; both sides must be non-empty.
fn split_address(email: &str) -> Outcome<(&str, &str)> {
    match email.split_once('@') {
        Some((_, domain)) if domain.contains('@') => Err(ValidationError::composition(
            "email must contain exactly one '@'",
        )),
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok((local, domain)),
        _ => Err(ValidationError::composition(
            "email must have a local part and a domain",
        )),
    }
}

/// More than two labels (`mail.example.com`) counts as a subdomain
fn has_subdomain(domain: &str) -> bool {
    domain.split('.').count() > 2
}
