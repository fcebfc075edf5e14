//! URL validation

use crate::config::pattern_serde;
use crate::constants::{Protocol, PROTOCOLS};
use crate::error::{Outcome, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

// `scheme://` followed by at least one non-space, scheme from PROTOCOLS
static URL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?i)(?:{})://\S+$", alternation(&PROTOCOLS))).unwrap()
});

/// Options for [`validate_url`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Accepted schemes. Must be non-empty.
    pub protocols: Option<Vec<Protocol>>,
    /// Extra pattern the whole URL must match
    #[serde(deserialize_with = "pattern_serde::deserialize")]
    pub format: Option<Regex>,
}

impl UrlOptions {
    pub fn with_protocols(protocols: impl IntoIterator<Item = Protocol>) -> Self {
        Self {
            protocols: Some(protocols.into_iter().collect()),
            format: None,
        }
    }
}

/// Validates a URL against the recognized shapes, an optional format and
/// the accepted protocols
///
/// Scheme matching is a case-insensitive prefix test against
/// `<protocol>://`, not a parsed-URI comparison. The URL is returned
/// unchanged.
///
/// # Examples
/// ```
/// use regex::Regex;
/// use rusty_validators::{validate_url, Protocol, UrlOptions};
///
/// let opts = UrlOptions {
///     protocols: Some(vec![Protocol::Http, Protocol::Mailto]),
///     format: Some(Regex::new("(?i)moemen").unwrap()),
/// };
/// assert_eq!(validate_url("http://moemen.com", &opts).unwrap(), "http://moemen.com");
/// assert!(validate_url("https://moemen.com", &opts).is_err());
/// ```
pub fn validate_url(url: &str, options: &UrlOptions) -> Outcome<String> {
    let result = check_url(url, options);
    match &result {
        Ok(_) => tracing::trace!("url accepted"),
        Err(e) => tracing::debug!("url rejected: {}", e),
    }
    result
}

fn check_url(url: &str, options: &UrlOptions) -> Outcome<String> {
    if !URL_SHAPE.is_match(url) {
        return Err(ValidationError::format(
            "url must look like <scheme>://<address> with a recognized scheme",
        ));
    }

    if let Some(format) = &options.format {
        if !format.is_match(url) {
            return Err(ValidationError::format("url does not match the required format"));
        }
    }

    let protocols = match options.protocols.as_deref() {
        Some(protocols) if !protocols.is_empty() => protocols,
        _ => return Err(ValidationError::unsupported("no protocols specified")),
    };

    let accepted = Regex::new(&format!(r"^(?i)(?:{})://", alternation(protocols)))?;
    if !accepted.is_match(url) {
        return Err(ValidationError::policy(format!(
            "protocol must be one of: {}",
            protocols
                .iter()
                .map(Protocol::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    Ok(url.to_string())
}

/// `a|b|c` from escaped scheme names
fn alternation(protocols: &[Protocol]) -> String {
    protocols
        .iter()
        .map(|p| regex::escape(p.as_str()))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn moemen_opts() -> UrlOptions {
        UrlOptions {
            protocols: Some(vec![Protocol::Http, Protocol::Mailto]),
            format: Some(Regex::new("(?i)moemen").unwrap()),
        }
    }

    #[test]
    fn test_protocol_and_format() {
        assert_eq!(
            validate_url("http://moemen.com", &moemen_opts()).unwrap(),
            "http://moemen.com"
        );
        assert_eq!(
            validate_url("https://moemen.com", &moemen_opts()).unwrap_err().kind(),
            ErrorKind::Policy
        );
        assert_eq!(
            validate_url("http://example.com", &moemen_opts()).unwrap_err().kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn test_shape() {
        let opts = UrlOptions::with_protocols(PROTOCOLS);
        assert!(validate_url("https://example.com/path?q=1", &opts).is_ok());
        assert!(validate_url("wss://socket.example.com", &opts).is_ok());
        assert!(validate_url("HTTP://EXAMPLE.COM", &opts).is_ok());

        for bad in [
            "",
            "example.com",
            "https://",
            "https://exa mple.com",
            "gopher://example.com",
            "//example.com",
        ] {
            assert_eq!(validate_url(bad, &opts).unwrap_err().kind(), ErrorKind::Format, "{}", bad);
        }
    }

    #[test]
    fn test_missing_protocols() {
        let none = UrlOptions::default();
        let empty = UrlOptions::with_protocols(Vec::<Protocol>::new());
        for opts in [none, empty] {
            assert_eq!(
                validate_url("https://example.com", &opts),
                Err(ValidationError::Unsupported("no protocols specified".to_string()))
            );
        }
    }

    #[test]
    fn test_unrecognized_scheme_fails_before_protocol_list() {
        let opts = UrlOptions::default();
        assert_eq!(
            validate_url("gopher://example.com", &opts).unwrap_err().kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn test_format_checked_before_protocols() {
        let opts = UrlOptions {
            protocols: None,
            format: Some(Regex::new("moemen").unwrap()),
        };
        assert_eq!(
            validate_url("http://example.com", &opts).unwrap_err().kind(),
            ErrorKind::Format
        );
        assert_eq!(
            validate_url("http://moemen.com", &opts),
            Err(ValidationError::Unsupported("no protocols specified".to_string()))
        );
    }

    #[test]
    fn test_prefix_match_is_exact_scheme() {
        // "http" must not accept "https://" even though it is a string prefix
        let opts = UrlOptions::with_protocols([Protocol::Http]);
        assert!(validate_url("https://example.com", &opts).is_err());

        let opts = UrlOptions::with_protocols([Protocol::Ws]);
        assert!(validate_url("WS://example.com", &opts).is_ok());
        assert!(validate_url("wss://example.com", &opts).is_err());
    }
}
