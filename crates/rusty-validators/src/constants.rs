//! Shared, read-only data consumed by the validators

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source of the default email pattern
pub const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$";

/// Default pattern a whole email must match
pub static EMAIL_VALIDATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Characters counted as "special" by the password validator unless overridden
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";

/// URL schemes recognized by the URL validator
///
/// Serialized as the lowercase scheme name (`"https"`, `"mailto"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
    Ftp,
    Ftps,
    Mailto,
    File,
    Data,
    Tel,
    Sms,
    Ws,
    Wss,
}

/// Every recognized protocol, in canonical order
pub const PROTOCOLS: [Protocol; 11] = [
    Protocol::Http,
    Protocol::Https,
    Protocol::Ftp,
    Protocol::Ftps,
    Protocol::Mailto,
    Protocol::File,
    Protocol::Data,
    Protocol::Tel,
    Protocol::Sms,
    Protocol::Ws,
    Protocol::Wss,
];

impl Protocol {
    /// Scheme name as it appears before `://`
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
            Protocol::Ftp => "ftp",
            Protocol::Ftps => "ftps",
            Protocol::Mailto => "mailto",
            Protocol::File => "file",
            Protocol::Data => "data",
            Protocol::Tel => "tel",
            Protocol::Sms => "sms",
            Protocol::Ws => "ws",
            Protocol::Wss => "wss",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    /// Parse a scheme name, ignoring ASCII case
    ///
    /// # Examples
    /// ```
    /// use rusty_validators::Protocol;
    /// assert_eq!("HTTPS".parse::<Protocol>(), Ok(Protocol::Https));
    /// assert!("gopher".parse::<Protocol>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PROTOCOLS
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unrecognized protocol '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_email_pattern() {
        assert!(EMAIL_VALIDATION_PATTERN.is_match("user@example.com"));
        assert!(EMAIL_VALIDATION_PATTERN.is_match("o'brien+tag@mail.example.org"));
        assert!(EMAIL_VALIDATION_PATTERN.is_match("user@localhost"));

        assert!(!EMAIL_VALIDATION_PATTERN.is_match("user name@example.com"));
        assert!(!EMAIL_VALIDATION_PATTERN.is_match("user@exa_mple.com"));
        assert!(!EMAIL_VALIDATION_PATTERN.is_match("@example.com"));
    }

    #[test]
    fn test_protocol_names_round_trip_through_from_str() {
        for protocol in PROTOCOLS {
            assert_eq!(protocol.as_str().parse::<Protocol>(), Ok(protocol));
        }
        assert_eq!("Mailto".parse::<Protocol>(), Ok(Protocol::Mailto));
    }
}
