// File: src/config.rs
// Purpose: Option presets loaded from validators.toml

use crate::date::{validate_date_with, DateFormat};
use crate::email::{validate_email, EmailOptions};
use crate::error::Outcome;
use crate::number::{validate_number, NumberInput, NumberOptions};
use crate::password::{validate_password, PasswordOptions};
use crate::url::{validate_url, UrlOptions};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Preset options for every validator
///
/// ```toml
/// dateFormat = "DD/MM/YYYY"
///
/// [email]
/// maxLength = 64
/// disallowedDomains = ["spam.com"]
///
/// [password]
/// minLength = 12
/// requireSpecialChars = 1
///
/// [number]
/// min = 0
/// decimalPlaces = 2
///
/// [url]
/// protocols = ["https"]
/// format = "(?i)example"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    #[serde(default)]
    pub email: EmailOptions,

    #[serde(default)]
    pub password: PasswordOptions,

    #[serde(default)]
    pub number: NumberOptions,

    #[serde(default)]
    pub url: UrlOptions,

    #[serde(default = "default_date_format")]
    pub date_format: DateFormat,
}

fn default_date_format() -> DateFormat {
    DateFormat::YearMonthDay
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            email: EmailOptions::default(),
            password: PasswordOptions::default(),
            number: NumberOptions::default(),
            url: UrlOptions::default(),
            date_format: default_date_format(),
        }
    }
}

impl ValidationConfig {
    /// Load presets from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("No validator config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load presets from the default path (./validators.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("validators.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = toml::from_str(content).context("Invalid validator config")?;
        Ok(config)
    }

    pub fn validate_email(&self, email: &str) -> Outcome<String> {
        validate_email(email, &self.email)
    }

    pub fn validate_password(&self, password: &str) -> Outcome<String> {
        validate_password(password, &self.password)
    }

    pub fn validate_date(&self, date: &str) -> Outcome<String> {
        validate_date_with(date, self.date_format)
    }

    pub fn validate_number(&self, value: impl Into<NumberInput>) -> Outcome<f64> {
        validate_number(value, &self.number)
    }

    pub fn validate_url(&self, url: &str) -> Outcome<String> {
        validate_url(url, &self.url)
    }
}

/// Deserializes an optional pattern string into a compiled [`regex::Regex`]
pub(crate) mod pattern_serde {
    use regex::Regex;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Regex>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|pattern| Regex::new(&pattern).map_err(D::Error::custom))
            .transpose()
    }
}
