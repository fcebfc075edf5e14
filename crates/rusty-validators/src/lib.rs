//! Rusty Validators
//!
//! Stateless validation functions for emails, passwords, calendar dates,
//! numbers and URLs. Every validator takes the raw input plus an options
//! struct and returns an [`Outcome`]: the normalized value on success, or a
//! [`ValidationError`] describing the first check that failed.
//!
//! ```
//! use rusty_validators::{validate_email, EmailOptions};
//!
//! let email = validate_email("User@Example.com", &EmailOptions::default()).unwrap();
//! assert_eq!(email, "user@example.com");
//! ```

pub mod config;
pub mod constants;
pub mod date;
pub mod email;
pub mod error;
pub mod number;
pub mod outcome;
pub mod password;
pub mod url;

// Re-export all validators
pub use config::ValidationConfig;
pub use constants::*;
pub use date::*;
pub use email::*;
pub use error::*;
pub use number::*;
pub use outcome::*;
pub use password::*;
pub use url::*;
