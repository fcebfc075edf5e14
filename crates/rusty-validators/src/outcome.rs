//! Thin projections of an [`Outcome`]
//!
//! Call sites that only need a yes/no answer or a nullable value project the
//! canonical outcome instead of re-running a separate check.

use crate::error::Outcome;
use serde::Serialize;

/// Serializable shape of an outcome
///
/// Serializes as `{"isValid": true, "result": ...}` on success and
/// `{"isValid": false, "reason": "..."}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport<T> {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub trait OutcomeExt<T> {
    /// Boolean projection
    fn is_valid(&self) -> bool;

    /// Nullable projection: the validated value, or `None`
    fn value(self) -> Option<T>;

    fn into_report(self) -> ValidationReport<T>;
}

impl<T> OutcomeExt<T> for Outcome<T> {
    fn is_valid(&self) -> bool {
        self.is_ok()
    }

    fn value(self) -> Option<T> {
        self.ok()
    }

    fn into_report(self) -> ValidationReport<T> {
        match self {
            Ok(result) => ValidationReport {
                is_valid: true,
                result: Some(result),
                reason: None,
            },
            Err(err) => ValidationReport {
                is_valid: false,
                result: None,
                reason: Some(err.to_string()),
            },
        }
    }
}
