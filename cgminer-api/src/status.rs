//! Status entries carried by every response envelope.
//!
//! Each response opens with a `STATUS` array. Firmware marks each entry with a
//! one-letter severity; `E` and `F` mean the command failed and the rest of
//! the payload should not be trusted.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Severity of a status entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    #[default]
    Success,
    Information,
    Warning,
    Error,
    Fatal,
    /// Letter this client does not know. Treated as non-failing.
    Other(String),
}

impl Severity {
    /// True for `Error` and `Fatal`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal)
    }

    /// Wire code for this severity.
    pub fn code(&self) -> &str {
        match self {
            Severity::Success => "S",
            Severity::Information => "I",
            Severity::Warning => "W",
            Severity::Error => "E",
            Severity::Fatal => "F",
            Severity::Other(code) => code,
        }
    }
}

impl From<String> for Severity {
    fn from(code: String) -> Self {
        match code.as_str() {
            "S" => Severity::Success,
            "I" => Severity::Information,
            "W" => Severity::Warning,
            "E" => Severity::Error,
            "F" => Severity::Fatal,
            _ => Severity::Other(code),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.code().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One entry of the `STATUS` array.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusEntry {
    #[serde(rename = "STATUS")]
    pub severity: Severity,
    /// Unix timestamp of the reply, in seconds.
    #[serde(rename = "When")]
    pub when: i64,
    #[serde(rename = "Code")]
    pub code: i64,
    #[serde(rename = "Msg")]
    pub msg: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl StatusEntry {
    /// `When` as a UTC timestamp, if it is in range.
    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.when).ok()
    }
}

/// Failure reported by the device itself.
///
/// Fields are copied verbatim from the offending status entry.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "API returned {}: Code: {code}, Msg: '{msg}', Description: '{description}'",
    label(.severity)
)]
pub struct ApiError {
    pub severity: Severity,
    pub code: i64,
    pub msg: String,
    pub description: String,
}

fn label(severity: &Severity) -> &'static str {
    match severity {
        Severity::Fatal => "FATAL error",
        _ => "error",
    }
}

impl From<&StatusEntry> for ApiError {
    fn from(entry: &StatusEntry) -> Self {
        Self {
            severity: entry.severity.clone(),
            code: entry.code,
            msg: entry.msg.clone(),
            description: entry.description.clone(),
        }
    }
}

/// Fail on the first `E` or `F` entry, in order.
pub fn check_status(entries: &[StatusEntry]) -> Result<(), ApiError> {
    match entries.iter().find(|entry| entry.severity.is_failure()) {
        Some(entry) => Err(ApiError::from(entry)),
        None => Ok(()),
    }
}
