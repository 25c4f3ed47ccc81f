//! Cache-busting version token shared by one publish run.

use std::fmt;

use chrono::Utc;

/// Opaque cache-busting token, identical across every reference in a run.
///
/// Generated once per build and passed explicitly into every HTML transform,
/// never held as ambient global state, so tests can pin a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStamp(String);

impl VersionStamp {
    /// Generate a token from the current UTC time at second resolution.
    ///
    /// The format is `YYYYMMDDHHMMSS` with no separators, e.g. `20240115093000`.
    pub fn now() -> Self {
        Self(Utc::now().format("%Y%m%d%H%M%S").to_string())
    }

    /// Wrap a fixed token, letting callers pin the stamp for reproducible runs.
    pub fn fixed(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
