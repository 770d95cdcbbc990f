use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Severity of a log record.
///
/// Serialized in uppercase, matching the emitted `level` field.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    #[default]
    Info,
    Warn,
    Error,
    Critical,
}

impl Level {
    /// Normalizes free-form level text: trimmed, case-insensitive,
    /// `WARNING` aliased to `WARN`, anything unrecognized falls back to
    /// `INFO`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stacklog::Level;
    ///
    /// assert_eq!(Level::parse(" warning "), Level::Warn);
    /// assert_eq!(Level::parse("CRITICAL"), Level::Critical);
    /// assert_eq!(Level::parse("verbose"), Level::Info);
    /// ```
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_uppercase().as_str() {
            "WARN" | "WARNING" => Level::Warn,
            "ERROR" => Level::Error,
            "CRITICAL" => Level::Critical,
            _ => Level::Info,
        }
    }

    /// The uppercase wire form.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
