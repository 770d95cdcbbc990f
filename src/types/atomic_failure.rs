use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A leaf failure: one human-readable message plus an optional origin trace.
///
/// Everything else in the crate treats this as opaque beyond its textual
/// rendering. The trace, when present, is a multi-line block of call-site
/// information attached at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomicFailure {
    message: String,
    trace: Option<String>,
}

impl AtomicFailure {
    /// Creates a failure carrying only a message.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            trace: None,
        }
    }

    /// Creates a failure with an explicit origin trace.
    #[inline]
    pub fn with_trace<S: Into<String>, T: Into<String>>(message: S, trace: T) -> Self {
        Self {
            message: message.into(),
            trace: Some(trace.into()),
        }
    }

    /// Creates a failure and attaches the current backtrace when one is
    /// available.
    ///
    /// Backtrace capture honors `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE`; when
    /// capture is disabled the failure carries no trace.
    pub fn captured<S: Into<String>>(message: S) -> Self {
        let backtrace = Backtrace::capture();
        let trace = match backtrace.status() {
            BacktraceStatus::Captured => Some(backtrace.to_string()),
            _ => None,
        };
        Self {
            message: message.into(),
            trace,
        }
    }

    /// Builds a failure from any error's display text.
    ///
    /// Only the error itself is rendered; its `source()` chain is ignored.
    /// Use [`FailureInput::from_error`](crate::types::FailureInput::from_error)
    /// to flatten a whole chain.
    #[inline]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new(error.to_string())
    }

    /// The failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The origin trace, if one was attached.
    #[inline]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

impl Display for AtomicFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AtomicFailure {}
