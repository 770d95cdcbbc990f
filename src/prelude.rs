//! Convenience re-exports for common usage patterns.
//!
//! # Examples
//!
//! ```
//! use stacklog::prelude::*;
//!
//! let (err, _) = guard(|| Err::<(), _>("boom"));
//! let err = stack!["handling request", err.unwrap()];
//!
//! Emitter::new().log(Record::new().level(Level::Error).errors(err));
//! ```

// Macros
pub use crate::{impl_failure, stack};

// Core types
pub use crate::types::{AtomicFailure, Captured, FailureInput, StackedError};

// Guards
pub use crate::guard::{guard, Guard};

// Logging
pub use crate::log::{fresh_op_id, Emitter, ErrorsValue, Level, Record};

// Traits
pub use crate::traits::{CaptureExt, IntoFailure};
