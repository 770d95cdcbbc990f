//! Flattened error stacks, failure-capturing call guards, and one-line
//! structured JSON logging.
//!
//! Three pieces compose: [`StackedError`] flattens arbitrarily nested
//! failures into one ordered stack, the guards ([`guard`], [`Guard`]) turn
//! raised failures into `(error, value)` pairs while accumulating context
//! across call boundaries, and [`Emitter`] serializes a fixed log schema,
//! including a flattened error stack, to a single JSON line.
//!
//! # Examples
//!
//! ## Capturing and wrapping failures
//!
//! ```
//! use stacklog::{stack, Guard};
//!
//! fn fetch_user() -> stacklog::Captured<String> {
//!     Guard::with_context("fetching user").run(|| Err::<String, _>("connection refused"))
//! }
//!
//! let (err, _) = fetch_user();
//! let err = err.unwrap();
//! assert_eq!(err.to_string(), "fetching user");
//!
//! // Re-wrap with more context while unwinding; the stack stays flat.
//! let outer = stack!["handling request", err];
//! assert_eq!(outer.len(), 3);
//! ```
//!
//! ## Logging a failure stack
//!
//! ```
//! use stacklog::{Emitter, Level, Record, StackedError};
//!
//! let emitter = Emitter::new();
//! let err = StackedError::build(vec!["saving order", "deadlock detected"]);
//!
//! emitter.log(
//!     Record::new()
//!         .level(Level::Error)
//!         .message("order rejected")
//!         .time(34)
//!         .errors(err),
//! );
//! // {"level":"ERROR","message":"order rejected","metric":34,"unit":"ms",
//! //  "errors":"error: saving order\nerror: deadlock detected"}
//! ```
/// Failure-capturing call wrappers.
pub mod guard;
/// Structured one-line JSON logging.
pub mod log;
/// Macros for stack construction and `IntoFailure` derivation.
pub mod macros;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Conversion and extension traits.
pub mod traits;
/// The failure data model.
pub mod types;

/// Async failure capture (requires the `async` feature).
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude (requires the `async` feature).
#[cfg(feature = "async")]
pub mod prelude_async;

pub use guard::{guard, Guard};
pub use log::{fresh_op_id, Emitter, ErrorsValue, Level, Record, LOG_META_ENV};
pub use traits::{CaptureExt, IntoFailure};
pub use types::{AtomicFailure, Captured, FailureInput, FailureVec, StackedError};
