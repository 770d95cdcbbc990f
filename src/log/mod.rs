//! Structured one-line JSON logging.
//!
//! [`Emitter`] merges process-wide default metadata, the recognized fields of
//! a [`Record`], and passthrough fields into one ordered JSON object and
//! writes it through an injectable sink. The `errors` field renders a
//! [`StackedError`](crate::StackedError) (or any mix of failures) into a
//! single newline-joined text block.
//!
//! The whole path is best-effort: malformed inputs degrade to omitted fields
//! and a failing sink is ignored. Logging never becomes a new source of
//! crashes.
//!
//! # Examples
//!
//! ```
//! use stacklog::{guard, Emitter, Level, Record};
//!
//! let emitter = Emitter::from_env();
//! let (err, _) = guard(|| Err::<(), _>("lease expired"));
//!
//! emitter.log(
//!     Record::new()
//!         .level(Level::Error)
//!         .message("renewal failed")
//!         .errors(err.unwrap_or_default()),
//! );
//! ```

pub mod emitter;
pub mod level;
pub mod record;

pub use emitter::{fresh_op_id, Emitter, LOG_META_ENV};
pub use level::Level;
pub use record::{ErrorsValue, Record};
