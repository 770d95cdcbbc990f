//! The failure data model: atomic failures, input normalization, and the
//! flattened stack everything else builds on.
//!
//! # Examples
//!
//! ```
//! use stacklog::{stack, StackedError};
//!
//! let io = StackedError::build("connection reset");
//! let err = stack!["while syncing replica", io];
//!
//! println!("{}", err.stringify());
//! // error: while syncing replica
//! // error: connection reset
//! ```
use smallvec::SmallVec;

pub mod atomic_failure;
pub mod failure_input;
pub mod stacked_error;

pub use atomic_failure::AtomicFailure;
pub use failure_input::FailureInput;
pub use stacked_error::StackedError;

/// SmallVec-backed storage for flattened stacks.
///
/// Inline capacity of 4 keeps the common short context chains off the heap.
pub type FailureVec = SmallVec<[AtomicFailure; 4]>;

/// The uniform return shape of a guarded call.
///
/// Exactly one side is populated: `(Some(error), None)` on any captured
/// failure, `(None, Some(value))` on normal completion.
pub type Captured<T> = (Option<StackedError>, Option<T>);
