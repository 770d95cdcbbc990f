//! Trait for converting arbitrary error-like values into [`FailureInput`].
//!
//! This is the boundary that makes [`StackedError::build`] safe to call with
//! anything vaguely error-shaped: messages, scalars, prior stacks, whole
//! sequences of the above. Conversion never fails; values with no better
//! rendering fall back to their display text.
//!
//! # Implementations
//!
//! - `String`, `&str`, `Cow<'static, str>` - one message entry
//! - integer and float scalars - display text as one entry
//! - [`AtomicFailure`] - one entry, kept verbatim
//! - [`StackedError`] - spliced in, preserving its internal order
//! - `Vec<T: IntoFailure>` - flattened depth-first, in order
//! - `std::io::Error` - one entry from its display text
//!
//! For custom error types, use [`impl_failure!`](crate::impl_failure) or
//! implement the trait manually.
//!
//! [`StackedError::build`]: crate::StackedError::build

use std::borrow::Cow;

use crate::types::{AtomicFailure, FailureInput, StackedError};

/// Converts a value into a [`FailureInput`] for stack construction.
///
/// # Implementing for Custom Types
///
/// ```
/// use stacklog::{impl_failure, StackedError};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct DbError {
///     table: String,
/// }
///
/// impl fmt::Display for DbError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "query on `{}` failed", self.table)
///     }
/// }
///
/// impl_failure!(DbError);
///
/// let err = StackedError::build(DbError { table: "users".into() });
/// assert_eq!(err.head_message(), "query on `users` failed");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be captured into a failure stack",
    label = "this type does not implement `IntoFailure`",
    note = "implement `IntoFailure` manually or use the `impl_failure!({Self})` macro for `Display` types"
)]
pub trait IntoFailure {
    /// Converts `self` into a [`FailureInput`].
    fn into_failure(self) -> FailureInput;
}

impl IntoFailure for FailureInput {
    /// Identity conversion (no-op).
    #[inline]
    fn into_failure(self) -> FailureInput {
        self
    }
}

impl IntoFailure for AtomicFailure {
    #[inline]
    fn into_failure(self) -> FailureInput {
        FailureInput::Atomic(self)
    }
}

impl IntoFailure for StackedError {
    /// A prior stack is spliced in whole, preserving its order.
    #[inline]
    fn into_failure(self) -> FailureInput {
        FailureInput::Wrapped(self)
    }
}

impl IntoFailure for String {
    #[inline]
    fn into_failure(self) -> FailureInput {
        FailureInput::Atomic(AtomicFailure::new(self))
    }
}

impl IntoFailure for &str {
    #[inline]
    fn into_failure(self) -> FailureInput {
        FailureInput::Atomic(AtomicFailure::new(self))
    }
}

impl IntoFailure for Cow<'static, str> {
    #[inline]
    fn into_failure(self) -> FailureInput {
        FailureInput::Atomic(AtomicFailure::new(self))
    }
}

impl IntoFailure for std::io::Error {
    #[inline]
    fn into_failure(self) -> FailureInput {
        FailureInput::Atomic(AtomicFailure::new(self.to_string()))
    }
}

impl<T: IntoFailure> IntoFailure for Vec<T> {
    #[inline]
    fn into_failure(self) -> FailureInput {
        FailureInput::List(self.into_iter().map(IntoFailure::into_failure).collect())
    }
}

macro_rules! impl_scalar_failure {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoFailure for $ty {
                #[inline]
                fn into_failure(self) -> FailureInput {
                    FailureInput::Atomic(AtomicFailure::new(self.to_string()))
                }
            }
        )+
    };
}

impl_scalar_failure!(i32, i64, u32, u64, usize, f32, f64);
