//! Extension trait for converting `Result` values into the captured shape.
//!
//! Where [`guard`](crate::guard::guard) wraps a unit of work before it runs,
//! these methods convert a `Result` you already hold, without verbose
//! destructuring at every call site.

use crate::traits::IntoFailure;
use crate::types::{Captured, StackedError};

/// Extension methods turning `Result<T, E>` into captured failures.
///
/// # Examples
///
/// ```
/// use stacklog::CaptureExt;
///
/// let result: Result<u32, &str> = Err("timeout");
/// let (err, value) = result.captured_ctx("pinging replica");
///
/// assert!(value.is_none());
/// assert_eq!(err.unwrap().len(), 2);
/// ```
pub trait CaptureExt<T, E> {
    /// Converts into a [`Captured`] pair with no added context.
    fn captured(self) -> Captured<T>;

    /// Converts into a [`Captured`] pair, prefixing one context entry on
    /// failure.
    fn captured_ctx<C: IntoFailure>(self, context: C) -> Captured<T>;

    /// Converts the error side into a [`StackedError`], keeping `Result`
    /// ergonomics (`?`) for callers who prefer them over the tuple shape.
    fn stacked(self) -> Result<T, StackedError>;
}

impl<T, E: IntoFailure> CaptureExt<T, E> for Result<T, E> {
    #[inline]
    fn captured(self) -> Captured<T> {
        match self {
            Ok(value) => (None, Some(value)),
            Err(error) => (Some(StackedError::build(error)), None),
        }
    }

    #[inline]
    fn captured_ctx<C: IntoFailure>(self, context: C) -> Captured<T> {
        match self {
            Ok(value) => (None, Some(value)),
            Err(error) => (Some(StackedError::wrap(context, error)), None),
        }
    }

    #[inline]
    fn stacked(self) -> Result<T, StackedError> {
        self.map_err(StackedError::build)
    }
}
