//! Macros for heterogeneous stack construction and `IntoFailure` derivation.

/// Builds a [`StackedError`](crate::StackedError) from a heterogeneous list
/// of inputs, flattened depth-first in order.
///
/// Each argument may be anything implementing
/// [`IntoFailure`](crate::IntoFailure): messages, scalars, prior stacks, or
/// vectors of the above. `stack!()` with no arguments yields an empty stack
/// whose textual identity is `"Unknown error"`.
///
/// # Examples
///
/// ```
/// use stacklog::{stack, StackedError};
///
/// let inner = StackedError::build(vec!["b", "c"]);
/// let err = stack!["a", inner];
///
/// let texts: Vec<_> = err.iter().map(|f| f.message()).collect();
/// assert_eq!(texts, ["a", "b", "c"]);
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::StackedError::default()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::StackedError::build($crate::FailureInput::List(vec![
            $($crate::IntoFailure::into_failure($input)),+
        ]))
    };
}

/// Implements [`IntoFailure`](crate::IntoFailure) for a `Display` type.
///
/// The value's display text becomes a single
/// [`AtomicFailure`](crate::AtomicFailure) entry.
///
/// # Examples
///
/// ```
/// use stacklog::{guard, impl_failure};
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct QuotaExceeded(u64);
///
/// impl fmt::Display for QuotaExceeded {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "quota exceeded by {} bytes", self.0)
///     }
/// }
///
/// impl_failure!(QuotaExceeded);
///
/// let (err, _) = guard(|| Err::<(), _>(QuotaExceeded(512)));
/// assert_eq!(err.unwrap().head_message(), "quota exceeded by 512 bytes");
/// ```
#[macro_export]
macro_rules! impl_failure {
    ($type:ty) => {
        impl $crate::IntoFailure for $type {
            fn into_failure(self) -> $crate::FailureInput {
                $crate::FailureInput::Atomic($crate::AtomicFailure::new(self.to_string()))
            }
        }
    };
}
