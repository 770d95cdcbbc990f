use serde::{Deserialize, Serialize};

use crate::types::atomic_failure::AtomicFailure;
use crate::types::stacked_error::StackedError;

/// Closed input variant for [`StackedError::build`].
///
/// Heterogeneous error-like inputs (messages, scalars, prior stacks, nested
/// sequences) are normalized into this shape before flattening, so the
/// flattening algorithm is a plain pattern match with no runtime type
/// inspection.
///
/// # Examples
///
/// ```
/// use stacklog::{FailureInput, StackedError};
///
/// let input = FailureInput::List(vec![
///     FailureInput::from("context"),
///     FailureInput::from(StackedError::build("root cause")),
/// ]);
/// let err = StackedError::build(input);
/// assert_eq!(err.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FailureInput {
    /// A single leaf failure.
    Atomic(AtomicFailure),
    /// An already-flattened stack, spliced in as-is.
    Wrapped(StackedError),
    /// A nested sequence, flattened depth-first in order.
    List(Vec<FailureInput>),
}

impl FailureInput {
    /// Flattens an error and its `source()` chain, outermost first.
    ///
    /// This is the Rust rendering of a nested failure object: each link in the
    /// chain becomes one [`AtomicFailure`], so building a stack from the
    /// result preserves context-before-root-cause ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use stacklog::{FailureInput, StackedError};
    ///
    /// let io = std::io::Error::other("disk offline");
    /// let err = StackedError::build(FailureInput::from_error(&io));
    /// assert_eq!(err.head_message(), "disk offline");
    /// ```
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut chain = vec![FailureInput::Atomic(AtomicFailure::from_error(error))];
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(FailureInput::Atomic(AtomicFailure::from_error(cause)));
            source = cause.source();
        }
        if chain.len() == 1 {
            chain.remove(0)
        } else {
            FailureInput::List(chain)
        }
    }
}

impl From<AtomicFailure> for FailureInput {
    #[inline]
    fn from(failure: AtomicFailure) -> Self {
        FailureInput::Atomic(failure)
    }
}

impl From<StackedError> for FailureInput {
    #[inline]
    fn from(error: StackedError) -> Self {
        FailureInput::Wrapped(error)
    }
}

impl From<&str> for FailureInput {
    #[inline]
    fn from(message: &str) -> Self {
        FailureInput::Atomic(AtomicFailure::new(message))
    }
}

impl From<String> for FailureInput {
    #[inline]
    fn from(message: String) -> Self {
        FailureInput::Atomic(AtomicFailure::new(message))
    }
}

impl From<Vec<FailureInput>> for FailureInput {
    #[inline]
    fn from(inputs: Vec<FailureInput>) -> Self {
        FailureInput::List(inputs)
    }
}
