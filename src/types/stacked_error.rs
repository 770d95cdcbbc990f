use std::fmt::{Display, Write};

use serde::{Deserialize, Serialize};

use crate::traits::IntoFailure;
use crate::types::atomic_failure::AtomicFailure;
use crate::types::failure_input::FailureInput;
use crate::types::FailureVec;

/// An ordered, flattened collection of atomic failures.
///
/// The stack reads outermost to innermost: context added while unwinding is
/// prepended, so the first entry is the most recently added context and the
/// last entry is the root cause. Construction never fails regardless of input
/// shape, which is what makes capturing and logging unconditionally safe.
///
/// # Examples
///
/// ```
/// use stacklog::{stack, StackedError};
///
/// let inner = StackedError::build("root cause");
/// let err = stack!["while saving order", inner];
///
/// assert_eq!(err.len(), 2);
/// assert_eq!(err.head_message(), "while saving order");
/// assert_eq!(err.to_string(), "while saving order");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedError {
    stack: FailureVec,
}

impl StackedError {
    /// Builds a stack by flattening the input depth-first, left to right.
    ///
    /// Prior [`StackedError`]s are spliced in whole, scalars and messages
    /// become single entries, and nested sequences are recursed into; the
    /// result is the concatenation of all contributions in input order. Use
    /// the [`stack!`](crate::stack) macro for heterogeneous input lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use stacklog::StackedError;
    ///
    /// let inner = StackedError::build(vec!["b", "c"]);
    /// let err = StackedError::wrap("a", inner);
    /// let texts: Vec<_> = err.iter().map(|f| f.message()).collect();
    /// assert_eq!(texts, ["a", "b", "c"]);
    /// ```
    pub fn build<I: IntoFailure>(input: I) -> Self {
        let mut stack = FailureVec::new();
        flatten_into(&mut stack, input.into_failure());
        Self { stack }
    }

    /// Prepends one level of context ahead of an existing failure.
    ///
    /// Equivalent to `build([context, inner])`: the new context always
    /// precedes the prior entries, so re-wrapping grows the stack by exactly
    /// the context's contribution.
    #[inline]
    pub fn wrap<C: IntoFailure, I: IntoFailure>(context: C, inner: I) -> Self {
        Self::build(FailureInput::List(vec![
            context.into_failure(),
            inner.into_failure(),
        ]))
    }

    /// The flattened failure stack, outermost first.
    #[inline]
    pub fn stack(&self) -> &[AtomicFailure] {
        &self.stack
    }

    /// Iterates the stack in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, AtomicFailure> {
        self.stack.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The head (outermost) entry's message, or `"Unknown error"` for an
    /// empty stack.
    ///
    /// This is the textual identity of the whole stack: `Display` and
    /// comparisons against a single message go through it.
    #[inline]
    pub fn head_message(&self) -> &str {
        self.stack
            .first()
            .map(AtomicFailure::message)
            .unwrap_or("Unknown error")
    }

    /// Renders the stack, one `error: <message>` line per entry in stack
    /// order, each followed by its indented origin trace when present.
    ///
    /// An empty stack renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use stacklog::StackedError;
    ///
    /// let err = StackedError::build(vec!["a", "b"]);
    /// assert_eq!(err.stringify(), "error: a\nerror: b");
    /// ```
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        for (i, failure) in self.stack.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            // Infallible for String targets.
            let _ = write!(out, "error: {}", failure.message());
            if let Some(trace) = failure.trace() {
                for line in trace.lines() {
                    out.push('\n');
                    out.push_str("    ");
                    out.push_str(line);
                }
            }
        }
        out
    }
}

fn flatten_into(stack: &mut FailureVec, input: FailureInput) {
    match input {
        FailureInput::Atomic(failure) => stack.push(failure),
        FailureInput::Wrapped(inner) => stack.extend(inner.stack),
        FailureInput::List(inputs) => {
            for item in inputs {
                flatten_into(stack, item);
            }
        }
    }
}

impl Display for StackedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.head_message())
    }
}

impl std::error::Error for StackedError {}

impl From<FailureInput> for StackedError {
    #[inline]
    fn from(input: FailureInput) -> Self {
        Self::build(input)
    }
}

impl From<AtomicFailure> for StackedError {
    #[inline]
    fn from(failure: AtomicFailure) -> Self {
        Self::build(failure)
    }
}
