//! Failure-capturing call wrappers.
//!
//! A guarded unit of work never lets a failure escape: both `Err` returns and
//! panics are converted into a [`StackedError`] and handed back as the first
//! half of a [`Captured`] pair. This is the sole mechanism by which call-site
//! failures become values instead of control flow, and it is what lets nested
//! guarded calls compose their context chains (see [`StackedError::wrap`]).
//!
//! Two entry points share one contract:
//! - [`guard`] wraps a synchronous unit with no added context.
//! - [`Guard::with_context`] prefixes one context entry ahead of whatever the
//!   unit raises; [`Guard::run`] and [`Guard::run_async`] execute under it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::traits::IntoFailure;
use crate::types::{Captured, FailureInput, StackedError};

/// Runs a unit of work, capturing any failure into a [`StackedError`].
///
/// On normal completion returns `(None, Some(value))`; on an `Err` return or
/// a panic inside the unit returns `(Some(error), None)`. A panic payload is
/// rendered from its `&str`/`String` message when it has one.
///
/// # Examples
///
/// ```
/// use stacklog::guard;
///
/// let (err, value) = guard(|| Ok::<_, &str>(21 * 2));
/// assert_eq!(value, Some(42));
/// assert!(err.is_none());
///
/// let (err, value) = guard(|| Err::<i32, _>("out of disk"));
/// assert!(value.is_none());
/// assert_eq!(err.unwrap().head_message(), "out of disk");
/// ```
pub fn guard<T, E, F>(unit: F) -> Captured<T>
where
    F: FnOnce() -> Result<T, E>,
    E: IntoFailure,
{
    run_captured(None, unit)
}

/// A guard configured with one level of caller-supplied context.
///
/// The context message is prepended ahead of whatever the guarded unit
/// raises, so the resulting stack reads context first, root cause last.
///
/// # Examples
///
/// ```
/// use stacklog::Guard;
///
/// let load = Guard::with_context("loading profile");
/// let (err, _) = load.run(|| Err::<(), _>("record missing"));
///
/// let texts: Vec<_> = err.unwrap().iter().map(|f| f.message().to_string()).collect();
/// assert_eq!(texts, ["loading profile", "record missing"]);
/// ```
#[derive(Debug, Clone)]
pub struct Guard {
    context: String,
}

impl Guard {
    /// Creates a guard that prefixes every captured failure with `context`.
    ///
    /// # Panics
    ///
    /// Panics if `context` is empty or blank. A guard without a usable
    /// context message is a programming error, reported at configuration
    /// time rather than deferred to invocation.
    pub fn with_context<S: Into<String>>(context: S) -> Self {
        Self {
            context: validated_context(context.into()),
        }
    }

    /// The configured context message.
    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Runs a synchronous unit of work under this guard.
    ///
    /// Interpolate live call arguments into the context by constructing the
    /// guard at call time:
    ///
    /// ```
    /// use stacklog::Guard;
    ///
    /// fn greet(name: &str, age: u32) -> (Option<stacklog::StackedError>, Option<String>) {
    ///     Guard::with_context(format!("greeting {} ({})", name, age))
    ///         .run(|| Err::<String, _>("no greeting available"))
    /// }
    ///
    /// let (err, _) = greet("Peter", 32);
    /// assert_eq!(err.unwrap().head_message(), "greeting Peter (32)");
    /// ```
    pub fn run<T, E, F>(&self, unit: F) -> Captured<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: IntoFailure,
    {
        run_captured(Some(self.context.as_str()), unit)
    }

    /// Wraps a future so that its settled failure is captured under this
    /// guard's context.
    ///
    /// The returned future resolves to a [`Captured`] pair; the guard adds no
    /// suspension points of its own.
    #[cfg(feature = "async")]
    pub fn run_async<Fut, T, E>(&self, future: Fut) -> crate::async_ext::GuardFuture<Fut>
    where
        Fut: std::future::Future<Output = Result<T, E>>,
        E: IntoFailure,
    {
        crate::async_ext::GuardFuture::new(future, Some(self.context.clone()))
    }
}

fn run_captured<T, E, F>(context: Option<&str>, unit: F) -> Captured<T>
where
    F: FnOnce() -> Result<T, E>,
    E: IntoFailure,
{
    match panic::catch_unwind(AssertUnwindSafe(unit)) {
        Ok(Ok(value)) => (None, Some(value)),
        Ok(Err(error)) => (Some(capture(context, error.into_failure())), None),
        Err(payload) => (Some(capture(context, panic_failure(payload))), None),
    }
}

/// Builds the captured stack: context entry first when configured, then the
/// raised failure's contribution.
pub(crate) fn capture(context: Option<&str>, failure: FailureInput) -> StackedError {
    match context {
        Some(message) => StackedError::wrap(message, failure),
        None => StackedError::build(failure),
    }
}

/// Renders a panic payload as a failure input.
pub(crate) fn panic_failure(payload: Box<dyn Any + Send>) -> FailureInput {
    let message = if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unhandled panic".to_string()
    };
    FailureInput::from(message)
}

/// Rejects empty or blank context messages at configuration time.
pub(crate) fn validated_context(context: String) -> String {
    assert!(
        !context.trim().is_empty(),
        "guard context message must not be empty"
    );
    context
}
