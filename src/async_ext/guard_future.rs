//! Future wrapper that resolves to a captured failure pair.
//!
//! `GuardFuture` wraps a `Future<Output = Result<T, E>>` and applies the same
//! capture logic as the synchronous guard once the inner future settles. The
//! wrapper adds no suspension points of its own.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::guard::{capture, panic_failure};
use crate::traits::IntoFailure;
use crate::types::Captured;

pin_project! {
    /// A future whose settled failure is captured into a `StackedError`.
    ///
    /// On `Ok` the output is `(None, Some(value))`; on `Err` or a panic
    /// raised while polling, `(Some(error), None)` with the configured
    /// context entry, if any, ahead of the failure.
    ///
    /// # Cancel Safety
    ///
    /// Dropping a `GuardFuture` is ordinary cancellation: no value is
    /// produced and nothing is captured.
    #[must_use = "futures do nothing unless polled"]
    pub struct GuardFuture<Fut> {
        #[pin]
        future: Fut,
        context: Option<String>,
        done: bool,
    }
}

impl<Fut> GuardFuture<Fut> {
    /// Creates a guard future with an optional context entry.
    #[inline]
    pub fn new(future: Fut, context: Option<String>) -> Self {
        Self {
            future,
            context,
            done: false,
        }
    }
}

impl<Fut, T, E> Future for GuardFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
{
    type Output = Captured<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        assert!(!*this.done, "GuardFuture polled after completion");

        let future = this.future;
        match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(Ok(value))) => {
                *this.done = true;
                Poll::Ready((None, Some(value)))
            }
            Ok(Poll::Ready(Err(error))) => {
                *this.done = true;
                let context = this.context.take();
                Poll::Ready((Some(capture(context.as_deref(), error.into_failure())), None))
            }
            Err(payload) => {
                *this.done = true;
                let context = this.context.take();
                Poll::Ready((Some(capture(context.as_deref(), panic_failure(payload))), None))
            }
        }
    }
}

impl<Fut, T, E> FusedFuture for GuardFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: IntoFailure,
{
    fn is_terminated(&self) -> bool {
        self.done || self.future.is_terminated()
    }
}
