//! Extension trait for `Future<Output = Result<T, E>>`.
//!
//! Provides `.guarded()` and `.guarded_with()` for futures, mirroring the
//! sync [`guard`](crate::guard::guard) / [`Guard`](crate::guard::Guard) pair.

use core::future::Future;

use crate::guard::validated_context;
use crate::traits::IntoFailure;

use super::guard_future::GuardFuture;

/// Extension trait capturing a future's settled failure into a
/// [`StackedError`](crate::StackedError).
///
/// # Examples
///
/// ```
/// use stacklog::prelude_async::*;
///
/// async fn fetch(id: u64) -> Result<String, String> {
///     Err(format!("record {} missing", id))
/// }
///
/// # async fn example() {
/// let (err, value) = fetch(7).guarded_with("loading record").await;
/// assert!(value.is_none());
/// assert_eq!(err.unwrap().len(), 2);
/// # }
/// ```
pub trait FutureGuardExt<T, E>: Future<Output = Result<T, E>> + Sized
where
    E: IntoFailure,
{
    /// Captures the settled failure with no added context.
    fn guarded(self) -> GuardFuture<Self> {
        GuardFuture::new(self, None)
    }

    /// Captures the settled failure with one context entry ahead of it.
    ///
    /// # Panics
    ///
    /// Panics if `context` is empty or blank, matching
    /// [`Guard::with_context`](crate::guard::Guard::with_context).
    fn guarded_with<S: Into<String>>(self, context: S) -> GuardFuture<Self> {
        GuardFuture::new(self, Some(validated_context(context.into())))
    }
}

impl<Fut, T, E> FutureGuardExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
    E: IntoFailure,
{
}
