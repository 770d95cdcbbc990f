//! Async failure capture.
//!
//! The capture logic is identical to the sync guard once the wrapped future
//! settles; the guard introduces no additional suspension and no shared
//! state. Requires the `async` feature:
//!
//! ```toml
//! [dependencies]
//! stacklog = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use stacklog::prelude_async::*;
//!
//! async fn sync_replica() -> Result<(), std::io::Error> {
//!     /* ... */
//! # Ok(())
//! }
//!
//! let (err, _) = sync_replica().guarded_with("syncing replica").await;
//! ```

mod future_ext;
mod guard_future;

pub use future_ext::FutureGuardExt;
pub use guard_future::GuardFuture;
