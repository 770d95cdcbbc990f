//! Async prelude: the sync prelude plus the future guard surface.
//!
//! # Examples
//!
//! ```ignore
//! use stacklog::prelude_async::*;
//!
//! async fn handle() -> Captured<String> {
//!     fetch_user().guarded_with("fetching user").await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureGuardExt, GuardFuture};
