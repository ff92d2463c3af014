//! Async prelude: everything from [`prelude`](crate::prelude) plus the
//! deferred combinators.
//!
//! ```rust
//! use value_rail::prelude_async::*;
//!
//! async fn example() {
//!     let total = async { Maybe::some(2) }
//!         .zip_with(Maybe::some(3), |a, b| a + b)
//!         .unwrap_or_default()
//!         .await;
//!     assert_eq!(total, 5);
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{
    guarded_async, FutureContextExt, FutureFallibleExt, FutureMaybeExt, GuardedFuture, Settle,
};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{FallibleSpanExt, FutureSpanExt};
