//! Deferred `Maybe` and `Fallible` values.
//!
//! A future resolving to a [`Maybe`](crate::Maybe) or
//! [`Fallible`](crate::Fallible) gets the full set of combinators through
//! [`FutureMaybeExt`] and [`FutureFallibleExt`], so whole chains are built
//! first and awaited once. The value types themselves gain `*_async`
//! methods taking future-returning callbacks.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! value-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use value_rail::prelude_async::*;
//!
//! async fn fetch_quota(user: &str) -> Fallible<u32> {
//!     if user == "admin" { Fallible::Ok(100) } else { Fallible::Err(Error::value("unknown user")) }
//! }
//!
//! async fn example() {
//!     let quota = fetch_quota("guest")
//!         .add_context("checking upload quota")
//!         .await;
//!     assert_eq!(quota.unwrap_err().root_cause(), Some("checking upload quota"));
//! }
//! ```

mod deferred;
mod fallible_future;
mod guarded_future;
mod maybe_future;
mod settle;
pub mod shape;

pub use fallible_future::{FutureContextExt, FutureFallibleExt};
pub use guarded_future::{guarded_async, GuardedFuture};
pub use maybe_future::FutureMaybeExt;
pub use settle::Settle;
