//! # value-rail
//!
//! Explicit optional and fallible values with a uniform set of combinators.
//!
//! - [`Maybe<T>`] is a value that may be absent.
//! - [`Fallible<T, E>`] is a success value or an error; `E` defaults to
//!   [`Error`], which carries a failure kind and a chain of [`Context`]
//!   frames describing where the failure travelled.
//!
//! Both types expose the same vocabulary (`map`, `and_then`, `filter`,
//! `match_with`, `unwrap_or_else`, ...) and convert freely to and from
//! [`Option`] and [`Result`]. With the `async` feature every operation is
//! also available on futures resolving to these types, and panics can be
//! captured as errors with [`guarded`] and [`guarded_async`].
//!
//! # Examples
//!
//! ```
//! use value_rail::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Account {
//!     id: u32,
//!     balance: i64,
//! }
//!
//! fn find(id: u32) -> Maybe<Account> {
//!     if id == 1 { Maybe::some(Account { id, balance: 250 }) } else { Maybe::none() }
//! }
//!
//! fn withdraw(id: u32, amount: i64) -> Fallible<i64> {
//!     find(id)
//!         .ok_or_else(|| Error::value(format!("account {id} does not exist")))
//!         .and_then(|account| {
//!             if account.balance >= amount {
//!                 Fallible::Ok(account.balance - amount)
//!             } else {
//!                 Fallible::Err(Error::value("insufficient funds"))
//!             }
//!         })
//!         .add_context_with(|| format!("withdrawing {amount} from {id}"))
//! }
//!
//! assert_eq!(withdraw(1, 100), Fallible::Ok(150));
//!
//! let err = withdraw(2, 100).unwrap_err();
//! assert_eq!(err.to_string(), "account 2 does not exist\n└── withdrawing 100 from 2");
//! ```
//!
//! # Feature Flags
//!
//! | Feature   | Description                                        |
//! |-----------|----------------------------------------------------|
//! | `std`     | Panic capture and `std::error::Error` interop      |
//! | `async`   | Deferred combinators and `guarded_async` (default) |
//! | `serde`   | `Serialize`/`Deserialize` for the value types      |
//! | `tracing` | Span context frames and error events               |
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between the value types and `Option`/`Result`
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension and conversion traits
pub mod traits;
/// `Maybe`, `Fallible`, `Error` and context chains
pub mod types;

/// Panic capture (requires `std` feature)
#[cfg(feature = "std")]
pub mod guard;

/// Deferred combinators for futures (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::transpose_into_std;
pub use traits::*;
pub use types::{
    Context, ContextFormat, ContextFormatter, Diagnostic, Error, ErrorKind, Fallible, Fault,
    LazyMessage, Maybe, ValueError,
};

#[cfg(feature = "std")]
pub use guard::{guarded, guarded_result};

#[cfg(feature = "async")]
pub use async_ext::guarded_async;
