//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use value_rail::prelude::*;
//!
//! let port = Some("8080").into_maybe().map(|s| s.len());
//! assert_eq!(port, Maybe::some(4));
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Maybe`], [`Fallible`], [`Error`], [`ErrorKind`], [`Fault`], [`Context`], [`LazyMessage`]
//! - **Traits**: [`OptionExt`], [`ResultExt`], [`IntoContextMessage`]
//! - **Functions**: `guarded`, `guarded_result` (with `std`)

pub use crate::traits::{IntoContextMessage, OptionExt, ResultExt};
pub use crate::types::{Context, Error, ErrorKind, Fallible, Fault, LazyMessage, Maybe};

#[cfg(feature = "std")]
pub use crate::guard::{guarded, guarded_result};
