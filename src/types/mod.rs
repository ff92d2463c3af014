//! The value types and their error payload.
//!
//! - [`Maybe`]: a value that is present or absent
//! - [`Fallible`]: a success value or an error, defaulting to [`Error`]
//! - [`Error`]: a failure kind plus an optional [`Context`] chain
//!
//! # Examples
//!
//! ```
//! use value_rail::{Error, Fallible, Maybe};
//!
//! fn parse_port(raw: Maybe<&str>) -> Fallible<u16> {
//!     raw.ok_or_else(|| Error::value("port is not set"))
//!         .and_then(|s| Fallible::from(s.parse::<u16>()).map_err(Error::from_std))
//!         .add_context("reading listener config")
//! }
//!
//! assert_eq!(parse_port(Maybe::some("8080")), Fallible::Ok(8080));
//! assert!(parse_port(Maybe::none()).is_err());
//! ```
pub mod alloc_type;
pub mod context;
pub mod context_format;
pub mod error;
pub mod fallible;
pub mod lazy_message;
pub mod maybe;

pub use context::{Context, Frames};
pub use context_format::{ContextFormat, ContextFormatter};
pub use error::{Diagnostic, Error, ErrorKind, Fault, ValueError};
pub use fallible::Fallible;
pub use lazy_message::LazyMessage;
pub use maybe::Maybe;
