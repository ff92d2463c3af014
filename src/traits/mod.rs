//! Traits connecting the crate's types to the rest of the ecosystem.
//!
//! - [`IntoContextMessage`]: values accepted as context frame messages
//! - [`OptionExt`] / [`ResultExt`]: conversions from the standard library types
//!
//! # Examples
//!
//! ```
//! use value_rail::traits::ResultExt;
//! use value_rail::Fallible;
//!
//! let checked: Fallible<u8, &str> = Err::<u8, _>("overflow").into_fallible();
//! assert_eq!(checked, Fallible::Err("overflow"));
//! ```

pub mod into_context_message;
pub mod std_ext;

pub use into_context_message::IntoContextMessage;
pub use std_ext::{OptionExt, ResultExt};
