//! Trait for converting values into context frame messages.
//!
//! # Implementations
//!
//! - `&'static str` and `Cow<'static, str>` are stored without copying
//! - `String` is stored as an owned message
//! - [`LazyMessage`](crate::LazyMessage) runs its closure at conversion time
//!
//! # Examples
//!
//! ```
//! use value_rail::traits::IntoContextMessage;
//!
//! let borrowed = "reading config".into_context_message();
//! let owned = format!("user {}", 42).into_context_message();
//!
//! assert_eq!(borrowed, "reading config");
//! assert_eq!(owned, "user 42");
//! ```
use crate::types::alloc_type::{Cow, String};

/// Converts a type into the message stored by a [`Context`](crate::Context) frame.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a context message",
    label = "this type does not implement `IntoContextMessage`",
    note = "pass a `&'static str`, a `String`, or wrap a closure in `LazyMessage`"
)]
pub trait IntoContextMessage {
    /// Converts `self` into a context message.
    fn into_context_message(self) -> Cow<'static, str>;
}

impl IntoContextMessage for &'static str {
    #[inline]
    fn into_context_message(self) -> Cow<'static, str> {
        Cow::Borrowed(self)
    }
}

impl IntoContextMessage for String {
    #[inline]
    fn into_context_message(self) -> Cow<'static, str> {
        Cow::Owned(self)
    }
}

impl IntoContextMessage for Cow<'static, str> {
    #[inline]
    fn into_context_message(self) -> Cow<'static, str> {
        self
    }
}
