//! Deferred context messages.
//!
//! [`LazyMessage`] wraps a closure so the message string is only built when a
//! frame is actually attached, i.e. when the value is an `Err`.
//!
//! # Examples
//!
//! ```
//! use value_rail::{Error, Fallible, LazyMessage};
//!
//! let user_id = 7;
//! let ok: Fallible<i32> = Fallible::Ok(1);
//! let ok = ok.add_context(LazyMessage::new(|| format!("loading user {user_id}")));
//! assert_eq!(ok, Fallible::Ok(1));
//!
//! let err: Fallible<i32> = Fallible::Err(Error::new());
//! let err = err.add_context(LazyMessage::new(|| format!("loading user {user_id}")));
//! assert!(err.unwrap_err().to_string().contains("loading user 7"));
//! ```
use crate::traits::IntoContextMessage;
use crate::types::alloc_type::{Cow, String};

/// A context message produced on demand.
#[repr(transparent)]
pub struct LazyMessage<F> {
    generator: F,
}

impl<F> LazyMessage<F> {
    /// Creates a lazy message from a closure.
    #[inline]
    pub fn new(generator: F) -> Self {
        Self { generator }
    }
}

impl<F> IntoContextMessage for LazyMessage<F>
where
    F: FnOnce() -> String,
{
    #[inline]
    fn into_context_message(self) -> Cow<'static, str> {
        Cow::Owned((self.generator)())
    }
}
