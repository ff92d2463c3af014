//! The failure payload carried by [`Fallible`](crate::Fallible).
//!
//! An [`Error`] is one of three kinds:
//!
//! - [`ErrorKind::Base`]: no payload, typically described entirely by its context
//! - [`ErrorKind::Exception`]: a captured [`Fault`] (a caught panic or a foreign
//!   `std::error::Error`)
//! - [`ErrorKind::Value`]: an arbitrary diagnostic value chosen by the caller
//!
//! Any kind may carry a [`Context`] chain that grows as the error is reported
//! upward with [`Error::add_context`].
//!
//! # Examples
//!
//! ```
//! use value_rail::Error;
//!
//! #[derive(Debug, PartialEq)]
//! struct NotFound(&'static str);
//!
//! impl std::fmt::Display for NotFound {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{} not found", self.0)
//!     }
//! }
//!
//! let err = Error::value(NotFound("user"))
//!     .add_context("loading profile")
//!     .add_context("handling request");
//!
//! assert_eq!(
//!     err.to_string(),
//!     "user not found\n├── handling request\n└── loading profile"
//! );
//! assert_eq!(err.downcast_value::<NotFound>(), Some(&NotFound("user")));
//! ```
use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use crate::traits::IntoContextMessage;
use crate::types::alloc_type::{Arc, Box, String};
use crate::types::Context;

use alloc::string::ToString;

/// A value that can be carried by [`ErrorKind::Value`].
///
/// Implemented for every `'static` type that is `Debug + Display + PartialEq +
/// Send + Sync`.
pub trait Diagnostic: Any + fmt::Debug + fmt::Display + Send + Sync {
    /// Upcast used for downcasting back to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Equality across type-erased payloads; different concrete types are never equal.
    fn eq_diagnostic(&self, other: &dyn Diagnostic) -> bool;
}

impl<T> Diagnostic for T
where
    T: Any + fmt::Debug + fmt::Display + PartialEq + Send + Sync,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_diagnostic(&self, other: &dyn Diagnostic) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

type CompareFn = fn(&dyn Diagnostic, &dyn Diagnostic) -> Option<Ordering>;

fn compare_as<V>(left: &dyn Diagnostic, right: &dyn Diagnostic) -> Option<Ordering>
where
    V: Diagnostic + PartialOrd,
{
    let left = left.as_any().downcast_ref::<V>()?;
    let right = right.as_any().downcast_ref::<V>()?;
    left.partial_cmp(right)
}

/// A native fault captured as an error payload.
#[derive(Clone)]
pub enum Fault {
    /// A panic caught by [`guarded`](crate::guarded) or [`guarded_async`](crate::guarded_async).
    Panic(String),
    /// A foreign error value.
    #[cfg(feature = "std")]
    Source(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

impl Fault {
    /// Creates a fault describing a panic.
    #[inline]
    pub fn panic<M: Into<String>>(message: M) -> Self {
        Self::Panic(message.into())
    }

    /// Wraps a foreign error.
    #[cfg(feature = "std")]
    #[inline]
    pub fn from_std<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Arc::new(error))
    }

    /// Builds a panic fault from the payload returned by `catch_unwind`.
    ///
    /// `&str` and `String` payloads keep their text; anything else becomes
    /// `"unknown panic"`.
    pub fn from_panic_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Panic(message)
    }

    /// Human-readable description of the fault.
    pub fn message(&self) -> String {
        match self {
            Self::Panic(message) => message.clone(),
            #[cfg(feature = "std")]
            Self::Source(error) => error.to_string(),
        }
    }

    /// Returns `true` for faults produced by a caught panic.
    #[inline]
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic(message) => f.debug_tuple("Panic").field(message).finish(),
            #[cfg(feature = "std")]
            Self::Source(error) => f.debug_tuple("Source").field(error).finish(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panic(message) => write!(f, "panic: {}", message),
            #[cfg(feature = "std")]
            Self::Source(error) => write!(f, "{}", error),
        }
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Panic(a), Self::Panic(b)) => a == b,
            #[cfg(feature = "std")]
            (Self::Source(a), Self::Source(b)) => {
                Arc::ptr_eq(a, b) || a.to_string() == b.to_string()
            },
            #[cfg(feature = "std")]
            _ => false,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Panic(_) => None,
            Self::Source(error) => Some(&**error),
        }
    }
}

/// Type-erased diagnostic payload of [`ErrorKind::Value`].
#[derive(Clone)]
pub struct ValueError {
    payload: Arc<dyn Diagnostic>,
    compare: Option<CompareFn>,
}

impl ValueError {
    /// The payload as a trait object.
    #[inline]
    pub fn payload(&self) -> &dyn Diagnostic {
        &*self.payload
    }

    /// Returns the payload if it is a `V`.
    #[inline]
    pub fn downcast_ref<V: Diagnostic>(&self) -> Option<&V> {
        self.payload().as_any().downcast_ref::<V>()
    }

    /// Returns `true` when the payload was registered with an ordering.
    #[inline]
    pub fn is_comparable(&self) -> bool {
        self.compare.is_some()
    }
}

impl fmt::Debug for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.payload(), f)
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.payload(), f)
    }
}

impl PartialEq for ValueError {
    fn eq(&self, other: &Self) -> bool {
        self.payload().eq_diagnostic(other.payload())
    }
}

impl PartialOrd for ValueError {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        let compare = self.compare.or(other.compare)?;
        compare(self.payload(), other.payload())
    }
}

/// The kind of failure an [`Error`] describes.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    Base,
    Exception(Fault),
    Value(ValueError),
}

impl ErrorKind {
    fn rank(&self) -> u8 {
        match self {
            Self::Base => 0,
            Self::Exception(_) => 1,
            Self::Value(_) => 2,
        }
    }
}

impl PartialOrd for ErrorKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Base, Self::Base) => Some(Ordering::Equal),
            (Self::Exception(a), Self::Exception(b)) => {
                if a == b {
                    Some(Ordering::Equal)
                } else {
                    a.message().partial_cmp(&b.message())
                }
            },
            (Self::Value(a), Self::Value(b)) => a.partial_cmp(b),
            _ => self.rank().partial_cmp(&other.rank()),
        }
    }
}

/// Failure description with an optional chain of context frames.
///
/// `{:?}` renders the same text as `{}` so that `Fallible::unwrap` panics
/// with the description and context trail. `{:#?}` shows the fields.
#[must_use]
#[derive(Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    context: Option<Context>,
}

impl Error {
    /// Creates a payload-free error.
    #[inline]
    pub fn new() -> Self {
        Self { kind: ErrorKind::Base, context: None }
    }

    /// Creates an error wrapping a native fault.
    #[inline]
    pub fn exception(fault: Fault) -> Self {
        Self { kind: ErrorKind::Exception(fault), context: None }
    }

    /// Creates an exception error from a foreign `std::error::Error`.
    #[cfg(feature = "std")]
    #[inline]
    pub fn from_std<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::exception(Fault::from_std(error))
    }

    /// Creates an error carrying an arbitrary diagnostic value.
    ///
    /// Two value errors are equal when their payloads have the same type and
    /// compare equal. They have no ordering unless built with
    /// [`Error::comparable_value`].
    #[inline]
    pub fn value<V: Diagnostic>(value: V) -> Self {
        Self {
            kind: ErrorKind::Value(ValueError { payload: Arc::new(value), compare: None }),
            context: None,
        }
    }

    /// Like [`Error::value`], but orders against other payloads of type `V`.
    #[inline]
    pub fn comparable_value<V>(value: V) -> Self
    where
        V: Diagnostic + PartialOrd,
    {
        Self {
            kind: ErrorKind::Value(ValueError {
                payload: Arc::new(value),
                compare: Some(compare_as::<V>),
            }),
            context: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The outermost context frame, if any context was attached.
    #[inline]
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// The wrapped fault of an exception error.
    #[inline]
    pub fn fault(&self) -> Option<&Fault> {
        match &self.kind {
            ErrorKind::Exception(fault) => Some(fault),
            _ => None,
        }
    }

    /// The payload of a value error, if it is a `V`.
    #[inline]
    pub fn downcast_value<V: Diagnostic>(&self) -> Option<&V> {
        match &self.kind {
            ErrorKind::Value(value) => value.downcast_ref::<V>(),
            _ => None,
        }
    }

    /// Adds `message` as the new outermost context frame.
    ///
    /// The existing chain, including the root cause, is kept beneath it.
    pub fn add_context<M>(self, message: M) -> Self
    where
        M: IntoContextMessage,
    {
        let context = match self.context {
            Some(existing) => existing.wrap(message),
            None => Context::new(message),
        };
        Self { kind: self.kind, context: Some(context) }
    }

    /// Lazily-built variant of [`Error::add_context`].
    #[inline]
    pub fn add_context_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.add_context(f())
    }

    /// Message of the innermost context frame.
    #[inline]
    pub fn root_cause(&self) -> Option<&str> {
        self.context.as_ref().map(|ctx| ctx.root().message())
    }

    /// The error's own description, without context.
    pub fn description(&self) -> String {
        match &self.kind {
            ErrorKind::Base => "error".to_string(),
            ErrorKind::Exception(fault) => fault.to_string(),
            ErrorKind::Value(value) => value.to_string(),
        }
    }

    #[inline]
    pub fn is_exception(&self) -> bool {
        matches!(self.kind, ErrorKind::Exception(_))
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self.kind, ErrorKind::Value(_))
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialOrd for Error {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.kind.partial_cmp(&other.kind)? {
            Ordering::Equal => self.context.partial_cmp(&other.context),
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Base => f.write_str("error")?,
            ErrorKind::Exception(fault) => write!(f, "{}", fault)?,
            ErrorKind::Value(value) => write!(f, "{}", value)?,
        }
        if let Some(context) = &self.context {
            write!(f, "\n{}", context)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).field("context", &self.context).finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl From<Fault> for Error {
    #[inline]
    fn from(fault: Fault) -> Self {
        Self::exception(fault)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Exception(Fault::Source(error)) => Some(&**error),
            _ => None,
        }
    }
}
