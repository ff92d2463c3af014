//! Tracing integration.
//!
//! Attaches the name of a `tracing` span to an [`Error`] as a context frame
//! and reports failures as `tracing` events.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! value-rail = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{Error, Fallible};

/// Span-aware helpers for `Fallible<T, Error>`.
pub trait FallibleSpanExt<T> {
    /// Adds the current span's name as context on `Err`.
    fn with_current_span(self) -> Fallible<T, Error>;

    /// Adds `span`'s name as context on `Err`.
    fn with_span(self, span: &Span) -> Fallible<T, Error>;

    /// Emits an `ERROR` event describing the error, if any, and returns
    /// `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::tracing_ext::FallibleSpanExt;
    /// use value_rail::{Error, Fallible};
    ///
    /// let failed: Fallible<u8> = Fallible::Err(Error::value("quota exceeded"));
    /// assert!(failed.trace_err().is_err());
    /// ```
    fn trace_err(self) -> Fallible<T, Error>;
}

impl<T> FallibleSpanExt<T> for Fallible<T, Error> {
    fn with_current_span(self) -> Fallible<T, Error> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Fallible<T, Error> {
        self.add_context_with(|| span_frame(span))
    }

    fn trace_err(self) -> Fallible<T, Error> {
        self.inspect_err(|error| {
            tracing::error!(
                kind = kind_label(error),
                root_cause = error.root_cause().unwrap_or(""),
                "{}",
                error.description()
            );
        })
    }
}

/// Span-aware helpers for futures resolving to `Fallible<T, Error>`.
///
/// The span is captured when the method is called and read only if the future
/// resolves to `Err`.
#[cfg(feature = "async")]
pub trait FutureSpanExt<T>: core::future::Future<Output = Fallible<T, Error>> + Sized {
    fn in_current_span(
        self,
    ) -> crate::async_ext::Settle<Self, impl FnOnce(Fallible<T, Error>) -> Fallible<T, Error>> {
        self.in_span(Span::current())
    }

    fn in_span(
        self,
        span: Span,
    ) -> crate::async_ext::Settle<Self, impl FnOnce(Fallible<T, Error>) -> Fallible<T, Error>> {
        crate::async_ext::Settle::new(self, move |fallible: Fallible<T, Error>| {
            fallible.with_span(&span)
        })
    }
}

#[cfg(feature = "async")]
impl<Fut, T> FutureSpanExt<T> for Fut where Fut: core::future::Future<Output = Fallible<T, Error>> {}

fn span_frame(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}

fn kind_label(error: &Error) -> &'static str {
    if error.is_exception() {
        "exception"
    } else if error.is_value() {
        "value"
    } else {
        "base"
    }
}
