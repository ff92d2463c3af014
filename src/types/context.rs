//! Chained diagnostic context attached to an [`Error`](crate::Error).
//!
//! A [`Context`] is an immutable, singly linked chain of messages. The head of
//! the chain is the most recently added (outermost) frame; following `inner`
//! links walks towards the root cause, which is always the last frame.
//!
//! # Examples
//!
//! ```
//! use value_rail::Context;
//!
//! let ctx = Context::new("connection refused")
//!     .wrap("fetching user profile")
//!     .wrap("rendering dashboard");
//!
//! assert_eq!(ctx.message(), "rendering dashboard");
//! assert_eq!(ctx.root().message(), "connection refused");
//! assert_eq!(
//!     ctx.to_string(),
//!     "├── rendering dashboard\n├── fetching user profile\n└── connection refused"
//! );
//! ```
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::traits::IntoContextMessage;
use crate::types::alloc_type::{Box, Cow, String, Vec};
use crate::types::context_format::{ContextFormat, ContextFormatter};
#[cfg(feature = "serde")]
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// One frame of a context chain plus everything beneath it.
///
/// Every trait impl below walks the chain with a loop, so chains of any depth
/// can be cloned, compared, hashed and dropped without growing the stack.
#[must_use]
pub struct Context {
    message: Cow<'static, str>,
    inner: Option<Box<Context>>,
}

impl Context {
    /// Creates a single-frame chain.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: IntoContextMessage,
    {
        Self { message: message.into_context_message(), inner: None }
    }

    /// Returns a new chain whose outermost frame is `message`, with `self`
    /// kept intact beneath it.
    #[inline]
    pub fn wrap<M>(self, message: M) -> Self
    where
        M: IntoContextMessage,
    {
        Self { message: message.into_context_message(), inner: Some(Box::new(self)) }
    }

    /// Message of this frame.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The next frame towards the root cause, if any.
    #[inline]
    pub fn inner(&self) -> Option<&Context> {
        self.inner.as_deref()
    }

    /// The innermost frame.
    pub fn root(&self) -> &Context {
        let mut current = self;
        while let Some(next) = current.inner() {
            current = next;
        }
        current
    }

    /// Number of frames in the chain (always at least one).
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Iterates the frames from outermost to innermost.
    #[inline]
    pub fn frames(&self) -> Frames<'_> {
        Frames { next: Some(self) }
    }

    /// Iterates the frame messages from outermost to innermost.
    #[inline]
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.frames().map(Context::message)
    }

    /// Renders the chain as a tree using the default glyphs.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&ContextFormat::default())
    }

    /// Renders the chain with a custom formatter.
    #[must_use]
    pub fn render_with<F>(&self, formatter: &F) -> String
    where
        F: ContextFormatter,
    {
        formatter.format_frames(self.messages())
    }
}

impl Clone for Context {
    fn clone(&self) -> Self {
        let messages: Vec<&Cow<'static, str>> = self.frames().map(|frame| &frame.message).collect();
        messages
            .iter()
            .rev()
            .skip(1)
            .fold(Context::new(self.root().message.clone()), |chain, message| {
                chain.wrap((*message).clone())
            })
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        let mut next = self.inner.take();
        while let Some(mut frame) = next {
            next = frame.inner.take();
        }
    }
}

impl PartialEq for Context {
    fn eq(&self, other: &Self) -> bool {
        self.messages().eq(other.messages())
    }
}

impl Eq for Context {}

impl PartialOrd for Context {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic over the messages, outermost first; a chain that is a prefix
/// of another sorts first.
impl Ord for Context {
    fn cmp(&self, other: &Self) -> Ordering {
        self.messages().cmp(other.messages())
    }
}

impl Hash for Context {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth().hash(state);
        for message in self.messages() {
            message.hash(state);
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Context")?;
        f.debug_list().entries(self.messages()).finish()
    }
}

/// Serialized as a sequence of messages, outermost first.
#[cfg(feature = "serde")]
impl Serialize for Context {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.messages())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Context {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let messages = Vec::<String>::deserialize(deserializer)?;
        let mut innermost_first = messages.into_iter().rev();
        let root = innermost_first
            .next()
            .ok_or_else(|| D::Error::invalid_length(0, &"at least one context frame"))?;
        Ok(innermost_first.fold(Context::new(root), Context::wrap))
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over the frames of a [`Context`], outermost first.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    next: Option<&'a Context>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a Context;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner();
        Some(current)
    }
}

impl FusedIterator for Frames<'_> {}
