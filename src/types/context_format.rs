//! Rendering of context chains.

use crate::types::alloc_type::String;

/// Trait for customizing how a context chain is laid out.
///
/// Frames arrive outermost first; the last frame is the root cause.
pub trait ContextFormatter {
    /// Prefix for every frame except the innermost one.
    fn continuing_prefix(&self) -> &str {
        "├── "
    }

    /// Prefix for the innermost frame.
    fn terminal_prefix(&self) -> &str {
        "└── "
    }

    /// Text placed between rendered frames.
    fn separator(&self) -> &str {
        "\n"
    }

    fn format_frames<'a>(&self, frames: impl Iterator<Item = &'a str>) -> String
    where
        Self: Sized,
    {
        render_frames(self, frames)
    }
}

/// Shared renderer so `dyn`/unsized formatters lay frames out the same way.
pub(crate) fn render_frames<'a, F>(formatter: &F, frames: impl Iterator<Item = &'a str>) -> String
where
    F: ContextFormatter + ?Sized,
{
    let mut frames = frames.peekable();
    let mut result = String::new();
    let mut first = true;

    while let Some(message) = frames.next() {
        if !first {
            result.push_str(formatter.separator());
        }
        first = false;

        if frames.peek().is_some() {
            result.push_str(formatter.continuing_prefix());
        } else {
            result.push_str(formatter.terminal_prefix());
        }
        result.push_str(message);
    }
    result
}

/// Configuration-based context formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFormat {
    pub continuing: String,
    pub terminal: String,
    pub separator: String,
}

impl Default for ContextFormat {
    fn default() -> Self {
        Self::tree()
    }
}

impl ContextFormat {
    /// Box-drawing glyphs, one frame per line.
    #[inline]
    pub fn tree() -> Self {
        Self { continuing: "├── ".into(), terminal: "└── ".into(), separator: "\n".into() }
    }

    /// Plain ASCII glyphs for terminals without box-drawing support.
    #[inline]
    pub fn ascii() -> Self {
        Self { continuing: "|-- ".into(), terminal: "`-- ".into(), separator: "\n".into() }
    }

    /// Single line, frames joined by `" -> "`.
    #[inline]
    pub fn inline() -> Self {
        Self { continuing: String::new(), terminal: String::new(), separator: " -> ".into() }
    }
}

impl ContextFormatter for ContextFormat {
    fn continuing_prefix(&self) -> &str {
        &self.continuing
    }

    fn terminal_prefix(&self) -> &str {
        &self.terminal
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
