//! Language classes for fenced code blocks.
//!
//! Client-side highlighters (Prism and friends) pick the grammar from a
//! `language-*` class on the `<code>` element. [`CodeBlockClasses`] rewrites
//! every fenced block opening in an event stream so that the class is always
//! present, falling back to [`PLAIN_LANGUAGE`] when the fence has no info string.

use pulldown_cmark::{CodeBlockKind, Event, Tag};

use crate::util::escape_html;

/// Language used for fences without an info string.
pub const PLAIN_LANGUAGE: &str = "plain";

/// Language declared by a fence info string (its first word).
///
/// Anything after the first whitespace (attributes, titles) is ignored.
pub fn fence_language(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

/// CSS class attached to a fenced block with the given info string.
///
/// # Examples
///
/// ```
/// use atomdocs_renderer::language_class;
///
/// assert_eq!(language_class("js"), "language-js");
/// assert_eq!(language_class(""), "language-plain");
/// ```
pub fn language_class(info: &str) -> String {
    format!(
        "language-{}",
        fence_language(info).unwrap_or(PLAIN_LANGUAGE)
    )
}

/// Iterator adapter that tags fenced code blocks with a language class.
///
/// Fenced block openings become raw `<pre><code class="language-*">` HTML;
/// the matching close is still emitted by the HTML writer. Indented code
/// blocks and every other event pass through untouched.
pub struct CodeBlockClasses<I> {
    inner: I,
}

impl<I> CodeBlockClasses<I> {
    /// Wrap an event stream.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<'a, I> Iterator for CodeBlockClasses<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        let event = self.inner.next()?;
        Some(match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => Event::Html(
                format!(
                    r#"<pre><code class="{}">"#,
                    escape_html(&language_class(&info))
                )
                .into(),
            ),
            other => other,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
