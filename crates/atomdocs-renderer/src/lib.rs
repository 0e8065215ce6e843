//! Markdown rendering for atomdocs.
//!
//! [`MarkdownRenderer`] converts Markdown to HTML with pulldown-cmark and
//! tags every fenced code block with a `language-*` class for client-side
//! syntax highlighting:
//!
//! - a fence without an info string gets `language-plain`
//! - a fence with an info string gets `language-{first word}`
//!
//! The tagging is a plain iterator adapter ([`CodeBlockClasses`]) over
//! pulldown-cmark events, so it composes with any event source.
//!
//! # Example
//!
//! ```
//! use atomdocs_renderer::MarkdownRenderer;
//!
//! let html = MarkdownRenderer::new().render_markdown("```js\nlet a = 1;\n```");
//! assert!(html.contains(r#"<code class="language-js">"#));
//! ```

mod code_block;
mod renderer;
mod util;

pub use code_block::{CodeBlockClasses, PLAIN_LANGUAGE, fence_language, language_class};
pub use renderer::MarkdownRenderer;
pub use util::escape_html;
