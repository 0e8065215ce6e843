//! Markdown renderer built on pulldown-cmark's HTML writer.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use pulldown_cmark::{Event, Options, Parser, html};

use crate::code_block::CodeBlockClasses;

/// Markdown to HTML renderer.
///
/// Parsing and HTML serialization are delegated to pulldown-cmark; the
/// renderer only inserts [`CodeBlockClasses`] between the two so that every
/// fenced block carries a `language-*` class.
///
/// Rendering is pure: the same input always produces the same output, and
/// malformed markup degrades to literal text rather than failing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parser options for the extended dialect:
    /// - Tables
    /// - Footnotes
    /// - Definition lists
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    /// - Heading attributes (`## Title {#id .class}`)
    #[must_use]
    pub fn parser_options(&self) -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_DEFINITION_LIST
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render an arbitrary markdown event stream to HTML.
    pub fn render<'a, I>(&self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        let mut out = String::with_capacity(4096);
        html::push_html(&mut out, CodeBlockClasses::new(events));
        out
    }

    /// Render markdown text using the configured parser options.
    pub fn render_markdown(&self, markdown: &str) -> String {
        self.render(self.create_parser(markdown))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(markdown: &str) -> String {
        MarkdownRenderer::new().render_markdown(markdown)
    }

    #[test]
    fn test_fenced_block_without_language_is_plain() {
        assert_eq!(
            render("```\ncode\n```"),
            "<pre><code class=\"language-plain\">code\n</code></pre>\n"
        );
    }

    #[test]
    fn test_fenced_block_with_language() {
        assert_eq!(
            render("```js\ncode\n```"),
            "<pre><code class=\"language-js\">code\n</code></pre>\n"
        );
    }

    #[test]
    fn test_tilde_fence_is_tagged() {
        assert!(render("~~~php\necho 1;\n~~~").contains(r#"<code class="language-php">"#));
    }

    #[test]
    fn test_fence_attributes_ignored() {
        let html = render("```php title=\"routes.php\"\nRoute::get();\n```");
        assert!(html.contains(r#"<code class="language-php">"#));
        assert!(!html.contains("title"));
    }

    #[test]
    fn test_code_content_is_escaped() {
        let html = render("```html\n<div class=\"x\">&</div>\n```");
        assert!(html.contains("&lt;div class=\"x\"&gt;&amp;&lt;/div&gt;"));
    }

    #[test]
    fn test_indented_block_untouched() {
        assert_eq!(render("    code\n"), "<pre><code>code\n</code></pre>\n");
    }

    #[test]
    fn test_every_block_tagged_in_order() {
        let html = render("```php\na\n```\n\ntext\n\n```\nb\n```\n\n```js\nc\n```");
        let php = html.find("language-php").unwrap();
        let plain = html.find("language-plain").unwrap();
        let js = html.find("language-js").unwrap();
        assert!(php < plain && plain < js);
        assert_eq!(html.matches("<pre>").count(), 3);
        assert_eq!(html.matches("</code></pre>").count(), 3);
    }

    #[test]
    fn test_surrounding_markup_unchanged() {
        let html = render("# Routing\n\nDefine **routes**:\n\n```php\nRoute::get('/');\n```\n");
        assert!(html.starts_with("<h1>Routing</h1>\n<p>Define <strong>routes</strong>:</p>\n"));
        assert!(html.contains("Route::get(&#x27;/&#x27;);") || html.contains("Route::get('/');"));
    }

    #[test]
    fn test_tables() {
        let html = render("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_footnotes() {
        let html = render("Text[^1].\n\n[^1]: The note.");
        assert!(html.contains("footnote-reference"));
        assert!(html.contains("footnote-definition"));
    }

    #[test]
    fn test_definition_lists() {
        let html = render("Router\n: Maps requests to controllers.");
        assert!(html.contains("<dl>"));
        assert!(html.contains("<dt>"));
        assert!(html.contains("Maps requests to controllers."));
        assert!(html.contains("<dd>"));
    }

    #[test]
    fn test_heading_attributes() {
        let html = render("## Middleware {#mw}");
        assert!(html.contains(r#"<h2 id="mw">Middleware</h2>"#));
    }

    #[test]
    fn test_parser_options() {
        let options = MarkdownRenderer::new().parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_FOOTNOTES));
        assert!(options.contains(Options::ENABLE_DEFINITION_LIST));
        assert!(options.contains(Options::ENABLE_HEADING_ATTRIBUTES));
    }

    #[test]
    fn test_malformed_markdown_renders_as_text() {
        let html = render("**unclosed *emphasis [link](\n\n```js\nno closing fence");
        assert!(html.contains("unclosed"));
        assert!(html.contains(r#"<code class="language-js">no closing fence"#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let markdown = "# Title\n\n```js\nlet a = 1;\n```\n\n| a |\n|---|\n| b |\n\nText[^n]\n\n[^n]: note";
        let renderer = MarkdownRenderer::default();
        assert_eq!(
            renderer.render_markdown(markdown),
            renderer.render_markdown(markdown)
        );
    }

    #[test]
    fn test_render_custom_event_source() {
        let events = vec![
            Event::Start(pulldown_cmark::Tag::Paragraph),
            Event::Text("hello".into()),
            Event::End(pulldown_cmark::TagEnd::Paragraph),
        ];
        assert_eq!(MarkdownRenderer::new().render(events.into_iter()), "<p>hello</p>\n");
    }
}
