//! HTML page template.
//!
//! Wraps a [`RenderPayload`] in the documentation chrome: header with the
//! version dropdown, navigation sidebar, and previous/next buttons. Code
//! highlighting happens client-side with Prism, which picks up the
//! `language-*` classes emitted by the renderer.

use std::fmt::Write;

use atomdocs_config::{NavNode, Section};
use atomdocs_renderer::escape_html as escape;
use atomdocs_site::RenderPayload;
use chrono::Datelike;

/// Prism release served from cdnjs.
const PRISM_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs/prism/1.29.0";

/// Prism grammars loaded on every page, in dependency order.
const PRISM_COMPONENTS: &[&str] = &[
    "markup-templating",
    "markup",
    "javascript",
    "php",
    "css",
    "bash",
    "json",
];

/// Render a complete HTML page.
pub(crate) fn render_page(payload: &RenderPayload, site_name: &str) -> String {
    let mut html = String::with_capacity(8192 + payload.content.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(
        html,
        "<title>({}) {}</title>",
        escape(site_name),
        escape(&payload.title)
    );
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"/assets/{}\">",
        atomdocs_assets::STYLESHEET
    );
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{PRISM_BASE}/themes/prism-tomorrow.min.css\">"
    );
    let _ = writeln!(html, "<script src=\"{PRISM_BASE}/prism.min.js\" defer></script>");
    for component in PRISM_COMPONENTS {
        let _ = writeln!(
            html,
            "<script src=\"{PRISM_BASE}/components/prism-{component}.min.js\" defer></script>"
        );
    }
    let _ = writeln!(
        html,
        "<script src=\"/assets/{}\" defer></script>",
        atomdocs_assets::SCRIPT
    );
    html.push_str("</head>\n<body>\n<div id=\"docs-container\">\n");

    render_header(&mut html, payload, site_name);

    html.push_str("<div id=\"main-content\">\n");
    render_sidebar(&mut html, payload);

    html.push_str("<main>\n");
    html.push_str(&payload.content);
    html.push('\n');
    render_pagination(&mut html, payload);
    html.push_str("</main>\n</div>\n");

    let _ = writeln!(
        html,
        "<footer><p>&copy; {} {}</p></footer>",
        chrono::Utc::now().year(),
        escape(site_name)
    );
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, payload: &RenderPayload, site_name: &str) {
    html.push_str("<header>\n<div class=\"header-content\">\n");
    html.push_str(
        "<button id=\"sidebar-toggle\" type=\"button\" aria-label=\"Toggle navigation\">&#9776;</button>\n",
    );
    let _ = writeln!(html, "<h1>{} Documentation</h1>", escape(site_name));

    html.push_str("<select id=\"version-dropdown\" aria-label=\"Documentation version\">\n");
    let page_path = payload.page_path();
    for version in &payload.versions {
        let selected = if *version == payload.version {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"/docs/{}/{}\"{selected}>{}</option>",
            escape(version),
            escape(&page_path),
            escape(&version_label(version))
        );
    }
    html.push_str("</select>\n");

    html.push_str("<button id=\"mode-toggle\" type=\"button\" aria-label=\"Toggle dark mode\">&#127769;</button>\n");
    html.push_str("</div>\n</header>\n");
}

/// Dropdown label for a version key: `beta` becomes `Beta`, `release-candidate`
/// becomes `ReleaseCandidate`.
fn version_label(version: &str) -> String {
    version
        .split(['-', '_', ' '])
        .flat_map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars))
                .into_iter()
                .flatten()
        })
        .collect()
}

fn render_sidebar(html: &mut String, payload: &RenderPayload) {
    html.push_str("<aside id=\"sidebar\">\n<nav>\n<ul id=\"navigation\">\n");
    if let Some(section) = &payload.navigation {
        let base = format!("/docs/{}", escape(&payload.version));
        render_nav_items(html, section, &base, "", &payload.page);
    }
    html.push_str("</ul>\n</nav>\n</aside>\n");
}

/// Render the entries of one section.
///
/// `prefix` is the dotted key of the section (empty at the root) and is
/// compared against `current` to mark the active link and expand the
/// section that contains it.
fn render_nav_items(html: &mut String, section: &Section, base: &str, prefix: &str, current: &str) {
    for (key, node) in section.iter() {
        let full_key = if prefix.is_empty() {
            key.to_owned()
        } else {
            format!("{prefix}.{key}")
        };
        let href = format!("{base}/{}", escape(key));

        match node {
            NavNode::Leaf(label) => {
                let active = if full_key == current {
                    " class=\"active\""
                } else {
                    ""
                };
                let _ = writeln!(
                    html,
                    "<li class=\"nav-section\"><a href=\"{href}\"{active}>{}</a></li>",
                    escape(label)
                );
            }
            NavNode::Section(children) => {
                let open = current
                    .strip_prefix(full_key.as_str())
                    .is_some_and(|rest| rest.starts_with('.'));
                let collapsed = if open { "" } else { " collapsed" };
                html.push_str("<li class=\"expandable-menu nav-section\">\n");
                let _ = writeln!(
                    html,
                    "<a href=\"#\" class=\"nav-header\">{}</a>",
                    escape(key)
                );
                let _ = writeln!(
                    html,
                    "<ul class=\"nav-links collapsible{collapsed}\" id=\"nav-{}\">",
                    escape(&full_key.replace('.', "-"))
                );
                render_nav_items(html, children, &href, &full_key, current);
                html.push_str("</ul>\n</li>\n");
            }
        }
    }
}

fn render_pagination(html: &mut String, payload: &RenderPayload) {
    html.push_str("<div class=\"pagination\">\n");
    render_page_link(html, payload.previous_page_url.as_deref(), "btn-prev", "Previous");
    render_page_link(html, payload.next_page_url.as_deref(), "btn-next", "Next");
    html.push_str("</div>\n");
}

fn render_page_link(html: &mut String, url: Option<&str>, class: &str, label: &str) {
    match url {
        Some(url) => {
            let _ = writeln!(
                html,
                "<a href=\"{}\" class=\"btn {class}\">{label}</a>",
                escape(url)
            );
        }
        None => {
            let _ = writeln!(
                html,
                "<a class=\"btn {class}\" aria-disabled=\"true\">{label}</a>"
            );
        }
    }
}
