//! Description markup sanitizer
//!
//! Listing descriptions arrive as agent-authored HTML and must not reach a
//! renderer untouched. `clean_html` re-serializes the markup through an
//! allowlist: formatting tags survive, script-bearing constructs do not.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Tags that survive sanitization
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "hr", "b", "strong", "i", "em", "u", "s", "ul", "ol", "li", "h1", "h2", "h3", "h4",
    "h5", "h6", "blockquote", "a", "img", "span", "div",
];

/// Tags removed together with their entire content
const DROPPED_TAGS: &[&str] = &["script", "style", "iframe", "object", "embed", "link", "meta"];

/// Attributes that survive on allowed tags; everything else (including all
/// `on*` event handlers) is stripped
const ALLOWED_ATTRS: &[&str] = &["href", "src", "alt", "title"];

/// Attributes whose values are URLs and need scheme vetting
const URL_ATTRS: &[&str] = &["href", "src"];

/// Tags with no closing tag and no children
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Sanitize an HTML fragment for rendering
///
/// Returns a fresh string; the input is never modified. Unknown tags are
/// unwrapped (their children survive), dangerous tags are dropped wholesale,
/// and text content is re-escaped on the way out.
pub fn clean_html(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    let mut out = String::with_capacity(input.len());
    for child in fragment.tree.root().children() {
        write_node(child, &mut out);
    }
    out
}

fn write_node(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => escape_into(text, out),
        Node::Element(element) => {
            let name = element.name();
            if DROPPED_TAGS.contains(&name) {
                return;
            }
            if !ALLOWED_TAGS.contains(&name) {
                // Unknown tag: keep the content, lose the wrapper.
                for child in node.children() {
                    write_node(child, out);
                }
                return;
            }

            out.push('<');
            out.push_str(name);
            for (attr, value) in element.attrs() {
                if !ALLOWED_ATTRS.contains(&attr) {
                    continue;
                }
                if URL_ATTRS.contains(&attr) && !safe_url(value) {
                    continue;
                }
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                escape_attr_into(value, out);
                out.push('"');
            }
            out.push('>');

            if VOID_TAGS.contains(&name) {
                return;
            }
            for child in node.children() {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        // Comments, doctypes, and processing instructions never survive.
        _ => {}
    }
}

/// Whether a URL value is safe to keep
///
/// Rejects `javascript:`, `vbscript:`, and `data:` schemes. Whitespace and
/// control characters are ignored during scheme detection so obfuscated
/// variants ("java\tscript:") are still caught.
fn safe_url(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.split_once(':') {
        None => true,
        Some((scheme, _)) => !matches!(scheme, "javascript" | "vbscript" | "data"),
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
