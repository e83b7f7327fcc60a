//! Content Tree Adapter
//!
//! Read-only operations over the parsed page, built on `dom_query`. The
//! extraction engine only ever queries the tree; nothing here mutates it.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

/// Elements whose text never reaches the rendered page.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Elements rendered on their own line(s).
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary",
    "table", "tbody", "thead", "tfoot", "tr", "ul",
];

// === Parsing ===

/// Parse HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Whether two selections start at the same node.
#[must_use]
pub fn same_node(a: &Selection, b: &Selection) -> bool {
    match (a.nodes().first(), b.nodes().first()) {
        (Some(x), Some(y)) => x.id == y.id,
        _ => false,
    }
}

// === Text Content ===

/// Raw text of node and descendants, markup removed, whitespace untouched.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Rendered-style text of a selection.
///
/// Approximates a browser's `innerText`: block elements and `<br>` start new
/// lines, whitespace inside a line collapses to one space, blank lines are
/// dropped and hidden elements (scripts, styles, templates) contribute nothing.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    render_visible(sel.nodes())
}

/// Rendered-style text of the siblings that precede `sel`, in order.
#[must_use]
pub fn visible_text_before(sel: &Selection) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };

    let mut preceding = Vec::new();
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        sibling = s.prev_sibling();
        preceding.push(s);
    }
    preceding.reverse();
    render_visible(&preceding)
}

fn render_visible(nodes: &[NodeRef]) -> String {
    let mut raw = String::new();
    for node in nodes {
        push_visible_text(node, &mut raw);
    }

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_visible_text(node: &NodeRef, out: &mut String) {
    if node.is_text() {
        out.push_str(&node.text());
        return;
    }

    if node.is_element() {
        let name = node
            .node_name()
            .map(|n| n.to_ascii_lowercase())
            .unwrap_or_default();

        if HIDDEN_TAGS.contains(&name.as_str()) {
            return;
        }
        if name == "br" {
            out.push('\n');
            return;
        }

        let block = BLOCK_TAGS.contains(&name.as_str());
        if block {
            out.push('\n');
        }
        for child in node.children() {
            push_visible_text(&child, out);
        }
        if block {
            out.push('\n');
        }
        return;
    }

    // Document and fragment roots
    for child in node.children() {
        push_visible_text(&child, out);
    }
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Nearest ancestor (excluding the node itself) satisfying `pred`.
#[must_use]
pub fn closest_ancestor<'a>(
    sel: &Selection<'a>,
    pred: impl Fn(&Selection<'a>) -> bool,
) -> Option<Selection<'a>> {
    let mut current = parent(sel);
    while current.exists() {
        if tag_name(&current).is_some() && pred(&current) {
            return Some(current);
        }
        current = parent(&current);
    }
    None
}

/// Whether the node itself or any ancestor satisfies `pred`.
#[must_use]
pub fn is_within<'a>(sel: &Selection<'a>, pred: impl Fn(&Selection<'a>) -> bool) -> bool {
    pred(sel) || closest_ancestor(sel, pred).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_before_covers_preceding_siblings() {
        let doc = parse("<div>Intro text <em>aside</em> <b id=\"h\">Overview</b> after</div>");
        assert_eq!(visible_text_before(&doc.select("#h")), "Intro text aside");
        assert_eq!(visible_text_before(&doc.select("#missing")), "");
    }

    #[test]
    fn test_visible_text_breaks_blocks() {
        let doc = parse("<div><p>First   paragraph</p><p>Second <b>bold</b> one</p></div>");
        assert_eq!(
            visible_text(&doc.select("div")),
            "First paragraph\nSecond bold one"
        );
    }

    #[test]
    fn test_visible_text_skips_hidden() {
        let doc = parse(
            "<body><p>Shown</p><script>var x = 1;</script><style>p{}</style><p>Also shown</p></body>",
        );
        assert_eq!(visible_text(&doc.select("body")), "Shown\nAlso shown");
    }

    #[test]
    fn test_visible_text_br_and_inline() {
        let doc = parse("<p>Line one<br>Line <span>two</span></p>");
        assert_eq!(visible_text(&doc.select("p")), "Line one\nLine two");
    }

    #[test]
    fn test_visible_text_empty_selection() {
        let doc = parse("<div>content</div>");
        assert_eq!(visible_text(&doc.select("span")), "");
    }

    #[test]
    fn test_tag_name_lowercase() {
        let doc = parse("<SECTION>x</SECTION>");
        assert_eq!(tag_name(&doc.select("section")), Some("section".to_string()));
    }

    #[test]
    fn test_next_element_sibling_skips_text() {
        let doc = parse(r#"<div><h2 id="h">Heading</h2>  text  <p id="p">Para</p></div>"#);
        let next = next_element_sibling(&doc.select("#h"));
        assert!(next.is_some_and(|n| tag_name(&n).as_deref() == Some("p")));
        assert!(next_element_sibling(&doc.select("#p")).is_none());
    }

    #[test]
    fn test_same_node() {
        let doc = parse(r#"<div><p id="a">A</p><p id="b">B</p></div>"#);
        let a = doc.select("#a");
        let first_p = doc.select("p").first();
        assert!(same_node(&a, &first_p));
        assert!(!same_node(&a, &doc.select("#b")));
        assert!(!same_node(&a, &doc.select("span")));
    }

    #[test]
    fn test_closest_ancestor_and_is_within() {
        let doc = parse(r#"<footer><div><a id="link" href="/x">Acme</a></div></footer>"#);
        let link = doc.select("#link");

        let footer = closest_ancestor(&link, |s| tag_name(s).as_deref() == Some("footer"));
        assert!(footer.is_some());
        assert!(is_within(&link, |s| tag_name(s).as_deref() == Some("a")));
        assert!(!is_within(&link, |s| tag_name(s).as_deref() == Some("nav")));
    }

    #[test]
    fn test_attributes() {
        let doc = parse(r#"<a class="co" href="mailto:x@y.z">Mail</a>"#);
        let a = doc.select("a");
        assert_eq!(class_name(&a), Some("co".to_string()));
        assert_eq!(get_attribute(&a, "href"), Some("mailto:x@y.z".to_string()));
        assert_eq!(get_attribute(&a, "title"), None);
    }
}
