//! Heading-Relative Description Locator
//!
//! Most job pages give the description no distinctive markup but introduce it
//! with a heading such as "About the role" or "Responsibilities". The locator
//! finds the first such heading in document order and collects the content
//! that structurally follows it, trying three traversal strategies in turn.
//!
//! Only the first qualifying heading is ever used. When all strategies come
//! up short for it, the locator gives up rather than trying a later heading.

use dom_query::{Document, Selection};
use tracing::{debug, trace};

use crate::dom;
use crate::normalize;
use crate::rules::Rules;
use crate::selector::{self, rules as structural};

/// A heading identified as introducing the description.
#[derive(Debug, Clone)]
pub struct HeadingMatch<'a> {
    /// Whitespace-collapsed heading text.
    pub text: String,
    /// The heading node.
    pub node: Selection<'a>,
}

/// Content collection strategy, tried in order.
type Strategy = fn(&HeadingMatch<'_>, &Rules) -> Option<String>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("sibling walk", sibling_walk),
    ("parent text offset", parent_text_offset),
    ("container scan", container_scan),
];

/// Locate the description by its introducing heading.
///
/// Returns the cleaned text, capped at the heading description cap, or
/// `None` when no heading qualifies or no strategy gathers enough text.
#[must_use]
pub fn locate(doc: &Document, rules: &Rules) -> Option<String> {
    let heading = find_description_heading(doc, rules)?;
    debug!(heading = %heading.text, "description heading found");

    for (name, strategy) in STRATEGIES {
        let Some(raw) = strategy(&heading, rules) else {
            trace!(strategy = name, "nothing collected");
            continue;
        };

        let cleaned = normalize::clean_description(&raw, rules);
        if cleaned.chars().count() >= rules.description_min_len {
            debug!(strategy = name, len = cleaned.len(), "description located");
            return Some(normalize::cap(
                &cleaned,
                rules.heading_description_cap,
                rules.truncation_marker,
            ));
        }
        trace!(strategy = name, len = cleaned.len(), "collected text too short");
    }

    None
}

/// First heading-like node, in document order, whose text names a
/// description section.
#[must_use]
pub fn find_description_heading<'a>(doc: &'a Document, rules: &Rules) -> Option<HeadingMatch<'a>> {
    let root = doc.select("html");
    selector::query_all(&root, structural::is_heading_like)
        .into_iter()
        .find_map(|node| {
            let text = normalize::collapse_whitespace(&dom::visible_text(&node));
            rules
                .is_description_heading(&text)
                .then_some(HeadingMatch { text, node })
        })
}

/// Text of up to `sibling_limit` following element siblings.
///
/// Siblings with little text are skipped; the walk stops early once more
/// than `sibling_stop_len` characters are gathered.
fn sibling_walk(heading: &HeadingMatch<'_>, rules: &Rules) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut gathered = 0;
    let mut next = dom::next_element_sibling(&heading.node);

    for _ in 0..rules.sibling_limit {
        let Some(sibling) = next else {
            break;
        };

        let text = dom::visible_text(&sibling);
        let len = text.chars().count();
        if len > rules.sibling_min_len {
            gathered += len + 1;
            parts.push(text);
            if gathered > rules.sibling_stop_len {
                break;
            }
        }
        next = dom::next_element_sibling(&sibling);
    }

    (!parts.is_empty()).then(|| parts.join("\n"))
}

/// Everything in the parent's text after the heading's own text.
///
/// The heading text may also occur in earlier prose of the same parent, so
/// the offset skips as many occurrences as the preceding siblings hold.
fn parent_text_offset(heading: &HeadingMatch<'_>, _rules: &Rules) -> Option<String> {
    let parent = dom::parent(&heading.node);
    if !parent.exists() {
        return None;
    }

    let parent_text = dom::visible_text(&parent);
    let heading_text = dom::visible_text(&heading.node);
    if heading_text.is_empty() {
        return None;
    }

    let earlier = dom::visible_text_before(&heading.node)
        .matches(heading_text.as_str())
        .count();
    let (start, _) = parent_text.match_indices(heading_text.as_str()).nth(earlier)?;
    let offset = start + heading_text.len();
    let rest = parent_text[offset..].trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

/// Paragraph blocks of the nearest enclosing container that come after the
/// heading in document order, until `container_stop_len` characters.
fn container_scan(heading: &HeadingMatch<'_>, rules: &Rules) -> Option<String> {
    let container = dom::closest_ancestor(&heading.node, structural::is_block_container)?;

    let mut parts: Vec<String> = Vec::new();
    let mut taken: Vec<Selection<'_>> = vec![heading.node.clone()];
    let mut gathered = 0;
    let mut past_heading = false;

    for node in container.select("*").nodes() {
        let sel = Selection::from(*node);

        if !past_heading {
            past_heading = dom::same_node(&sel, &heading.node);
            continue;
        }
        // nested blocks are already covered by their taken ancestor
        if !structural::is_paragraph_block(&sel)
            || dom::is_within(&sel, |s| taken.iter().any(|t| dom::same_node(s, t)))
        {
            continue;
        }

        let text = dom::visible_text(&sel);
        if text.is_empty() {
            continue;
        }
        gathered += text.chars().count() + 1;
        parts.push(text);
        taken.push(sel);
        if gathered >= rules.container_stop_len {
            break;
        }
    }

    (!parts.is_empty()).then(|| parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DEFAULT_RULES;

    fn block(seed: &str) -> String {
        // 80 characters of prose
        let text = format!("{seed} works with product and design to ship reliable features weekly.");
        format!("{text:.<80}")
    }

    #[test]
    fn test_finds_first_qualifying_heading() {
        let doc = dom::parse(r#"
            <h1>Staff Engineer</h1>
            <h2 id="first">About the Role</h2>
            <h2>Responsibilities</h2>
        "#);

        let heading = find_description_heading(&doc, &DEFAULT_RULES);
        assert_eq!(heading.map(|h| h.text).as_deref(), Some("About the Role"));
    }

    #[test]
    fn test_sibling_walk_collects_following_blocks() {
        let (a, b, c) = (block("Alpha team"), block("Beta team"), block("Gamma team"));
        let html = format!(r#"
            <div>
                <h2>About the Role</h2>
                <p>{a}</p>
                <p>{b}</p>
                <p>{c}</p>
            </div>
        "#);
        let doc = dom::parse(&html);

        assert_eq!(locate(&doc, &DEFAULT_RULES), Some(format!("{a} {b} {c}")));
    }

    #[test]
    fn test_sibling_walk_stops_after_enough_text() {
        let blocks: Vec<String> = ["One", "Two", "Three", "Four"].iter().map(|s| block(s)).collect();
        let html = format!(
            "<div><h3>Job Description</h3><p>{}</p><p>{}</p><p>{}</p><p>{}</p></div>",
            blocks[0], blocks[1], blocks[2], blocks[3]
        );
        let doc = dom::parse(&html);

        let located = locate(&doc, &DEFAULT_RULES).unwrap_or_default();
        assert!(located.contains(&blocks[2]));
        assert!(!located.contains(&blocks[3]));
    }

    #[test]
    fn test_sibling_walk_limited_to_five_siblings() {
        let text = block("Late");
        let html = format!(
            "<div><h2>Overview</h2><hr><hr><hr><hr><hr><p>{text}</p></div>"
        );
        let doc = dom::parse(&html);
        let heading = find_description_heading(&doc, &DEFAULT_RULES);
        assert!(heading.is_some_and(|h| sibling_walk(&h, &DEFAULT_RULES).is_none()));
    }

    #[test]
    fn test_parent_text_offset_when_heading_is_inline() {
        let text = "You will own the ingestion service end to end, from design through on-call.";
        let html = format!(r#"<p><strong>Responsibilities:</strong> {text}</p>"#);
        let doc = dom::parse(&html);

        let heading = find_description_heading(&doc, &DEFAULT_RULES);
        assert!(heading.as_ref().is_some_and(|h| sibling_walk(h, &DEFAULT_RULES).is_none()));
        assert_eq!(locate(&doc, &DEFAULT_RULES).as_deref(), Some(text));
    }

    #[test]
    fn test_parent_text_offset_skips_earlier_mentions() {
        let text = "You will run the overnight dispatch desk for our regional fleet and keep drivers safe.";
        let html = format!(
            "<div>Read the Overview first, it sets the scene for the team. <strong>Overview</strong> {text}</div>"
        );
        let doc = dom::parse(&html);

        let heading = find_description_heading(&doc, &DEFAULT_RULES);
        assert_eq!(
            heading.and_then(|h| parent_text_offset(&h, &DEFAULT_RULES)).as_deref(),
            Some(text)
        );
    }

    #[test]
    fn test_blocked_lines_dropped_from_located_text() {
        let (a, b) = (block("Routing"), block("Billing"));
        let html = format!(
            "<div><h2>About the Role</h2><p>{a}</p><p>Great benefits, generous leave and a kind culture.</p><p>{b}</p></div>"
        );
        let doc = dom::parse(&html);

        assert_eq!(locate(&doc, &DEFAULT_RULES), Some(format!("{a} {b}")));
    }

    #[test]
    fn test_container_scan_when_heading_is_wrapped() {
        let a = block("Platform");
        let b = block("Tooling");
        let html = format!(r#"
            <section>
                <p class="intro"><span class="section-title">The Role</span></p>
                <ul><li>{a}</li><li>{b}</li></ul>
            </section>
        "#);
        let doc = dom::parse(&html);

        let heading = find_description_heading(&doc, &DEFAULT_RULES);
        assert!(heading.as_ref().is_some_and(|h| {
            sibling_walk(h, &DEFAULT_RULES).is_none() && parent_text_offset(h, &DEFAULT_RULES).is_none()
        }));
        assert_eq!(locate(&doc, &DEFAULT_RULES), Some(format!("{a} {b}")));
    }

    #[test]
    fn test_only_first_heading_is_tried() {
        let good = block("Later section");
        let html = format!(r#"
            <div><h2>About</h2><p>Tiny blurb.</p></div>
            <div><h2>Responsibilities</h2><p>{good}</p><p>{good}</p></div>
        "#);
        let doc = dom::parse(&html);

        assert!(locate(&doc, &DEFAULT_RULES).is_none());
    }

    #[test]
    fn test_no_heading() {
        let doc = dom::parse("<h2>Apply</h2><p>Nothing to see here</p>");
        assert!(locate(&doc, &DEFAULT_RULES).is_none());
    }

    #[test]
    fn test_capped_at_heading_cap() {
        let long = "We build the systems that move money safely between banks and people. ".repeat(30);
        let html = format!("<div><h2>About the job</h2><p>{long}</p></div>");
        let doc = dom::parse(&html);

        let located = locate(&doc, &DEFAULT_RULES).unwrap_or_default();
        assert_eq!(located.chars().count(), 1003);
        assert!(located.ends_with("..."));
    }
}
