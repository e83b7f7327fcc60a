//! Selector Cascade
//!
//! Rules are simple predicates over a single element; field selector lists
//! are ordered CSS hints. [`match_field`] walks a field's hints in priority
//! order and returns the first candidate the filter accepts.

use dom_query::{Document, Selection};
use tracing::{debug, trace};

use crate::dom;
use crate::filter;
use crate::normalize;
use crate::result::Field;
use crate::rules::Rules;

pub mod rules;
pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::selector::{self, utils};
/// use rs_jobscrape::dom;
///
/// let doc = dom::parse(r#"<div><p class="item">1</p><p class="item">2</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_item_class(sel: &dom_query::Selection) -> bool {
///     utils::class(sel).contains("item")
/// }
///
/// let results = selector::query_all(&root, has_item_class);
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    let mut matches = Vec::new();

    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        if rule(&sel) {
            matches.push(sel);
        }
    }

    matches
}

/// A value under consideration for one field, with the node it came from.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// Prepared text (cleaned for descriptions, whitespace-collapsed otherwise).
    pub text: String,
    /// Originating node.
    pub node: Selection<'a>,
    /// Target field.
    pub field: Field,
}

impl<'a> Candidate<'a> {
    /// Build a candidate from a node's visible text.
    #[must_use]
    pub fn from_node(node: Selection<'a>, field: Field, rules: &Rules) -> Self {
        let raw = dom::visible_text(&node);
        let text = match field {
            Field::Description => normalize::clean_description(&raw, rules),
            Field::Title | Field::Company => normalize::collapse_whitespace(&raw),
        };
        Self { text, node, field }
    }

    /// The final field value when the filter accepts this candidate.
    #[must_use]
    pub fn accept(self, rules: &Rules) -> Option<String> {
        if !filter::is_acceptable(&self.text, self.field, Some(&self.node), rules) {
            trace!(field = %self.field, len = self.text.len(), "candidate rejected");
            return None;
        }
        Some(match self.field {
            Field::Description => normalize::cap(
                &self.text,
                rules.cascade_description_cap,
                rules.truncation_marker,
            ),
            Field::Title | Field::Company => self.text,
        })
    }
}

/// Return the first acceptable value for `field` from `selectors`.
///
/// Earlier hints always win over later ones; within one hint, document
/// order wins. Invalid selectors are skipped.
#[must_use]
pub fn match_field(doc: &Document, selectors: &[&str], field: Field, rules: &Rules) -> Option<String> {
    for selector in selectors {
        let Some(matches) = doc.try_select(selector) else {
            trace!(field = %field, selector, "no match");
            continue;
        };

        for node in matches.nodes() {
            let candidate = Candidate::from_node(Selection::from(*node), field, rules);
            if let Some(value) = candidate.accept(rules) {
                debug!(field = %field, selector, len = value.len(), "cascade match");
                return Some(value);
            }
        }
    }
    None
}
