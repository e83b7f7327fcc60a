//! Utility functions for selector pattern matching
//!
//! Helpers shared by the selector rules: attribute access with empty-string
//! defaults and case-insensitive substring checks.

use crate::dom;
use dom_query::Selection;

// === String Utilities ===

/// Case-insensitive contains check
#[inline]
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// === Element Attribute Helpers ===

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Check if element is one of the specified tags
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::selector::utils;
/// use rs_jobscrape::dom;
///
/// let doc = dom::parse("<section>content</section>");
/// let section = doc.select("section");
///
/// assert!(utils::is_one_of_tags(&section, &["article", "div", "section"]));
/// assert!(!utils::is_one_of_tags(&section, &["div", "span", "p"]));
/// ```
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}
