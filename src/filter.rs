//! Candidate Text Filter
//!
//! The single acceptance gate for every candidate value, shared by the
//! selector cascade and the fallback paths.

use dom_query::Selection;

use crate::dom;
use crate::result::Field;
use crate::rules::Rules;
use crate::selector::rules::{is_contact_link, COMPANY_EXCLUSION_REGIONS};

/// Decide whether `text` is plausible as the value of `field`.
///
/// `origin` is the node the text came from, when there is one; the company
/// checks that look at the surrounding page structure are skipped without it.
///
/// Blocked phrases veto short fields only. Description candidates are
/// expected to be cleaned already, which drops the lines holding them;
/// capping is left to the caller.
#[must_use]
pub fn is_acceptable(text: &str, field: Field, origin: Option<&Selection>, rules: &Rules) -> bool {
    let trimmed = text.trim();
    if field.is_short() && rules.is_blocked_text(trimmed) {
        return false;
    }
    if !within_length_bounds(trimmed, field, rules) {
        return false;
    }

    if field == Field::Company {
        if let Some(node) = origin {
            return !is_excluded_company_node(node);
        }
    }

    true
}

/// Length check alone: `[short_min_len, short_max_len)` for short fields,
/// more than `description_min_len` for descriptions. Blank text never fits.
#[must_use]
pub fn within_length_bounds(text: &str, field: Field, rules: &Rules) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    let len = trimmed.chars().count();
    if field.is_short() {
        len >= rules.short_min_len && len < rules.short_max_len
    } else {
        len > rules.description_min_len
    }
}

/// Company text inside page chrome, social controls or a contact link.
fn is_excluded_company_node(node: &Selection) -> bool {
    if COMPANY_EXCLUSION_REGIONS
        .iter()
        .any(|rule| dom::is_within(node, |s| rule(s)))
    {
        return true;
    }
    is_contact_link(node)
}
