//! Fallback Extraction
//!
//! Last-resort sources for title and company, consulted only after the
//! primary strategies left a field empty. Every value still passes through
//! the candidate filter.

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::filter;
use crate::metadata;
use crate::normalize;
use crate::result::Field;
use crate::rules::Rules;
use crate::selector::{self, rules as structural};
use crate::url_utils;

/// Heading text that belongs to a login prompt, not a posting.
const SIGN_IN: &str = "Sign in";

/// First top-level heading that reads like a job title.
///
/// Text must be strictly inside `fallback_title_bounds` characters and must
/// not mention signing in.
#[must_use]
pub fn title_from_headings(doc: &Document, rules: &Rules) -> Option<String> {
    let (min, max) = rules.fallback_title_bounds;

    let root = doc.select("html");
    selector::query_all(&root, structural::is_top_heading).into_iter().find_map(|sel| {
        let text = normalize::collapse_whitespace(&dom::visible_text(&sel));
        let len = text.chars().count();

        let usable = len > min
            && len < max
            && !text.contains(SIGN_IN)
            && filter::is_acceptable(&text, Field::Title, Some(&sel), rules);
        usable.then(|| {
            debug!(title = %text, "title from heading scan");
            text
        })
    })
}

/// Company parsed out of the document `<title>`.
#[must_use]
pub fn company_from_title_tag(doc: &Document, rules: &Rules) -> Option<String> {
    let title = metadata::page_title(doc);
    let company = metadata::company_from_page_title(&title)?;

    filter::is_acceptable(&company, Field::Company, None, rules).then(|| {
        debug!(%company, "company from page title");
        company
    })
}

/// Company named by the page URL of a hosted ATS posting.
#[must_use]
pub fn company_from_url(url: Option<&str>, rules: &Rules) -> Option<String> {
    let company = url_utils::company_from_url_slug(url?)?;

    filter::is_acceptable(&company, Field::Company, None, rules).then(|| {
        debug!(%company, "company from url slug");
        company
    })
}
