//! Structural Rules
//!
//! Predicate rules over single elements: heading-like nodes, page chrome
//! (footer/nav/header), social-sharing regions, and the block elements the
//! description locator walks.

use dom_query::Selection;

use crate::selector::utils::{attr, class, contains_ci, is_one_of_tags, tag};
use crate::selector::Rule;

/// Tags treated as block-level containers when scanning around a heading.
const CONTAINER_TAGS: &[&str] = &["div", "section", "article", "main", "body"];

/// Tags treated as paragraph-like blocks inside a container.
const PARAGRAPH_TAGS: &[&str] = &["p", "li", "div", "ul", "ol", "span"];

/// Rules that mark a company candidate as unusable when they hold for the
/// node or any of its ancestors.
pub static COMPANY_EXCLUSION_REGIONS: &[Rule] = &[is_page_chrome, is_social_region];

/// Heading levels 1-6 or nodes whose class marks them as headings/titles.
///
/// Also accepts bold lead-ins (`strong`, `.font-weight-bold`), which many
/// career pages use in place of real headings.
#[must_use]
pub fn is_heading_like(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    if matches!(
        tag_val.as_str(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "strong"
    ) {
        return true;
    }

    let class_val = class(sel);
    let role = attr(sel, "role");

    role == "heading"
        || class_val.contains("heading")
        || class_val.contains("title")
        || class_val
            .split_whitespace()
            .any(|c| c == "font-weight-bold")
}

/// Heading levels 1-3 only, used by the final title fallback.
#[must_use]
pub fn is_top_heading(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["h1", "h2", "h3"])
}

/// Footer, navigation or header landmark.
#[must_use]
pub fn is_page_chrome(sel: &Selection) -> bool {
    is_one_of_tags(sel, &["footer", "nav", "header"])
}

/// Social sharing or follow controls.
///
/// Matches `[class*="share"]`, `[class*="social"]`,
/// `[aria-label*="share"]` and `[aria-label*="follow"]`.
#[must_use]
pub fn is_social_region(sel: &Selection) -> bool {
    let class_val = class(sel);
    let label = attr(sel, "aria-label");

    class_val.contains("share")
        || class_val.contains("social")
        || contains_ci(&label, "share")
        || contains_ci(&label, "follow")
}

/// Link pointing at an email address or phone number.
#[must_use]
pub fn is_contact_link(sel: &Selection) -> bool {
    let href = attr(sel, "href");
    let href = href.trim_start();
    href.starts_with("mailto:") || href.starts_with("tel:")
}

/// Block-level container used by the container-paragraph scan.
#[must_use]
pub fn is_block_container(sel: &Selection) -> bool {
    is_one_of_tags(sel, CONTAINER_TAGS)
}

/// Paragraph-like block inside a container.
#[must_use]
pub fn is_paragraph_block(sel: &Selection) -> bool {
    is_one_of_tags(sel, PARAGRAPH_TAGS)
}
