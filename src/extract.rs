//! Field extraction orchestration.
//!
//! One synchronous pass over a parsed page. Each field has an ordered list
//! of strategies sharing one signature; the first that yields a value wins
//! and later ones are never consulted. Fields are resolved in a fixed order:
//! company metadata, title, company, description, salary. Fallback sources
//! sit at the tail of each list.
//!
//! Extraction never fails. A field no strategy can fill stays empty.

use chrono::Utc;
use tracing::{debug, trace};

use crate::dom::{self, Document};
use crate::extractor::{fallback, heading, salary};
use crate::filter;
use crate::metadata::{self, JobPostingMetadata};
use crate::options::Options;
use crate::result::{ExtractionResult, Field};
use crate::selector;
use crate::url_utils;

/// Inputs shared by every strategy in one pass.
struct Context<'a> {
    doc: &'a Document,
    options: &'a Options,
    posting: JobPostingMetadata,
}

/// A single way of producing one field's value.
type Strategy = fn(&Context<'_>) -> Option<String>;

const TITLE_STRATEGIES: &[(&str, Strategy)] = &[
    ("selector cascade", title_from_selectors),
    ("json-ld title", title_from_metadata),
    ("heading scan", title_from_headings),
];

const COMPANY_STRATEGIES: &[(&str, Strategy)] = &[
    ("json-ld organization", company_from_metadata),
    ("selector cascade", company_from_selectors),
    ("page title", company_from_title_tag),
    ("url slug", company_from_url),
];

const DESCRIPTION_STRATEGIES: &[(&str, Strategy)] = &[
    ("heading locator", description_from_heading),
    ("selector cascade", description_from_selectors),
];

const SALARY_STRATEGIES: &[(&str, Strategy)] = &[("page text", salary_from_page_text)];

/// Run the full extraction pass over a parsed document.
pub(crate) fn extract_document(doc: &Document, options: &Options) -> ExtractionResult {
    let scraped_at = options.scraped_at.unwrap_or_else(Utc::now);
    let mut result = ExtractionResult::empty(scraped_at);

    let ctx = Context {
        doc,
        options,
        posting: metadata::extract_job_posting(doc),
    };
    debug!(
        organization = ctx.posting.organization.is_some(),
        title = ctx.posting.title.is_some(),
        "job posting metadata"
    );

    result.title = resolve("title", TITLE_STRATEGIES, &ctx);
    result.company = resolve("company", COMPANY_STRATEGIES, &ctx);
    result.description = resolve("description", DESCRIPTION_STRATEGIES, &ctx);
    result.salary = resolve("salary", SALARY_STRATEGIES, &ctx);

    if let Some(url) = options.url.as_deref() {
        result.url = url.trim().to_string();
        result.domain = url_utils::extract_domain(url);
    }

    debug!(
        title = result.title.len(),
        company = result.company.len(),
        description = result.description.len(),
        salary = result.salary.len(),
        "extraction finished"
    );
    result
}

/// First value produced by `strategies`, or an empty string.
fn resolve(field: &str, strategies: &[(&str, Strategy)], ctx: &Context<'_>) -> String {
    for (name, strategy) in strategies {
        if let Some(value) = strategy(ctx) {
            debug!(field, strategy = name, len = value.len(), "field resolved");
            return value;
        }
        trace!(field, strategy = name, "strategy came up empty");
    }
    debug!(field, "field left empty");
    String::new()
}

fn title_from_selectors(ctx: &Context<'_>) -> Option<String> {
    let rules = ctx.options.rules;
    selector::match_field(ctx.doc, rules.selectors(Field::Title), Field::Title, rules)
}

fn title_from_metadata(ctx: &Context<'_>) -> Option<String> {
    let title = ctx.posting.title.as_deref()?;
    filter::is_acceptable(title, Field::Title, None, ctx.options.rules).then(|| title.to_string())
}

fn title_from_headings(ctx: &Context<'_>) -> Option<String> {
    fallback::title_from_headings(ctx.doc, ctx.options.rules)
}

// Structured data skips the phrase and page-region checks but not the length bounds.
fn company_from_metadata(ctx: &Context<'_>) -> Option<String> {
    let name = ctx.posting.organization.as_deref()?;
    filter::within_length_bounds(name, Field::Company, ctx.options.rules).then(|| name.to_string())
}

fn company_from_selectors(ctx: &Context<'_>) -> Option<String> {
    let rules = ctx.options.rules;
    selector::match_field(ctx.doc, rules.selectors(Field::Company), Field::Company, rules)
}

fn company_from_title_tag(ctx: &Context<'_>) -> Option<String> {
    fallback::company_from_title_tag(ctx.doc, ctx.options.rules)
}

fn company_from_url(ctx: &Context<'_>) -> Option<String> {
    fallback::company_from_url(ctx.options.url.as_deref(), ctx.options.rules)
}

fn description_from_heading(ctx: &Context<'_>) -> Option<String> {
    heading::locate(ctx.doc, ctx.options.rules)
}

fn description_from_selectors(ctx: &Context<'_>) -> Option<String> {
    let rules = ctx.options.rules;
    selector::match_field(ctx.doc, rules.selectors(Field::Description), Field::Description, rules)
}

fn salary_from_page_text(ctx: &Context<'_>) -> Option<String> {
    let page_text = dom::visible_text(&ctx.doc.select("body"));
    salary::extract_salary(&page_text, ctx.options.rules)
}
