//! Compiled regex patterns shared across extractors.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches any whitespace run, for collapsing to a single space.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// A free-standing "City, ST" location line (e.g. `Austin, TX`).
pub static LOCATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z\s,]+,\s+[a-z]{2}$").expect("LOCATION_LINE regex")
});

/// A line opening with a relative age (`3 days ago`, `1 week ago`).
pub static RELATIVE_TIME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s+(?:day|week|month)s?\s+ago").expect("RELATIVE_TIME_LINE regex")
});

// =============================================================================
// Page Title Patterns
// =============================================================================

/// `Senior Engineer at Acme Corp` → `Acme Corp`.
pub static TITLE_AT_COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bat\s+([^|•\-]+)").expect("TITLE_AT_COMPANY regex")
});

/// `Senior Engineer | Acme Corp` → `Acme Corp`.
pub static TITLE_PIPE_COMPANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|\s*([^|•\-]+)").expect("TITLE_PIPE_COMPANY regex")
});

// =============================================================================
// Salary Patterns
// =============================================================================

/// Salary amount patterns, in priority order: abbreviated thousands
/// (`$120k - $150k`), comma-grouped amounts (`$120,000`), then hourly,
/// weekly and monthly rates. The first two may carry a yearly unit.
pub static SALARY_AMOUNTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\$\s?\d{2,3}\s?k\b\s*(?:-\s*\$\s?\d{2,3}\s?k\b)?(?:\s*(?:/|per)\s*(?:year|yr|annually|annual))?",
        r"(?i)\$\s?\d{1,3}(?:,\d{3})+\s*(?:-\s*\$\s?\d{1,3}(?:,\d{3})+)?(?:\s*(?:/|per)\s*(?:year|yr|annually|annual))?",
        r"(?i)\$\s?\d+(?:\.\d+)?\s*(?:/|per)\s*(?:hour|hr)",
        r"(?i)\$\s?\d+(?:\.\d+)?\s*(?:/|per)\s*(?:week|wk)",
        r"(?i)\$\s?\d+(?:\.\d+)?\s*(?:/|per)\s*(?:month|mo)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("SALARY_AMOUNTS regex"))
    .collect()
});

/// A matched amount that already names its pay period.
pub static SALARY_HAS_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:/|per)\s*(?:year|yr|annual|annually|hour|hr|week|wk|month|mo)")
        .expect("SALARY_HAS_UNIT regex")
});

/// Pay-period phrases near an amount, with the suffix each one implies.
pub static SALARY_UNITS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)(?:\bper|/)\s*(?:year|yr|annually|annual)\b", "/yr"),
        (r"(?i)(?:\bper|/)\s*(?:hour|hr)\b", "/hr"),
        (r"(?i)(?:\bper|/)\s*(?:week|wk)\b", "/wk"),
        (r"(?i)(?:\bper|/)\s*(?:month|mo)\b", "/mo"),
    ]
    .into_iter()
    .map(|(p, suffix)| (Regex::new(p).expect("SALARY_UNITS regex"), suffix))
    .collect()
});
