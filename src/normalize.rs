//! Text Normalizer
//!
//! Cleans noisy text pulled from job-description containers. Page chrome
//! (apply buttons, posting age, applicant counts, promoted-by banners) is
//! mixed into the same containers as the prose, so cleaning is driven by a
//! declarative rule table rather than site-specific markers:
//!
//! 1. Truncation rules cut the text at their first match (or at the start of
//!    the line holding the match).
//! 2. The remainder is split into lines; drop-line rules remove whole lines,
//!    and lines shorter than [`MIN_LINE_LEN`] are treated as stray metadata.
//!    [`clean_description`] also drops lines holding a blocked phrase.
//! 3. Surviving lines are joined and whitespace is collapsed.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::{LOCATION_LINE, RELATIVE_TIME_LINE, WHITESPACE_NORMALIZE};
use crate::rules::Rules;

/// Lines shorter than this (after trimming) are dropped.
pub const MIN_LINE_LEN: usize = 20;

/// What a matching [`CleanRule`] does to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanAction {
    /// Remove everything from the match onward.
    TruncateAtMatch,
    /// Remove everything from the start of the line holding the match onward.
    TruncateAtLine,
    /// Remove every line containing a match.
    DropLine,
}

/// One entry of the cleaning rule table.
#[derive(Debug)]
pub struct CleanRule {
    /// Short label used in logs and tests.
    pub name: &'static str,
    /// Case-insensitive pattern.
    pub pattern: Regex,
    /// Effect of a match.
    pub action: CleanAction,
}

impl CleanRule {
    fn new(name: &'static str, pattern: &str, action: CleanAction) -> Self {
        let pattern = Regex::new(&format!("(?i){pattern}")).expect("clean rule regex");
        Self { name, pattern, action }
    }
}

/// The cleaning rule table, evaluated in order.
pub static CLEAN_RULES: LazyLock<Vec<CleanRule>> = LazyLock::new(|| {
    use CleanAction::{DropLine, TruncateAtLine, TruncateAtMatch};

    vec![
        CleanRule::new("share this job", r"share\s+this\s+job", TruncateAtMatch),
        CleanRule::new("apply now", r"apply\s+now", TruncateAtMatch),
        CleanRule::new("show more", r"show\s+more", TruncateAtMatch),
        CleanRule::new("show less", r"show\s+less", TruncateAtMatch),
        CleanRule::new("see more jobs", r"see\s+more\s+jobs\s+like\s+this", TruncateAtMatch),
        CleanRule::new("apply for this job", r"apply\s+for\s+this\s+job", TruncateAtMatch),
        CleanRule::new("easy apply", r"easy\s+apply", TruncateAtMatch),
        CleanRule::new("quick apply", r"quick\s+apply", TruncateAtMatch),
        CleanRule::new("report this job", r"report\s+this\s+job", TruncateAtMatch),
        CleanRule::new("save this job", r"save\s+this\s+job", TruncateAtMatch),
        CleanRule::new("job id", r"\bjob\s+id\b", TruncateAtMatch),
        CleanRule::new("reposted ago line", r"reposted[^\n]*\bago\b", TruncateAtLine),
        CleanRule::new("ago applicants line", r"\bago\b[^\n]*\bover\b[^\n]*applicants", TruncateAtLine),
        CleanRule::new("dot applicants line", r"·[^\n]*applicants", TruncateAtLine),
        CleanRule::new("applicant count", r"\d+\s+applicants", TruncateAtMatch),
        CleanRule::new("over n applicants", r"\bover\s+\d+[^\n]*applicants", TruncateAtMatch),
        CleanRule::new("posted ago", r"\b(?:re)?posted\b[^\n]*\bago\b", TruncateAtMatch),
        CleanRule::new("promoted by", r"promoted\s+by", TruncateAtMatch),
        CleanRule::new("actively reviewing", r"actively\s+reviewing", TruncateAtMatch),
        CleanRule::new("days ago", r"\d+\s+days?\s+ago", TruncateAtMatch),
        CleanRule::new("weeks ago", r"\d+\s+weeks?\s+ago", TruncateAtMatch),
        CleanRule::new("months ago", r"\d+\s+months?\s+ago", TruncateAtMatch),
        CleanRule::new("applicants line", r"applicants", DropLine),
        CleanRule::new("promoted line", r"promoted by", DropLine),
        CleanRule::new("reviewing line", r"actively reviewing", DropLine),
        CleanRule::new("reposted line", r"reposted", DropLine),
    ]
});

/// Clean extracted text.
///
/// Pure and idempotent: the pipeline is repeated until the text stops
/// changing, so `clean(&clean(x)) == clean(x)` for every input.
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::normalize::clean;
///
/// let raw = "We are hiring a backend engineer to own our billing systems.\nApply now\nShare this job";
/// assert_eq!(clean(raw), "We are hiring a backend engineer to own our billing systems.");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    clean_until_stable(text, |_| false)
}

/// [`clean`] for description text: lines mentioning one of `rules`'
/// blocked phrases ("benefits", "our story", ...) are dropped as well.
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::normalize::clean_description;
/// use rs_jobscrape::DEFAULT_RULES;
///
/// let raw = "You will own the billing services end to end.\nGreat benefits and a fun culture!";
/// assert_eq!(
///     clean_description(raw, &DEFAULT_RULES),
///     "You will own the billing services end to end."
/// );
/// ```
#[must_use]
pub fn clean_description(text: &str, rules: &Rules) -> String {
    clean_until_stable(text, |line| rules.is_blocked_text(line))
}

fn clean_until_stable(text: &str, blocked: impl Fn(&str) -> bool) -> String {
    let mut current = clean_pass(text, &blocked);
    loop {
        let next = clean_pass(&current, &blocked);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One run of the three-stage pipeline.
fn clean_pass(text: &str, blocked: &impl Fn(&str) -> bool) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut text = text.to_string();
    for rule in CLEAN_RULES.iter() {
        if rule.action == CleanAction::DropLine {
            continue;
        }
        let Some(m) = rule.pattern.find(&text) else {
            continue;
        };
        let cut = match rule.action {
            CleanAction::TruncateAtLine => text[..m.start()].rfind('\n').map_or(0, |i| i + 1),
            _ => m.start(),
        };
        text.truncate(cut);
    }

    let kept: Vec<&str> = text
        .lines()
        .filter(|line| keep_line(line) && !blocked(line))
        .collect();
    collapse_whitespace(&kept.join("\n"))
}

/// Whether a single line survives the drop-line stage.
fn keep_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.chars().count() < MIN_LINE_LEN {
        return false;
    }
    if LOCATION_LINE.is_match(trimmed) || RELATIVE_TIME_LINE.is_match(trimmed) {
        return false;
    }
    !CLEAN_RULES
        .iter()
        .filter(|rule| rule.action == CleanAction::DropLine)
        .any(|rule| rule.pattern.is_match(trimmed))
}

/// Collapse whitespace runs to single spaces and trim.
///
/// This is the final stage of [`clean`]; short single-line values (titles,
/// company names, salaries) go through this stage alone.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Cap `text` at `limit` characters, appending `marker` when it was cut.
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::normalize::cap;
///
/// assert_eq!(cap("abcdef", 3, "..."), "abc...");
/// assert_eq!(cap("abc", 3, "..."), "abc");
/// ```
#[must_use]
pub fn cap(text: &str, limit: usize, marker: &str) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{marker}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROSE: &str = "You will design and operate the services behind our payments platform.";

    #[test]
    fn test_truncates_at_marker() {
        let raw = format!("{PROSE}\nShare this job\nMore text that should vanish entirely here.");
        assert_eq!(clean(&raw), PROSE);
    }

    #[test]
    fn test_truncation_is_case_insensitive() {
        let raw = format!("{PROSE} EASY APPLY to this role today and every day");
        assert_eq!(clean(&raw), PROSE);
    }

    #[test]
    fn test_truncates_relative_time() {
        let raw = format!("{PROSE}\nPosted 3 days ago by the hiring team and recruiters");
        assert_eq!(clean(&raw), PROSE);
    }

    #[test]
    fn test_truncate_at_line_removes_whole_line() {
        let raw = format!("{PROSE}\nSenior role · Over 100 applicants this week");
        assert_eq!(clean(&raw), PROSE);
    }

    #[test]
    fn test_drops_short_and_location_lines() {
        let raw = format!("Acme\nSan Francisco Bay Area, CA\n{PROSE}\nFull-time");
        assert_eq!(clean(&raw), PROSE);
    }

    #[test]
    fn test_drops_applicant_lines_without_truncating() {
        let second = "You will also mentor two engineers on the billing team.";
        let raw = format!("{PROSE}\nBe among the first applicants for this role\n{second}");
        assert_eq!(clean(&raw), format!("{PROSE} {second}"));
    }

    #[test]
    fn test_promoted_by_truncates_rest() {
        let raw = format!(
            "{PROSE}\nThis listing is promoted by the hiring partner network\n{PROSE}"
        );
        // the "This listing is" stub falls under the minimum line length
        assert_eq!(clean(&raw), PROSE);
    }

    #[test]
    fn test_joins_lines_and_collapses_whitespace() {
        let raw = "  You will design   and operate services.\n\n   You will mentor engineers on the team.  ";
        assert_eq!(
            clean(raw),
            "You will design and operate services. You will mentor engineers on the team."
        );
    }

    #[test]
    fn test_description_drops_blocked_lines_only() {
        use crate::rules::DEFAULT_RULES;

        let perks = "We offer competitive pay, great benefits and a remote-first culture.";
        let raw = format!("{PROSE}\n{perks}");
        assert_eq!(clean_description(&raw, &DEFAULT_RULES), PROSE);
        assert_eq!(clean(&raw), format!("{PROSE} {perks}"));

        let once = clean_description(&raw, &DEFAULT_RULES);
        assert_eq!(clean_description(&once, &DEFAULT_RULES), once);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t "), "");
        assert_eq!(clean("short"), "");
    }

    #[test]
    fn test_idempotent_over_noisy_inputs() {
        let inputs = [
            PROSE.to_string(),
            format!("{PROSE}\nApply now"),
            format!("Remote\n{PROSE}\n3 weeks ago\nReposted 2 days ago"),
            "a line that is exactly long enough, ok\nsee more jobs like this".to_string(),
            format!("{PROSE} promoted\nby the team that works on infrastructure"),
            "x".repeat(500),
            "   spaced     out     words     that     collapse     well   ".to_string(),
            "Job ID: 12345 and the rest of the description follows here".to_string(),
        ];

        for input in &inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_rule_table_shape() {
        assert!(CLEAN_RULES.iter().any(|r| r.action == CleanAction::DropLine));
        assert!(CLEAN_RULES.iter().any(|r| r.action == CleanAction::TruncateAtLine));
        for rule in CLEAN_RULES.iter() {
            assert!(!rule.name.is_empty());
        }
        let apply = CLEAN_RULES.iter().find(|r| r.name == "apply now");
        assert!(apply.is_some_and(|r| r.pattern.is_match("APPLY NOW")));
    }

    #[test]
    fn test_cap() {
        let long = "a".repeat(1500);
        let capped = cap(&long, 1000, "...");
        assert_eq!(capped.chars().count(), 1003);
        assert!(capped.ends_with("..."));

        assert_eq!(cap("short text", 1000, "..."), "short text");
        assert_eq!(cap("héllo wörld", 5, "..."), "héllo...");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Acme \n  Corp "), "Acme Corp");
    }
}
