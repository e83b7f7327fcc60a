//! Salary pattern extraction over full page text.

use tracing::debug;

use crate::normalize::collapse_whitespace;
use crate::patterns::{SALARY_AMOUNTS, SALARY_HAS_UNIT, SALARY_UNITS};
use crate::rules::Rules;

/// Find the first salary amount in `page_text` and qualify it with a pay
/// period.
///
/// Amount patterns are tried in priority order and the first one matching
/// anywhere wins. A match that names its own period is returned as is;
/// otherwise the surrounding `salary_context_window` characters on each side
/// are searched for a unit phrase, whose suffix is appended.
///
/// # Example
///
/// ```rust
/// use rs_jobscrape::extractor::salary::extract_salary;
/// use rs_jobscrape::DEFAULT_RULES;
///
/// let salary = extract_salary("Pay: $40/hr plus tips", &DEFAULT_RULES);
/// assert_eq!(salary.as_deref(), Some("$40/hr"));
/// ```
#[must_use]
pub fn extract_salary(page_text: &str, rules: &Rules) -> Option<String> {
    let m = SALARY_AMOUNTS.iter().find_map(|re| re.find(page_text))?;
    let amount = collapse_whitespace(m.as_str());

    if SALARY_HAS_UNIT.is_match(&amount) {
        debug!(salary = %amount, "salary with unit");
        return Some(amount);
    }

    let context = context_window(page_text, m.start(), m.end(), rules.salary_context_window);
    let salary = match SALARY_UNITS.iter().find(|(re, _)| re.is_match(context)) {
        Some((_, suffix)) => format!("{amount} {suffix}"),
        None => amount,
    };
    debug!(%salary, "salary inferred");
    Some(salary)
}

/// Up to `chars` characters either side of `start..end`, on char boundaries.
fn context_window(text: &str, start: usize, end: usize, chars: usize) -> &str {
    let from = if chars == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(chars - 1)
            .map_or(0, |(i, _)| i)
    };
    let to = text[end..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}
