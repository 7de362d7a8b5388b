//! Due-date validation for the presentation boundary.
//!
//! # Responsibility
//! - Decide whether a due-date string may be handed to the task service.
//! - Offer a keystroke-level check for masked entry fields.
//!
//! # Invariants
//! - Empty input is always valid and means "no due date".
//! - The service never re-validates; callers check first.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Wire and entry format of `Task::due_date`.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

static DUE_DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid due date regex"));
static PARTIAL_DUE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{0,4}(-\d{0,2}(-\d{0,2})?)?$").expect("valid partial regex"));

/// Returns whether `value` is empty or a real calendar date in strict
/// `YYYY-MM-DD` form. Surrounding whitespace is ignored.
pub fn is_valid_due_date(value: &str) -> bool {
    parse_due_date(value).is_ok()
}

/// Parses a due date.
///
/// `Ok(None)` for empty input, `Ok(Some(date))` for a valid date, and a
/// user-facing reason otherwise.
pub fn parse_due_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !DUE_DATE_SHAPE_RE.is_match(trimmed) {
        return Err(format!(
            "invalid due date `{trimmed}`; expected YYYY-MM-DD, e.g. 2025-12-31"
        ));
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| format!("`{trimmed}` is not a calendar date"))
}

/// Keystroke filter for a due-date entry field.
///
/// Accepts every prefix of a `YYYY-MM-DD` string: digits and dashes only,
/// at most 10 characters, dashes only at offsets 4 and 7.
pub fn is_partial_due_date(value: &str) -> bool {
    value.len() <= 10 && PARTIAL_DUE_DATE_RE.is_match(value) && dashes_in_place(value)
}

fn dashes_in_place(value: &str) -> bool {
    value
        .char_indices()
        .all(|(index, ch)| ch != '-' || index == 4 || index == 7)
}

#[cfg(test)]
mod tests {
    use super::{is_partial_due_date, is_valid_due_date, parse_due_date};
    use chrono::NaiveDate;

    #[test]
    fn empty_and_calendar_dates_are_valid() {
        assert!(is_valid_due_date(""));
        assert!(is_valid_due_date("   "));
        assert!(is_valid_due_date("2025-12-31"));
        assert!(is_valid_due_date("2024-02-29"));
    }

    #[test]
    fn rejects_wrong_shape_and_impossible_dates() {
        assert!(!is_valid_due_date("2025-1-5"));
        assert!(!is_valid_due_date("31.12.2025"));
        assert!(!is_valid_due_date("2025-02-30"));
        assert!(!is_valid_due_date("2023-02-29"));
        assert!(!is_valid_due_date("tomorrow"));
    }

    #[test]
    fn parse_reports_reason() {
        assert_eq!(parse_due_date("").expect("empty is valid"), None);
        assert_eq!(
            parse_due_date(" 2025-01-10 ").expect("date should parse"),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
        let reason = parse_due_date("2025/01/10").expect_err("slashes are rejected");
        assert!(reason.contains("YYYY-MM-DD"));
    }

    #[test]
    fn partial_input_accepts_prefixes_only() {
        for prefix in ["", "2", "2025", "2025-", "2025-1", "2025-12-", "2025-12-31"] {
            assert!(is_partial_due_date(prefix), "prefix `{prefix}` should pass");
        }
        for bad in ["20a5", "2025-12-311", "-2025", "20-25", "2025--"] {
            assert!(!is_partial_due_date(bad), "input `{bad}` should fail");
        }
    }
}
