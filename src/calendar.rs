//! Term calendar resolution.
//!
//! Maps a `(term label, year)` pair plus a week number to a calendar date
//! range for that week.
//!
//! # Date Model
//!
//! Weeks are a fixed stride of 7 days from the term's start date, each
//! spanning 5 instructional days (Monday–Friday by convention). The
//! calendar does not inspect the actual weekday of the start date — terms
//! are assumed to start on an instructional day.
//!
//! # Resolution
//!
//! 1. Exact match on `(label, year)`, labels compared trimmed.
//! 2. Otherwise, if the requested label embeds an integer, match on
//!    `(term_number, year)` — so `"Term 2"` finds a record labelled
//!    `"2nd Term"` for the same year.
//!
//! A miss is soft: the caller renders an empty range rather than failing
//! the allocation.

use chrono::Duration;

use crate::models::{leading_number, Term, WeekDates};

/// Instructional days per week (Monday–Friday).
const INSTRUCTIONAL_DAYS: i64 = 5;

/// Resolves term records to per-week date ranges.
#[derive(Debug, Clone, Default)]
pub struct TermCalendar {
    terms: Vec<Term>,
}

impl TermCalendar {
    /// Creates a calendar over the known term records.
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Finds the term for `(label, year)`, exact match first, then the
    /// numeric-label fallback. First match in input order wins.
    pub fn resolve_term(&self, label: &str, year: i32) -> Option<&Term> {
        let wanted = label.trim();
        if let Some(term) = self
            .terms
            .iter()
            .find(|t| t.year == year && t.label.trim() == wanted)
        {
            return Some(term);
        }

        let number = leading_number(wanted)?;
        self.terms
            .iter()
            .find(|t| t.year == year && t.term_number() == Some(number))
    }

    /// Computes the date range of a plan week.
    ///
    /// `week_start = term.start_date + (week_number - 1) * 7 days`,
    /// `week_end = week_start + 4 days`.
    ///
    /// # Returns
    /// - `None` — no term record matches (the week renders an empty range)
    /// - `Some(WeekDates::DatesNotSet)` — a term matched but has no start date
    /// - `Some(WeekDates::Range { .. })` — the resolved five-day range
    pub fn week_range(&self, label: &str, year: i32, week_number: u32) -> Option<WeekDates> {
        let term = self.resolve_term(label, year)?;
        let Some(term_start) = term.start_date else {
            return Some(WeekDates::DatesNotSet);
        };

        let start = term_start + Duration::days(7 * (i64::from(week_number) - 1));
        let end = start + Duration::days(INSTRUCTIONAL_DAYS - 1);
        Some(WeekDates::Range { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_calendar() -> TermCalendar {
        TermCalendar::new(vec![
            Term::new("Term 1", 2025).with_dates(date(2025, 1, 6), date(2025, 4, 4)),
            Term::new("2nd Term", 2025).with_dates(date(2025, 5, 5), date(2025, 8, 1)),
            Term::new("Term 3", 2025),
        ])
    }

    #[test]
    fn test_exact_match_week_one() {
        let cal = sample_calendar();
        assert_eq!(
            cal.week_range("Term 1", 2025, 1),
            Some(WeekDates::Range {
                start: date(2025, 1, 6),
                end: date(2025, 1, 10),
            })
        );
    }

    #[test]
    fn test_week_stride() {
        let cal = sample_calendar();
        assert_eq!(
            cal.week_range("Term 1", 2025, 4),
            Some(WeekDates::Range {
                start: date(2025, 1, 27),
                end: date(2025, 1, 31),
            })
        );
    }

    #[test]
    fn test_numeric_label_fallback() {
        // No record labelled "Term 2", but "2nd Term" carries the number 2.
        // Week 3 starts 14 days after the term start.
        let cal = sample_calendar();
        assert_eq!(
            cal.week_range("Term 2", 2025, 3),
            Some(WeekDates::Range {
                start: date(2025, 5, 19),
                end: date(2025, 5, 23),
            })
        );
    }

    #[test]
    fn test_trimmed_label_match() {
        let cal = sample_calendar();
        assert!(cal.week_range("  Term 1  ", 2025, 1).is_some());
    }

    #[test]
    fn test_no_match_is_none() {
        let cal = sample_calendar();
        assert_eq!(cal.week_range("Term 1", 2024, 1), None);
        assert_eq!(cal.week_range("Easter", 2025, 1), None);
    }

    #[test]
    fn test_dates_not_set_marker() {
        let cal = sample_calendar();
        assert_eq!(
            cal.week_range("Term 3", 2025, 1),
            Some(WeekDates::DatesNotSet)
        );
    }

    #[test]
    fn test_exact_match_preferred_over_fallback() {
        let cal = TermCalendar::new(vec![
            Term::new("2nd Term", 2025).with_dates(date(2025, 4, 28), date(2025, 8, 1)),
            Term::new("Term 2", 2025).with_dates(date(2025, 5, 5), date(2025, 8, 1)),
        ]);
        assert_eq!(
            cal.week_range("Term 2", 2025, 1),
            Some(WeekDates::Range {
                start: date(2025, 5, 5),
                end: date(2025, 5, 9),
            })
        );
    }
}
