//! Term (academic calendar period) model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An academic term with its calendar boundaries.
///
/// Terms are matched by `(label, year)`, with a numeric fallback on the
/// integer embedded in the label (see [`crate::calendar::TermCalendar`]).
/// Dates are optional: a term record may exist before the school has set
/// its calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// Display label, e.g. `"Term 2"`.
    pub label: String,
    /// Calendar year the term falls in.
    pub year: i32,
    /// First instructional day. `None` = dates not yet set.
    pub start_date: Option<NaiveDate>,
    /// Last instructional day. `None` = dates not yet set.
    pub end_date: Option<NaiveDate>,
}

impl Term {
    /// Creates a term with no dates set.
    pub fn new(label: impl Into<String>, year: i32) -> Self {
        Self {
            label: label.into(),
            year,
            start_date: None,
            end_date: None,
        }
    }

    /// Sets both calendar boundaries.
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// The first unsigned integer embedded in the label, if any.
    ///
    /// `"Term 2"` → `Some(2)`, `"2nd Term"` → `Some(2)`, `"Easter"` → `None`.
    pub fn term_number(&self) -> Option<u32> {
        leading_number(&self.label)
    }
}

/// Parses the first run of ASCII digits found in `label`.
pub(crate) fn leading_number(label: &str) -> Option<u32> {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
