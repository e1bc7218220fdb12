//! Input validation for plan generation.
//!
//! Checks the generation inputs before any plan is built. Detects:
//! - Empty lesson selection
//! - A cadence of zero lessons per week
//! - Term records whose end date precedes their start date
//!
//! These are the only hard failures in the engine. Unresolvable curriculum
//! references and calendar misses are soft conditions absorbed downstream
//! (placeholder names, empty date ranges) so that generation always
//! completes.

use crate::models::{Lesson, ScheduleCadence, Term};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No lessons were selected for generation.
    EmptySelection,
    /// `lessons_per_week` is zero; allocation would never terminate.
    InvalidCadence,
    /// A term's end date precedes its start date.
    InvalidTermDates,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs to a generation run.
///
/// Checks:
/// 1. The lesson selection is non-empty
/// 2. `lessons_per_week` ≥ 1
/// 3. Every term with both dates set has `start_date ≤ end_date`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// Generation must be blocked on any error — no partial plan is produced.
pub fn validate_generation_input(
    lessons: &[Lesson],
    cadence: &ScheduleCadence,
    terms: &[Term],
) -> ValidationResult {
    let mut errors = Vec::new();

    if lessons.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySelection,
            "no lessons selected for scheme generation",
        ));
    }

    if cadence.lessons_per_week == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCadence,
            "lessons per week must be at least 1",
        ));
    }

    for term in terms {
        if let (Some(start), Some(end)) = (term.start_date, term.end_date) {
            if end < start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTermDates,
                    format!("term '{}' ({}) ends before it starts", term.label, term.year),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_lessons() -> Vec<Lesson> {
        vec![Lesson::new("l1", 1, "ss1"), Lesson::new("l2", 2, "ss1")]
    }

    #[test]
    fn test_valid_input() {
        let terms = vec![Term::new("Term 1", 2025).with_dates(date(2025, 1, 6), date(2025, 4, 4))];
        let cadence = ScheduleCadence::new(5, 14);
        assert!(validate_generation_input(&sample_lessons(), &cadence, &terms).is_ok());
    }

    #[test]
    fn test_empty_selection() {
        let errors =
            validate_generation_input(&[], &ScheduleCadence::new(5, 14), &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySelection));
    }

    #[test]
    fn test_zero_cadence() {
        let errors =
            validate_generation_input(&sample_lessons(), &ScheduleCadence::new(0, 14), &[])
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCadence));
    }

    #[test]
    fn test_inverted_term_dates() {
        let terms = vec![Term::new("Term 2", 2025).with_dates(date(2025, 8, 1), date(2025, 5, 1))];
        let errors =
            validate_generation_input(&sample_lessons(), &ScheduleCadence::new(5, 14), &terms)
                .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTermDates
                && e.message.contains("Term 2")));
    }

    #[test]
    fn test_term_without_dates_is_fine() {
        let terms = vec![Term::new("Term 3", 2025)];
        let cadence = ScheduleCadence::new(5, 14);
        assert!(validate_generation_input(&sample_lessons(), &cadence, &terms).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let terms = vec![Term::new("Term 1", 2025).with_dates(date(2025, 4, 4), date(2025, 1, 6))];
        let errors =
            validate_generation_input(&[], &ScheduleCadence::new(0, 14), &terms).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
