//! Multi-select toggles for resources and assessment methods.
//!
//! Each assignment keeps two insertion-ordered selection sets alongside
//! their comma-joined display strings. The display string — not the set —
//! is the value persisted and rendered downstream; the set only drives the
//! toggle UI and survives a reload only if persisted verbatim alongside
//! the string.

use crate::models::LessonAssignment;

/// Which multi-select field a toggle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectField {
    /// Teaching resources (`selected_resources` / `resources`).
    Resources,
    /// Assessment methods (`selected_assessment_methods` / `assessment_methods`).
    AssessmentMethods,
}

/// Toggles `option` in the assignment's selection set for `field`.
///
/// Adds the option if absent, removes it if present (insertion order is
/// preserved for the remaining entries), then rewrites the corresponding
/// display string as the `", "`-join of the set. An emptied set yields an
/// empty display string.
pub fn toggle(assignment: &mut LessonAssignment, field: SelectField, option: &str) {
    let (set, display) = match field {
        SelectField::Resources => (
            &mut assignment.selected_resources,
            &mut assignment.resources,
        ),
        SelectField::AssessmentMethods => (
            &mut assignment.selected_assessment_methods,
            &mut assignment.assessment_methods,
        ),
    };

    match set.iter().position(|entry| entry == option) {
        Some(idx) => {
            set.remove(idx);
        }
        None => set.push(option.to_string()),
    }

    *display = set.join(", ");
}
