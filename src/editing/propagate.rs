//! Textbook reference forward-fill.
//!
//! Fired when the user commits (blurs, not keystrokes) a textbook name on
//! one assignment. The value flows forward through the rest of the plan,
//! filling every later assignment that has no textbook of its own.
//!
//! The scan does not stop at an assignment that already has a textbook: it
//! continues past it and fills further-downstream empty ones. Filling holes
//! this way means an edit near the top of the plan completes partially
//! edited plans instead of halting at the first obstacle. A consequence is
//! that edit order matters: editing A then B can end differently from B
//! then A, since each edit only fills the slots empty at the time it runs.
//! Re-running the same edit is a no-op.

use crate::models::SchemePlan;

/// The token in the default resources phrase replaced by a textbook name.
/// Matches the leading word of [`crate::metadata::DEFAULT_RESOURCES`].
const TEXTBOOK_TOKEN: &str = "Textbooks";

/// Forward-fills `value` as the textbook name from one edited assignment.
///
/// Writes `value` into the assignment at `(from_week, from_position)` and
/// substitutes the first `"Textbooks"` occurrence in its resources string,
/// then scans every subsequent assignment in plan order: those with an
/// empty or unset textbook receive `value` and the same substitution;
/// those already set are left untouched but do not stop the scan.
///
/// # Returns
/// The number of downstream assignments modified, for user feedback
/// ("applied to N lessons"). An unknown `(week, position)` changes nothing
/// and returns 0.
pub fn propagate_textbook(
    plan: &mut SchemePlan,
    from_week: u32,
    from_position: u32,
    value: &str,
) -> usize {
    if plan.assignment(from_week, from_position).is_none() {
        return 0;
    }

    let mut updated = 0;
    let mut past_origin = false;

    for week in &mut plan.weeks {
        for assignment in &mut week.lessons {
            let at_origin =
                week.week_number == from_week && assignment.position_in_week == from_position;

            if at_origin {
                assignment.textbook_name = Some(value.to_string());
                substitute_token(&mut assignment.resources, value);
                past_origin = true;
            } else if past_origin && !assignment.has_textbook() {
                assignment.textbook_name = Some(value.to_string());
                substitute_token(&mut assignment.resources, value);
                updated += 1;
            }
        }
    }

    updated
}

/// Replaces the first literal `"Textbooks"` occurrence. No-op when absent.
fn substitute_token(resources: &mut String, value: &str) {
    if resources.contains(TEXTBOOK_TOKEN) {
        *resources = resources.replacen(TEXTBOOK_TOKEN, value, 1);
    }
}
