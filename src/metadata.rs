//! Pedagogical field resolution.
//!
//! Computes the effective pedagogical fields for one lesson by inheritance
//! from its sub-strand, with fixed fallback templates. Curriculum authors
//! write pedagogy at the sub-strand granularity; lessons are the unit of
//! scheduling, so fields are inherited downward with a lesson-level
//! override only for `learning_outcomes`.
//!
//! Each field resolves through its own explicit source chain, independent
//! of the others:
//!
//! | Field | Tier 1 | Tier 2 | Tier 3 |
//! |-------|--------|--------|--------|
//! | `learning_outcomes` | lesson override | sub-strand list (newline-joined) | template |
//! | `key_inquiry_questions` | sub-strand | empty | — |
//! | `learning_experiences` | sub-strand list (newline-joined) | template | — |
//! | `resources` | default phrase | — | — |
//! | `assessment_methods` | default phrase | — | — |
//! | `reflection` | always empty | — | — |

use crate::models::{Lesson, Substrand};

/// Fallback template when neither the lesson nor its sub-strand supplies
/// learning outcomes.
pub const OUTCOMES_TEMPLATE: &str =
    "By the end of the lesson, the learner should be able to:\na. \nb. \nc. ";

/// Fallback bullet placeholder for learning experiences.
pub const EXPERIENCES_TEMPLATE: &str = "a. \nb. \nc. ";

/// Default resources phrase. The leading `"Textbooks"` token is the
/// substitution target for textbook propagation.
pub const DEFAULT_RESOURCES: &str = "Textbooks, digital devices, realia";

/// Default assessment methods phrase.
pub const DEFAULT_ASSESSMENT_METHODS: &str = "Written questions, Oral questions, Observation";

/// The effective pedagogical fields of one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonFieldSet {
    pub learning_outcomes: String,
    pub key_inquiry_questions: String,
    pub learning_experiences: String,
    pub resources: String,
    pub assessment_methods: String,
    pub reflection: String,
}

/// Resolves the field set for a lesson.
///
/// `substrand` is `None` when the curriculum index could not resolve the
/// lesson's owner; inherited tiers are then skipped and the templates
/// apply.
pub fn resolve_fields(lesson: &Lesson, substrand: Option<&Substrand>) -> LessonFieldSet {
    LessonFieldSet {
        learning_outcomes: resolve_outcomes(lesson, substrand),
        key_inquiry_questions: substrand
            .and_then(|ss| ss.key_inquiry_questions.clone())
            .unwrap_or_default(),
        learning_experiences: resolve_experiences(substrand),
        resources: DEFAULT_RESOURCES.to_string(),
        assessment_methods: DEFAULT_ASSESSMENT_METHODS.to_string(),
        reflection: String::new(),
    }
}

fn resolve_outcomes(lesson: &Lesson, substrand: Option<&Substrand>) -> String {
    // Tier 1: lesson-level override.
    if let Some(own) = lesson.learning_outcomes.as_deref() {
        if !own.trim().is_empty() {
            return own.to_string();
        }
    }
    // Tier 2: inherited from the sub-strand.
    if let Some(ss) = substrand {
        if !ss.specific_learning_outcomes.is_empty() {
            return ss.specific_learning_outcomes.join("\n");
        }
    }
    // Tier 3: template.
    OUTCOMES_TEMPLATE.to_string()
}

fn resolve_experiences(substrand: Option<&Substrand>) -> String {
    if let Some(ss) = substrand {
        if !ss.suggested_learning_experiences.is_empty() {
            return ss.suggested_learning_experiences.join("\n");
        }
    }
    EXPERIENCES_TEMPLATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_substrand() -> Substrand {
        Substrand::new("ss1", "Plants", 1)
            .with_specific_outcomes("identify parts of a plant\nname uses of plants")
            .with_experiences(vec!["observe plants in the school garden", "draw a plant"])
            .with_inquiry_questions("Why do plants matter?")
    }

    #[test]
    fn test_lesson_override_wins() {
        let lesson = Lesson::new("l1", 1, "ss1").with_outcomes("custom outcomes");
        let fields = resolve_fields(&lesson, Some(&full_substrand()));
        assert_eq!(fields.learning_outcomes, "custom outcomes");
    }

    #[test]
    fn test_blank_override_falls_through() {
        let lesson = Lesson::new("l1", 1, "ss1").with_outcomes("   ");
        let fields = resolve_fields(&lesson, Some(&full_substrand()));
        assert_eq!(
            fields.learning_outcomes,
            "identify parts of a plant\nname uses of plants"
        );
    }

    #[test]
    fn test_substrand_inheritance() {
        let lesson = Lesson::new("l1", 1, "ss1");
        let fields = resolve_fields(&lesson, Some(&full_substrand()));
        assert_eq!(
            fields.learning_outcomes,
            "identify parts of a plant\nname uses of plants"
        );
        assert_eq!(fields.key_inquiry_questions, "Why do plants matter?");
        assert_eq!(
            fields.learning_experiences,
            "observe plants in the school garden\ndraw a plant"
        );
    }

    #[test]
    fn test_template_fallbacks() {
        let lesson = Lesson::new("l1", 1, "ss1");
        let bare = Substrand::new("ss1", "Plants", 1);
        let fields = resolve_fields(&lesson, Some(&bare));
        assert_eq!(fields.learning_outcomes, OUTCOMES_TEMPLATE);
        assert_eq!(fields.key_inquiry_questions, "");
        assert_eq!(fields.learning_experiences, EXPERIENCES_TEMPLATE);
    }

    #[test]
    fn test_missing_substrand() {
        let lesson = Lesson::new("l1", 1, "gone");
        let fields = resolve_fields(&lesson, None);
        assert_eq!(fields.learning_outcomes, OUTCOMES_TEMPLATE);
        assert_eq!(fields.key_inquiry_questions, "");
        assert_eq!(fields.learning_experiences, EXPERIENCES_TEMPLATE);
    }

    #[test]
    fn test_seeded_defaults() {
        let fields = resolve_fields(&Lesson::new("l1", 1, "ss1"), None);
        assert_eq!(fields.resources, DEFAULT_RESOURCES);
        assert_eq!(fields.assessment_methods, DEFAULT_ASSESSMENT_METHODS);
        assert_eq!(fields.reflection, "");
    }
}
