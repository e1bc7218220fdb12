//! Flat serialization of a finished plan.
//!
//! The persistence and rendering collaborators consume the plan as a flat,
//! storage-agnostic record shape: one row per `(week_number,
//! position_in_week)` carrying every assignment field plus the resolved
//! week dates. A calendar miss or an unset term calendar serializes as
//! null dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SchemePlan;

/// One flat row of the serialized plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRow {
    pub week_number: u32,
    pub position_in_week: u32,
    pub lesson_id: String,
    pub strand_name: String,
    pub substrand_name: String,
    pub learning_outcomes: String,
    pub key_inquiry_questions: String,
    pub learning_experiences: String,
    pub resources: String,
    pub assessment_methods: String,
    pub textbook_name: Option<String>,
    pub textbook_guide_pages: Option<String>,
    pub textbook_learner_pages: Option<String>,
    pub selected_resources: Vec<String>,
    pub selected_assessment_methods: Vec<String>,
    pub reflection: String,
    /// First instructional day, null when no term record resolved.
    pub week_start: Option<NaiveDate>,
    /// Last instructional day, null when no term record resolved.
    pub week_end: Option<NaiveDate>,
}

/// Flattens a plan into rows, in `(week_number, position_in_week)` order.
pub fn flatten_plan(plan: &SchemePlan) -> Vec<PlanRow> {
    let mut rows = Vec::with_capacity(plan.total_lessons);
    for week in &plan.weeks {
        let range = week.dates.and_then(|d| d.range());
        for assignment in &week.lessons {
            rows.push(PlanRow {
                week_number: week.week_number,
                position_in_week: assignment.position_in_week,
                lesson_id: assignment.lesson_id.clone(),
                strand_name: assignment.strand_name.clone(),
                substrand_name: assignment.substrand_name.clone(),
                learning_outcomes: assignment.learning_outcomes.clone(),
                key_inquiry_questions: assignment.key_inquiry_questions.clone(),
                learning_experiences: assignment.learning_experiences.clone(),
                resources: assignment.resources.clone(),
                assessment_methods: assignment.assessment_methods.clone(),
                textbook_name: assignment.textbook_name.clone(),
                textbook_guide_pages: assignment.textbook_guide_pages.clone(),
                textbook_learner_pages: assignment.textbook_learner_pages.clone(),
                selected_resources: assignment.selected_resources.clone(),
                selected_assessment_methods: assignment.selected_assessment_methods.clone(),
                reflection: assignment.reflection.clone(),
                week_start: range.map(|(start, _)| start),
                week_end: range.map(|(_, end)| end),
            });
        }
    }
    rows
}
