//! Scheme plan (solution) model.
//!
//! A scheme of work is a complete assignment of lessons to weeks. It is
//! produced once per generation request, then mutated in place by the
//! editing operations ([`crate::editing`]) before being handed whole to the
//! persistence collaborator.
//!
//! # Ordering
//!
//! Plan order is `(week_number, position_in_week)`, both 1-based. Flattening
//! the plan in that order reproduces the generation input exactly —
//! allocation is stable and order-preserving.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The configured teaching cadence for one generation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduleCadence {
    /// Lessons taught per calendar week. Must be ≥ 1.
    pub lessons_per_week: u32,
    /// The term length the school configured, in weeks.
    ///
    /// Informational only: the allocator never pads the plan out to this
    /// length (see [`target_weeks`](Self::target_weeks)).
    pub configured_total_weeks: u32,
}

impl ScheduleCadence {
    /// Creates a cadence.
    pub fn new(lessons_per_week: u32, configured_total_weeks: u32) -> Self {
        Self {
            lessons_per_week,
            configured_total_weeks,
        }
    }

    /// Weeks needed to hold `total_lessons` at this cadence (ceiling).
    ///
    /// Returns 0 when the cadence itself is 0; validation rejects that
    /// case before any plan is built.
    pub fn required_weeks(&self, total_lessons: usize) -> u32 {
        if self.lessons_per_week == 0 {
            return 0;
        }
        let per_week = self.lessons_per_week as usize;
        total_lessons.div_ceil(per_week) as u32
    }

    /// The larger of [`required_weeks`](Self::required_weeks) and the
    /// configured term length.
    ///
    /// Display value only — plan length is always `required_weeks`.
    pub fn target_weeks(&self, total_lessons: usize) -> u32 {
        self.required_weeks(total_lessons)
            .max(self.configured_total_weeks)
    }
}

/// Resolved calendar dates for one plan week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekDates {
    /// A five-day instructional week, Monday–Friday by convention.
    Range {
        /// First instructional day.
        start: NaiveDate,
        /// Last instructional day (`start + 4 days`).
        end: NaiveDate,
    },
    /// A term matched the request but has no start date set yet.
    DatesNotSet,
}

impl WeekDates {
    /// The `(start, end)` pair, or `None` for [`WeekDates::DatesNotSet`].
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            WeekDates::Range { start, end } => Some((*start, *end)),
            WeekDates::DatesNotSet => None,
        }
    }
}

/// One lesson's slot in the plan, with its resolved pedagogical fields.
///
/// Created by the allocator, then mutated in place by the editing
/// operations. The `resources` and `assessment_methods` strings — not the
/// `selected_*` sets — are the values persisted and rendered downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonAssignment {
    /// Assigned lesson id.
    pub lesson_id: String,
    /// 1-based slot within the week.
    pub position_in_week: u32,
    /// Owning strand name, or the placeholder `"Strand"` when unresolved.
    pub strand_name: String,
    /// Owning sub-strand name, or the placeholder `"Substrand"` when unresolved.
    pub substrand_name: String,
    /// Resolved learning outcomes.
    pub learning_outcomes: String,
    /// Resolved key inquiry questions.
    pub key_inquiry_questions: String,
    /// Resolved learning experiences.
    pub learning_experiences: String,
    /// Display string of teaching resources.
    pub resources: String,
    /// Display string of assessment methods.
    pub assessment_methods: String,
    /// Shared textbook reference, forward-filled across the plan on edit.
    pub textbook_name: Option<String>,
    /// Teacher's-guide page range for this lesson.
    pub textbook_guide_pages: Option<String>,
    /// Learner's-book page range for this lesson.
    pub textbook_learner_pages: Option<String>,
    /// Insertion-ordered resource selections driving the toggle UI.
    pub selected_resources: Vec<String>,
    /// Insertion-ordered assessment selections driving the toggle UI.
    pub selected_assessment_methods: Vec<String>,
    /// Post-delivery reflection. Starts empty, manual edit only.
    pub reflection: String,
}

impl LessonAssignment {
    /// Whether a textbook name has been set to a non-empty value.
    pub fn has_textbook(&self) -> bool {
        self.textbook_name
            .as_deref()
            .is_some_and(|name| !name.is_empty())
    }
}

/// One week of the scheme, holding 1..=`lessons_per_week` assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPlan {
    /// 1-based week number, contiguous across the plan.
    pub week_number: u32,
    /// Assignments in position order.
    pub lessons: Vec<LessonAssignment>,
    /// Calendar dates, `None` when no term record matched.
    pub dates: Option<WeekDates>,
}

/// A complete scheme of work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemePlan {
    /// Weeks in order, numbered contiguously from 1.
    pub weeks: Vec<WeekPlan>,
    /// Total assignments across all weeks.
    pub total_lessons: usize,
}

impl SchemePlan {
    /// Iterates assignments in plan order as `(week_number, assignment)`.
    pub fn flattened(&self) -> impl Iterator<Item = (u32, &LessonAssignment)> {
        self.weeks
            .iter()
            .flat_map(|week| week.lessons.iter().map(move |a| (week.week_number, a)))
    }

    /// Looks up an assignment by its 1-based `(week, position)` pair.
    pub fn assignment(&self, week_number: u32, position: u32) -> Option<&LessonAssignment> {
        self.weeks
            .iter()
            .find(|w| w.week_number == week_number)?
            .lessons
            .iter()
            .find(|a| a.position_in_week == position)
    }

    /// Mutable lookup by 1-based `(week, position)`.
    pub fn assignment_mut(
        &mut self,
        week_number: u32,
        position: u32,
    ) -> Option<&mut LessonAssignment> {
        self.weeks
            .iter_mut()
            .find(|w| w.week_number == week_number)?
            .lessons
            .iter_mut()
            .find(|a| a.position_in_week == position)
    }

    /// Number of weeks in the plan.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Checks the structural invariants of a well-formed plan:
    /// week numbers contiguous from 1, every week non-empty, positions
    /// running 1..=len within each week, and `total_lessons` matching the
    /// actual count.
    pub fn is_consistent(&self) -> bool {
        let mut counted = 0;
        for (idx, week) in self.weeks.iter().enumerate() {
            if week.week_number != idx as u32 + 1 || week.lessons.is_empty() {
                return false;
            }
            for (pos, assignment) in week.lessons.iter().enumerate() {
                if assignment.position_in_week != pos as u32 + 1 {
                    return false;
                }
            }
            counted += week.lessons.len();
        }
        counted == self.total_lessons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(lesson_id: &str, position: u32) -> LessonAssignment {
        LessonAssignment {
            lesson_id: lesson_id.to_string(),
            position_in_week: position,
            strand_name: "Strand".into(),
            substrand_name: "Substrand".into(),
            learning_outcomes: String::new(),
            key_inquiry_questions: String::new(),
            learning_experiences: String::new(),
            resources: String::new(),
            assessment_methods: String::new(),
            textbook_name: None,
            textbook_guide_pages: None,
            textbook_learner_pages: None,
            selected_resources: Vec::new(),
            selected_assessment_methods: Vec::new(),
            reflection: String::new(),
        }
    }

    fn sample_plan() -> SchemePlan {
        SchemePlan {
            weeks: vec![
                WeekPlan {
                    week_number: 1,
                    lessons: vec![assignment("l1", 1), assignment("l2", 2)],
                    dates: None,
                },
                WeekPlan {
                    week_number: 2,
                    lessons: vec![assignment("l3", 1)],
                    dates: None,
                },
            ],
            total_lessons: 3,
        }
    }

    #[test]
    fn test_required_and_target_weeks() {
        let cadence = ScheduleCadence::new(5, 14);
        assert_eq!(cadence.required_weeks(23), 5);
        assert_eq!(cadence.required_weeks(25), 5);
        assert_eq!(cadence.required_weeks(26), 6);
        assert_eq!(cadence.target_weeks(23), 14);
        assert_eq!(cadence.target_weeks(100), 20);
    }

    #[test]
    fn test_flattened_order() {
        let plan = sample_plan();
        let ids: Vec<&str> = plan.flattened().map(|(_, a)| a.lesson_id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_assignment_lookup() {
        let plan = sample_plan();
        assert_eq!(plan.assignment(2, 1).unwrap().lesson_id, "l3");
        assert!(plan.assignment(2, 2).is_none());
        assert!(plan.assignment(3, 1).is_none());
    }

    #[test]
    fn test_is_consistent() {
        assert!(sample_plan().is_consistent());

        let mut gap = sample_plan();
        gap.weeks[1].week_number = 3;
        assert!(!gap.is_consistent());

        let mut wrong_total = sample_plan();
        wrong_total.total_lessons = 4;
        assert!(!wrong_total.is_consistent());

        let mut empty_week = sample_plan();
        empty_week.weeks[1].lessons.clear();
        assert!(!empty_week.is_consistent());
    }

    #[test]
    fn test_week_dates_range() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 5, 9).unwrap();
        assert_eq!(WeekDates::Range { start, end }.range(), Some((start, end)));
        assert_eq!(WeekDates::DatesNotSet.range(), None);
    }

    #[test]
    fn test_has_textbook() {
        let mut a = assignment("l1", 1);
        assert!(!a.has_textbook());
        a.textbook_name = Some(String::new());
        assert!(!a.has_textbook());
        a.textbook_name = Some("Oxford Grade 5".into());
        assert!(a.has_textbook());
    }
}
