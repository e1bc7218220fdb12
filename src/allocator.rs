//! Week allocation — the central algorithm.
//!
//! Partitions an ordered lesson sequence into weeks at the configured
//! cadence and populates each assignment's pedagogical fields.
//!
//! # Algorithm
//!
//! 1. Walk the ordered lessons once, consuming `lessons_per_week` per week.
//! 2. Assign 1-based week numbers and positions as the walk proceeds.
//! 3. Stop as soon as all lessons are consumed — the allocator never emits
//!    empty trailing weeks, even when the configured term length exceeds
//!    what the content fills. `ScheduleCadence::target_weeks` exposes the
//!    configured horizon for display.
//! 4. Resolve each lesson's `(strand, sub-strand)` through the curriculum
//!    index, degrading to placeholder names on a miss, and compute its
//!    field set.
//!
//! Allocation is stable and order-preserving: flattening the plan by
//! `(week_number, position_in_week)` reproduces the input exactly.
//!
//! # Complexity
//! O(n) over the lesson selection.

use crate::calendar::TermCalendar;
use crate::index::{CurriculumIndex, STRAND_PLACEHOLDER, SUBSTRAND_PLACEHOLDER};
use crate::metadata::resolve_fields;
use crate::models::{
    Lesson, LessonAssignment, ScheduleCadence, SchemePlan, Strand, Term, WeekPlan,
};
use crate::validation::{validate_generation_input, ValidationError, ValidationErrorKind};

/// Input container for one generation run.
///
/// # Example
///
/// ```
/// use scheme_engine::allocator::{generate, GenerationRequest};
/// use scheme_engine::models::{Lesson, ScheduleCadence, Strand, Substrand};
///
/// let strands = vec![
///     Strand::new("s1", "Numbers", 1).with_substrand(Substrand::new("ss1", "Counting", 1)),
/// ];
/// let lessons = vec![Lesson::new("l1", 1, "ss1"), Lesson::new("l2", 2, "ss1")];
/// let request = GenerationRequest::new(lessons, ScheduleCadence::new(2, 12), strands)
///     .with_term("Term 1", 2025);
///
/// let plan = generate(&request).unwrap();
/// assert_eq!(plan.week_count(), 1);
/// assert_eq!(plan.total_lessons, 2);
/// ```
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Caller-selected lessons, sorted ascending by `lesson_number`.
    pub lessons: Vec<Lesson>,
    /// Teaching cadence.
    pub cadence: ScheduleCadence,
    /// The subject's curriculum tree.
    pub strands: Vec<Strand>,
    /// Known term records, possibly empty.
    pub terms: Vec<Term>,
    /// Term label the plan is generated for.
    pub term_label: String,
    /// Year the plan is generated for.
    pub year: i32,
}

impl GenerationRequest {
    /// Creates a request with no term calendar.
    pub fn new(lessons: Vec<Lesson>, cadence: ScheduleCadence, strands: Vec<Strand>) -> Self {
        Self {
            lessons,
            cadence,
            strands,
            terms: Vec::new(),
            term_label: String::new(),
            year: 0,
        }
    }

    /// Sets the term the plan is generated for.
    pub fn with_term(mut self, label: impl Into<String>, year: i32) -> Self {
        self.term_label = label.into();
        self.year = year;
        self
    }

    /// Supplies the known term records.
    pub fn with_terms(mut self, terms: Vec<Term>) -> Self {
        self.terms = terms;
        self
    }
}

/// Partitions ordered lessons into weeks.
///
/// `ordered_lessons` must already be sorted ascending by `lesson_number`;
/// resequencing is the caller's responsibility, not the allocator's. An
/// empty selection or a zero cadence is rejected before any plan is built.
pub fn allocate(
    ordered_lessons: &[Lesson],
    cadence: &ScheduleCadence,
    index: &CurriculumIndex,
) -> Result<SchemePlan, ValidationError> {
    if ordered_lessons.is_empty() {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptySelection,
            "no lessons selected for scheme generation",
        ));
    }
    if cadence.lessons_per_week == 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidCadence,
            "lessons per week must be at least 1",
        ));
    }

    let per_week = cadence.lessons_per_week as usize;
    let mut weeks = Vec::with_capacity(cadence.required_weeks(ordered_lessons.len()) as usize);

    for (week_idx, chunk) in ordered_lessons.chunks(per_week).enumerate() {
        let week_number = week_idx as u32 + 1;
        let lessons = chunk
            .iter()
            .enumerate()
            .map(|(pos, lesson)| build_assignment(lesson, pos as u32 + 1, index))
            .collect();
        weeks.push(WeekPlan {
            week_number,
            lessons,
            dates: None,
        });
    }

    Ok(SchemePlan {
        weeks,
        total_lessons: ordered_lessons.len(),
    })
}

/// Runs a full generation: validate, allocate, annotate week dates.
///
/// All validation failures are reported together; no partial plan escapes
/// a failed run.
pub fn generate(request: &GenerationRequest) -> Result<SchemePlan, Vec<ValidationError>> {
    validate_generation_input(&request.lessons, &request.cadence, &request.terms)?;

    let index = CurriculumIndex::new(&request.strands);
    let mut plan =
        allocate(&request.lessons, &request.cadence, &index).map_err(|e| vec![e])?;

    let calendar = TermCalendar::new(request.terms.clone());
    for week in &mut plan.weeks {
        week.dates = calendar.week_range(&request.term_label, request.year, week.week_number);
    }

    Ok(plan)
}

fn build_assignment(lesson: &Lesson, position: u32, index: &CurriculumIndex) -> LessonAssignment {
    let resolved = index.resolve(lesson);
    let (strand_name, substrand_name) = match resolved {
        Some((strand, substrand)) => (strand.name.clone(), substrand.name.clone()),
        None => (
            STRAND_PLACEHOLDER.to_string(),
            SUBSTRAND_PLACEHOLDER.to_string(),
        ),
    };
    let fields = resolve_fields(lesson, resolved.map(|(_, ss)| ss));

    LessonAssignment {
        lesson_id: lesson.id.clone(),
        position_in_week: position,
        strand_name,
        substrand_name,
        learning_outcomes: fields.learning_outcomes,
        key_inquiry_questions: fields.key_inquiry_questions,
        learning_experiences: fields.learning_experiences,
        resources: fields.resources,
        assessment_methods: fields.assessment_methods,
        textbook_name: None,
        textbook_guide_pages: None,
        textbook_learner_pages: None,
        selected_resources: Vec::new(),
        selected_assessment_methods: Vec::new(),
        reflection: String::new(),
    }
}
