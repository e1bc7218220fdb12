//! Scheme-of-work domain models.
//!
//! Two families of types:
//!
//! - **Input**: the curriculum tree (`Strand` → `Substrand`, with `Lesson`s
//!   joined by back-reference), `Term` records, and the `ScheduleCadence`.
//! - **Output**: the generated `SchemePlan` of `WeekPlan`s and
//!   `LessonAssignment`s, which the editing operations mutate in place.

mod curriculum;
mod plan;
mod term;

pub(crate) use term::leading_number;

pub use curriculum::{Lesson, Strand, Substrand, TextOrList};
pub use plan::{LessonAssignment, ScheduleCadence, SchemePlan, WeekDates, WeekPlan};
pub use term::Term;
