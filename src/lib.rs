//! Scheme-of-work scheduling engine.
//!
//! Turns an ordered curriculum (strands → sub-strands → lessons), a teaching
//! cadence, and a term calendar into a week-by-week lesson plan, and supports
//! the in-place edits a review session performs on that plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Strand`, `Substrand`, `Lesson`, `Term`,
//!   `ScheduleCadence`, `LessonAssignment`, `WeekPlan`, `SchemePlan`
//! - **`validation`**: Hard input checks (empty selection, zero cadence,
//!   inverted term dates)
//! - **`index`**: `CurriculumIndex` — lesson → (strand, sub-strand) lookup
//! - **`calendar`**: `TermCalendar` — term resolution and week date ranges
//! - **`metadata`**: Pedagogical field inheritance and fallback templates
//! - **`allocator`**: Week partitioning and plan generation
//! - **`editing`**: Post-generation edits — textbook forward-fill and
//!   multi-select toggles
//! - **`export`**: Flat row serialization for the persistence collaborator
//!
//! # Architecture
//!
//! Every operation is a synchronous, pure-data transformation over a
//! `SchemePlan` owned by the caller. Fetching curriculum trees and term
//! records, persisting the finished plan, and all rendering belong to
//! external collaborators; this crate only defines the shapes it exchanges
//! with them.

pub mod allocator;
pub mod calendar;
pub mod editing;
pub mod export;
pub mod index;
pub mod metadata;
pub mod models;
pub mod validation;
