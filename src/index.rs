//! Curriculum lookup index.
//!
//! Resolves a lesson to its owning `(strand, sub-strand)` pair. Built once
//! per generation run from the full strand tree of one subject and borrowed
//! for the run's duration — the tree is immutable while a plan is being
//! generated.
//!
//! A failed lookup is not an error: curriculum content can be edited out
//! from under a plan in progress, so the caller substitutes placeholder
//! names and generation completes with a usable (if imperfect) plan.

use std::collections::HashMap;

use crate::models::{Lesson, Strand, Substrand};

/// Placeholder strand name used when a lesson's owner cannot be resolved.
pub const STRAND_PLACEHOLDER: &str = "Strand";
/// Placeholder sub-strand name used when a lesson's owner cannot be resolved.
pub const SUBSTRAND_PLACEHOLDER: &str = "Substrand";

/// Read-only lookup over one subject's curriculum tree.
#[derive(Debug)]
pub struct CurriculumIndex<'a> {
    by_substrand: HashMap<&'a str, (&'a Strand, &'a Substrand)>,
}

impl<'a> CurriculumIndex<'a> {
    /// Flattens the strand tree into a sub-strand keyed lookup.
    pub fn new(strands: &'a [Strand]) -> Self {
        let mut by_substrand = HashMap::new();
        for strand in strands {
            for substrand in &strand.substrands {
                by_substrand.insert(substrand.id.as_str(), (strand, substrand));
            }
        }
        Self { by_substrand }
    }

    /// Resolves a lesson to its owning `(strand, sub-strand)`.
    ///
    /// `None` means the lesson references a sub-strand absent from the
    /// supplied tree; the caller degrades to placeholder names rather than
    /// failing.
    pub fn resolve(&self, lesson: &Lesson) -> Option<(&'a Strand, &'a Substrand)> {
        self.resolve_substrand(&lesson.substrand_id)
    }

    /// Direct lookup by sub-strand id.
    pub fn resolve_substrand(&self, substrand_id: &str) -> Option<(&'a Strand, &'a Substrand)> {
        self.by_substrand.get(substrand_id).copied()
    }

    /// Number of indexed sub-strands.
    pub fn len(&self) -> usize {
        self.by_substrand.len()
    }

    /// Whether the tree contained no sub-strands at all.
    pub fn is_empty(&self) -> bool {
        self.by_substrand.is_empty()
    }
}
