//! Curriculum content models.
//!
//! A subject's curriculum is a tree: strands own sub-strands, and lessons
//! reference their owning sub-strand by id (the tree does not hold live
//! lesson collections — lessons are supplied as a separate ordered list and
//! joined back through [`CurriculumIndex`](crate::index::CurriculumIndex)).
//!
//! # Ingestion
//!
//! Upstream editors save some pedagogical fields as either a free-text block
//! or a list, depending on how the author entered them. [`TextOrList`]
//! absorbs both shapes at the boundary and canonicalizes to `Vec<String>`
//! once; nothing downstream branches on shape.

use serde::{Deserialize, Serialize};

/// The atomic, individually schedulable teaching unit.
///
/// Lessons carry a global ordering key (`lesson_number`, ascending and
/// unique within a subject) and may override their sub-strand's learning
/// outcomes; all other pedagogical fields are inherited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique lesson identifier.
    pub id: String,
    /// Global ordering key within the subject (ascending, unique).
    pub lesson_number: u32,
    /// Lesson title.
    pub title: String,
    /// Owning sub-strand id.
    pub substrand_id: String,
    /// Lesson-level learning outcomes, overriding the sub-strand's when
    /// non-empty.
    pub learning_outcomes: Option<String>,
}

impl Lesson {
    /// Creates a new lesson.
    pub fn new(id: impl Into<String>, lesson_number: u32, substrand_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lesson_number,
            title: String::new(),
            substrand_id: substrand_id.into(),
            learning_outcomes: None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets lesson-level learning outcomes.
    pub fn with_outcomes(mut self, outcomes: impl Into<String>) -> Self {
        self.learning_outcomes = Some(outcomes.into());
        self
    }
}

/// A themed subdivision of a strand carrying shared pedagogical guidance.
///
/// Curriculum authors write pedagogy at this granularity; lessons inherit
/// it downward (see [`crate::metadata`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Substrand {
    /// Unique sub-strand identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position within the owning strand.
    pub sequence_order: u32,
    /// Specific learning outcomes, canonicalized to one item per line.
    pub specific_learning_outcomes: Vec<String>,
    /// Suggested learning experiences, canonicalized to one item per line.
    pub suggested_learning_experiences: Vec<String>,
    /// Key inquiry questions. Lessons never override this field.
    pub key_inquiry_questions: Option<String>,
}

impl Substrand {
    /// Creates a new sub-strand.
    pub fn new(id: impl Into<String>, name: impl Into<String>, sequence_order: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sequence_order,
            specific_learning_outcomes: Vec::new(),
            suggested_learning_experiences: Vec::new(),
            key_inquiry_questions: None,
        }
    }

    /// Sets the specific learning outcomes from either a text block or a list.
    pub fn with_specific_outcomes(mut self, outcomes: impl Into<TextOrList>) -> Self {
        self.specific_learning_outcomes = outcomes.into().into_items();
        self
    }

    /// Sets the suggested learning experiences from either a text block or a list.
    pub fn with_experiences(mut self, experiences: impl Into<TextOrList>) -> Self {
        self.suggested_learning_experiences = experiences.into().into_items();
        self
    }

    /// Sets the key inquiry questions.
    pub fn with_inquiry_questions(mut self, questions: impl Into<String>) -> Self {
        self.key_inquiry_questions = Some(questions.into());
        self
    }
}

/// Top-level curriculum grouping for a subject/grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strand {
    /// Unique strand identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position within the subject.
    pub sequence_order: u32,
    /// Sub-strands owned by this strand, in sequence order.
    pub substrands: Vec<Substrand>,
}

impl Strand {
    /// Creates a new strand.
    pub fn new(id: impl Into<String>, name: impl Into<String>, sequence_order: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sequence_order,
            substrands: Vec::new(),
        }
    }

    /// Adds a sub-strand.
    pub fn with_substrand(mut self, substrand: Substrand) -> Self {
        self.substrands.push(substrand);
        self
    }
}

/// A field that upstream may supply as free text or as a list.
///
/// Resolved once at ingestion into a canonical `Vec<String>`: text is split
/// on newlines, every item is trimmed, and empty items are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    /// A single text block, one item per line.
    Text(String),
    /// An already-split list of items.
    List(Vec<String>),
}

impl TextOrList {
    /// Canonicalizes to a list of trimmed, non-empty items.
    pub fn into_items(self) -> Vec<String> {
        let raw = match self {
            TextOrList::Text(text) => text.lines().map(str::to_string).collect(),
            TextOrList::List(items) => items,
        };
        raw.into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

impl From<&str> for TextOrList {
    fn from(text: &str) -> Self {
        TextOrList::Text(text.to_string())
    }
}

impl From<String> for TextOrList {
    fn from(text: String) -> Self {
        TextOrList::Text(text)
    }
}

impl From<Vec<String>> for TextOrList {
    fn from(items: Vec<String>) -> Self {
        TextOrList::List(items)
    }
}

impl From<Vec<&str>> for TextOrList {
    fn from(items: Vec<&str>) -> Self {
        TextOrList::List(items.into_iter().map(str::to_string).collect())
    }
}
