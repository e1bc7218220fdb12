//! Post-generation plan edits.
//!
//! Once a plan is generated it is reviewed interactively; these operations
//! mutate it in place in response to user edits:
//!
//! - **`propagate`**: forward-fills a committed textbook name into
//!   downstream assignments that have none of their own.
//! - **`selection`**: toggles per-lesson multi-select sets and keeps their
//!   joined display strings in sync.
//!
//! Both take the plan (or assignment) as an explicit value — no hidden
//! state — so each edit is independently testable.

mod propagate;
mod selection;

pub use propagate::propagate_textbook;
pub use selection::{toggle, SelectField};
