//! Edit modes and the engine that applies them.

pub mod engine;
pub mod mode;

pub use engine::{EditEngine, EditOutcome, EditPlan};
pub use mode::{ActionMode, ActionSelector};
