//! The editor: configuration, state, and the controller that drives it.

pub mod config;
pub mod context;
pub mod controller;
pub mod inspector;
pub mod script;
pub mod selection;

pub use config::EditorConfig;
pub use context::EditorContext;
pub use controller::{ClickOutcome, EditorController};
pub use inspector::Inspector;
pub use script::{ScriptStep, SessionScript, SessionSummary};
pub use selection::{Outline, Selection};
