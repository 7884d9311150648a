//! Cubedit - pick-and-edit core for an interactive cube editor

pub mod core;
pub mod math;
pub mod volume;
pub mod pick;
pub mod hover;
pub mod edit;
pub mod render;
pub mod editor;
