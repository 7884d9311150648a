//! Error types for the editor

use thiserror::Error;

use crate::volume::EditError;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),
}
