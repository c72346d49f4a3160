use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error(transparent)]
    Border(#[from] whiteborder::Error),
}
