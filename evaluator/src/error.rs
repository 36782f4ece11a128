use std::path::PathBuf;

use evaluation::SourceError;
use thiserror::Error;

/// Errors surfaced by the public evaluator API.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The configured engine executable does not exist. Raised at
    /// construction, before any session is opened.
    #[error("engine executable not found at {}", path.display())]
    Configuration { path: PathBuf },

    /// The engine collaborator failed or went away mid-session. Surfaced per
    /// call, never retried.
    #[error("engine failure: {0}")]
    Engine(#[source] SourceError),

    /// A caller-supplied parameter was rejected before reaching the engine.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The engine finished a search without reporting any score.
    #[error("engine reported no score for the position")]
    MissingScore,
}

impl EvalError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        EvalError::InvalidInput {
            reason: reason.into(),
        }
    }
}
