use std::io;

use thiserror::Error;

/// Failures talking to the external UCI engine process.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine process: {0}")]
    Spawn(#[source] io::Error),

    #[error("engine stdio was not captured")]
    MissingStdio,

    #[error("engine i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("engine closed its output before responding")]
    UnexpectedEof,
}
