// Score-source trait for position scoring.
//
// The `evaluation` crate owns the blending model and the interface it pulls
// raw scores through. Concrete sources live in their own crates:
// - `engine` crate: external UCI engine process
//
// This separation keeps the blending math free of process I/O, and lets the
// `evaluator` crate substitute a deterministic source in tests.

use std::error::Error;

use crate::score::RawScore;

pub type SourceError = Box<dyn Error + Send + Sync>;

/// Supplier of raw position scores.
pub trait ScoreSource: Send {
    fn name(&self) -> String;

    /// Score `fen` at `depth`, from the side-to-move perspective.
    ///
    /// `Ok(None)` means the search finished without reporting any score;
    /// callers must treat that explicitly, never as zero.
    fn raw_score(&mut self, fen: &str, depth: u8) -> Result<Option<RawScore>, SourceError>;

    /// Release any underlying session. Default: nothing to release.
    fn close(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}
