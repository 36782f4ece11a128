mod decoder;
mod error;
mod process;

pub use decoder::{Decoder, EngineOutput};
pub use error::EngineError;
pub use process::EngineProcess;

/// Null move in UCI format. Engines send it as the bestmove when the position
/// has no legal moves (e.g., checkmate).
pub const NULL_MOVE: &str = "0000";
