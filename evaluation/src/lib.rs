pub mod blend;
pub mod def;
pub mod probability;
pub mod score;
pub mod time;

pub use blend::{Evaluation, Weights};
pub use def::{ScoreSource, SourceError};
pub use probability::win_probability;
pub use score::{normalize, to_white_perspective, RawScore};
pub use time::TimeStrategy;
