use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use evaluation::TimeStrategy;
use evaluator::config::{
    DEFAULT_POSITION_WEIGHT, DEFAULT_SEARCH_DEPTH, DEFAULT_TIME_THRESHOLD, DEFAULT_TIME_WEIGHT,
};

#[derive(Parser, Debug)]
#[command(name = "Pendulum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Chess evaluation bar blending engine scores with clock pressure")]
pub struct Args {
    /// Path to a UCI engine executable (e.g. Stockfish).
    #[arg(short, long)]
    pub engine: PathBuf,

    /// Position to evaluate as a FEN string. Defaults to the starting position.
    #[arg(long)]
    pub fen: Option<String>,

    /// White's remaining time in seconds.
    #[arg(long)]
    pub white_time: f64,

    /// Black's remaining time in seconds.
    #[arg(long)]
    pub black_time: f64,

    /// Weight of the engine's position score in the blend.
    #[arg(long, default_value_t = DEFAULT_POSITION_WEIGHT)]
    pub position_weight: f64,

    /// Weight of the time advantage in the blend.
    #[arg(long, default_value_t = DEFAULT_TIME_WEIGHT)]
    pub time_weight: f64,

    /// Seconds below which time pressure starts to matter.
    #[arg(long, default_value_t = DEFAULT_TIME_THRESHOLD)]
    pub threshold: f64,

    /// Engine search depth.
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub depth: u8,

    /// How remaining clock times are turned into an advantage.
    #[arg(long, value_enum, default_value = "sigmoid")]
    pub strategy: Strategy,

    /// Log engine communication to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Strategy {
    HardThreshold,
    Sigmoid,
    InversePressure,
}

impl From<Strategy> for TimeStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::HardThreshold => TimeStrategy::HardThreshold,
            Strategy::Sigmoid => TimeStrategy::Sigmoid,
            Strategy::InversePressure => TimeStrategy::InversePressure,
        }
    }
}
