mod args;

use args::Args;
use clap::Parser;
use cozy_chess::Board;
use evaluator::{ClockAwareEvaluator, EvaluatorConfig};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::str::FromStr;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let board = match &args.fen {
        Some(fen) => Board::from_str(fen).map_err(|e| format!("Invalid FEN: {}", e))?,
        None => Board::default(),
    };

    let config = EvaluatorConfig::new(&args.engine)
        .with_weights(args.position_weight, args.time_weight)
        .with_threshold(args.threshold)
        .with_depth(args.depth)
        .with_strategy(args.strategy.into());

    log::info!(
        "Evaluating at depth {} ({:?} time strategy)",
        config.search_depth,
        config.time_strategy
    );

    let mut evaluator = ClockAwareEvaluator::open(config)?;

    let evaluation = evaluator.evaluate(&board, args.white_time, args.black_time)?;
    let probability = evaluator.win_probability(&board, args.white_time, args.black_time)?;

    println!("Combined evaluation: {:+.3}", evaluation.combined_evaluation);
    println!(
        "  position: {:+.3} (weight {:.2})",
        evaluation.position_evaluation, evaluation.position_weight
    );
    println!(
        "  time:     {:+.3} (weight {:.2})",
        evaluation.time_advantage, evaluation.time_weight
    );
    println!("White win probability: {:.1}%", probability * 100.0);

    evaluator.shutdown()?;

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    match &args.log_file {
        Some(log_file) => WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?,
        None => SimpleLogger::init(LevelFilter::Info, Config::default())?,
    }

    Ok(args)
}
