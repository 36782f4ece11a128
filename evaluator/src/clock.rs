use cozy_chess::Board;
use engine::EngineProcess;
use evaluation::{normalize, to_white_perspective, win_probability, Evaluation, ScoreSource};
use log::debug;

use crate::config::EvaluatorConfig;
use crate::error::EvalError;

/// Blends an engine's judgment of a position with the clock situation into a
/// single signed score for White.
///
/// The evaluator is stateless across calls apart from its fixed configuration
/// and the engine session it holds. Each `evaluate` makes exactly one score
/// request against the session; there is no retry and no partial result.
pub struct ClockAwareEvaluator {
    config: EvaluatorConfig,
    source: Box<dyn ScoreSource>,
}

impl ClockAwareEvaluator {
    /// Validate `config` and open a UCI session against its engine.
    ///
    /// A missing executable fails here with `EvalError::Configuration`; no
    /// process is spawned in that case.
    pub fn open(config: EvaluatorConfig) -> Result<Self, EvalError> {
        config.validate()?;

        let process = EngineProcess::spawn(&config.engine_path)
            .map_err(|e| EvalError::Engine(Box::new(e)))?;

        debug!("Opened engine session: {}", process.name());
        Ok(Self {
            config,
            source: Box::new(process),
        })
    }

    /// Build on top of an already-open score source instead of spawning a
    /// process. The engine path is not checked; the numeric parameters are.
    pub fn with_source(
        config: EvaluatorConfig,
        source: Box<dyn ScoreSource>,
    ) -> Result<Self, EvalError> {
        config.validate_parameters()?;
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate `board` under the given clocks (seconds remaining per side).
    ///
    /// Positive favors White. Returns the full breakdown; the combined score
    /// is `position_weight · position + time_weight · time`, unclamped.
    pub fn evaluate(
        &mut self,
        board: &Board,
        white_time: f64,
        black_time: f64,
    ) -> Result<Evaluation, EvalError> {
        check_times(white_time, black_time)?;

        let position = self.position_score(board)?;
        let time = self.config.time_strategy.advantage(
            white_time,
            black_time,
            self.config.time_threshold,
        );

        let evaluation = self.config.weights().evaluation(position, time);
        debug!(
            "{}: position {:+.3}, time {:+.3}, combined {:+.3}",
            self.source.name(),
            evaluation.position_evaluation,
            evaluation.time_advantage,
            evaluation.combined_evaluation,
        );

        Ok(evaluation)
    }

    /// Estimate White's win probability for `board` under the given clocks.
    /// Strictly inside (0, 1), and strictly increasing in the blended
    /// advantage.
    pub fn win_probability(
        &mut self,
        board: &Board,
        white_time: f64,
        black_time: f64,
    ) -> Result<f64, EvalError> {
        check_times(white_time, black_time)?;

        let position = self.position_score(board)?;
        let time = self.config.time_strategy.advantage(
            white_time,
            black_time,
            self.config.time_threshold,
        );

        Ok(win_probability(position, time, &self.config.weights()))
    }

    /// Explicitly release the engine session. Dropping the evaluator tears
    /// the session down as well; this surfaces teardown failures instead.
    pub fn shutdown(mut self) -> Result<(), EvalError> {
        self.source.close().map_err(EvalError::Engine)
    }

    fn position_score(&mut self, board: &Board) -> Result<f64, EvalError> {
        let fen = format!("{}", board);
        let raw = self
            .source
            .raw_score(&fen, self.config.search_depth)
            .map_err(EvalError::Engine)?
            .ok_or(EvalError::MissingScore)?;

        // Engines score from the side to move; the bar reports for White.
        Ok(to_white_perspective(board, normalize(raw)))
    }
}

fn check_times(white_time: f64, black_time: f64) -> Result<(), EvalError> {
    if white_time < 0.0 || black_time < 0.0 {
        return Err(EvalError::invalid_input(format!(
            "remaining times must be non-negative, got {} / {}",
            white_time, black_time
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::{RawScore, SourceError, TimeStrategy};
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Deterministic score source; counts how often the engine is consulted.
    struct StubSource {
        score: Option<RawScore>,
        calls: Arc<AtomicUsize>,
    }

    impl StubSource {
        fn new(score: Option<RawScore>) -> (Box<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let stub = Box::new(Self {
                score,
                calls: calls.clone(),
            });
            (stub, calls)
        }
    }

    impl ScoreSource for StubSource {
        fn name(&self) -> String {
            "stub".to_string()
        }

        fn raw_score(&mut self, _fen: &str, _depth: u8) -> Result<Option<RawScore>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.score)
        }
    }

    fn evaluator_with(score: Option<RawScore>) -> (ClockAwareEvaluator, Arc<AtomicUsize>) {
        let (stub, calls) = StubSource::new(score);
        let config = EvaluatorConfig::new("/unused/engine");
        let evaluator = ClockAwareEvaluator::with_source(config, stub).unwrap();
        (evaluator, calls)
    }

    #[test]
    fn test_equal_times_reduce_to_the_position_term() {
        let (mut evaluator, _) = evaluator_with(Some(RawScore::Centipawns(137)));
        let board = Board::default();

        let evaluation = evaluator.evaluate(&board, 300.0, 300.0).unwrap();
        assert_eq!(evaluation.time_advantage, 0.0);
        assert_eq!(
            evaluation.combined_evaluation,
            evaluation.position_weight * evaluation.position_evaluation
        );
    }

    #[test]
    fn test_half_pawn_up_with_equal_clocks() {
        // +500cp, weights 0.7/0.3: position 0.5, combined 0.35.
        let (mut evaluator, _) = evaluator_with(Some(RawScore::Centipawns(500)));
        let board = Board::default();

        let evaluation = evaluator.evaluate(&board, 300.0, 300.0).unwrap();
        assert_eq!(evaluation.position_evaluation, 0.5);
        assert_eq!(evaluation.time_advantage, 0.0);
        assert!((evaluation.combined_evaluation - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_balanced_position_with_big_clock_edge() {
        // Raw 0, 300s vs 60s at threshold 60: time term sigmoid(4) ≈ 0.964,
        // combined ≈ 0.3 · 0.964 ≈ 0.289.
        let (mut evaluator, _) = evaluator_with(Some(RawScore::Centipawns(0)));
        let board = Board::default();

        let evaluation = evaluator.evaluate(&board, 300.0, 60.0).unwrap();
        assert_eq!(evaluation.position_evaluation, 0.0);
        assert!((evaluation.time_advantage - 0.9640275800758169).abs() < 1e-12);
        assert!((evaluation.combined_evaluation - 0.2892082740227451).abs() < 1e-12);
    }

    #[test]
    fn test_relative_score_is_flipped_for_black_to_move() {
        let (mut evaluator, _) = evaluator_with(Some(RawScore::Centipawns(500)));
        let board =
            Board::from_str("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();

        // +500 for the side to move is -0.5 for White here.
        let evaluation = evaluator.evaluate(&board, 300.0, 300.0).unwrap();
        assert_eq!(evaluation.position_evaluation, -0.5);
    }

    #[test]
    fn test_mate_for_the_mover_saturates_the_position_term() {
        let (mut evaluator, _) = evaluator_with(Some(RawScore::Mate(2)));
        let board = Board::default();

        let evaluation = evaluator.evaluate(&board, 300.0, 300.0).unwrap();
        assert_eq!(evaluation.position_evaluation, 1.0);
    }

    #[test]
    fn test_missing_score_is_an_error_not_zero() {
        let (mut evaluator, _) = evaluator_with(None);
        let board = Board::default();

        assert!(matches!(
            evaluator.evaluate(&board, 300.0, 300.0),
            Err(EvalError::MissingScore)
        ));
    }

    #[test]
    fn test_negative_time_fails_before_the_engine_is_consulted() {
        let (mut evaluator, calls) = evaluator_with(Some(RawScore::Centipawns(0)));
        let board = Board::default();

        assert!(matches!(
            evaluator.evaluate(&board, -1.0, 300.0),
            Err(EvalError::InvalidInput { .. })
        ));
        assert!(matches!(
            evaluator.win_probability(&board, 300.0, -0.5),
            Err(EvalError::InvalidInput { .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_zero_threshold_never_reaches_the_engine() {
        let (stub, calls) = StubSource::new(Some(RawScore::Centipawns(0)));
        let config = EvaluatorConfig::new("/unused/engine").with_threshold(0.0);

        assert!(matches!(
            ClockAwareEvaluator::with_source(config, stub),
            Err(EvalError::InvalidInput { .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let (mut evaluator, calls) = evaluator_with(Some(RawScore::Centipawns(42)));
        let board = Board::default();

        let first = evaluator.evaluate(&board, 120.0, 90.0).unwrap();
        let second = evaluator.evaluate(&board, 120.0, 90.0).unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_win_probability_bounds_and_ordering() {
        let board = Board::default();

        let (mut behind, _) = evaluator_with(Some(RawScore::Centipawns(-800)));
        let (mut ahead, _) = evaluator_with(Some(RawScore::Centipawns(800)));

        let low = behind.win_probability(&board, 300.0, 300.0).unwrap();
        let high = ahead.win_probability(&board, 300.0, 300.0).unwrap();

        assert!(low > 0.0 && low < 1.0);
        assert!(high > 0.0 && high < 1.0);
        assert!(high > low);
    }

    #[test]
    fn test_inverse_pressure_strategy_is_selectable() {
        let (stub, _) = StubSource::new(Some(RawScore::Centipawns(0)));
        let config =
            EvaluatorConfig::new("/unused/engine").with_strategy(TimeStrategy::InversePressure);
        let mut evaluator = ClockAwareEvaluator::with_source(config, stub).unwrap();

        let evaluation = evaluator.evaluate(&Board::default(), 300.0, 5.0).unwrap();
        assert!((evaluation.time_advantage - (1.0 / 6.0 - 1.0 / 301.0)).abs() < 1e-12);
    }

    #[test]
    fn test_open_with_missing_engine_never_spawns() {
        let config = EvaluatorConfig::new("/nonexistent/path/to/stockfish");
        assert!(matches!(
            ClockAwareEvaluator::open(config),
            Err(EvalError::Configuration { .. })
        ));
    }
}
