use crate::blend::Weights;
use crate::time::sigmoid;

/// Sharpness of the logistic squash: how quickly the probability saturates
/// toward 0/1 as the blended signal grows.
pub const SHARPNESS: f64 = 3.0;

/// Estimate White's win probability from a normalized position score and time
/// advantage.
///
/// The position term is squashed through the odd sigmoid before blending, then
/// the blend goes through a logistic with `SHARPNESS`. The logistic is
/// strictly increasing, so a higher blended signal always means a higher
/// probability, and the result is strictly inside (0, 1).
pub fn win_probability(position_score: f64, time_advantage: f64, weights: &Weights) -> f64 {
    let blended = weights.position * sigmoid(position_score) + weights.time * time_advantage;
    1.0 / (1.0 + (-SHARPNESS * blended).exp())
}
