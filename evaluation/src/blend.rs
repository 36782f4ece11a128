/// Blend weights for the position and time terms.
///
/// The weights are applied exactly as given: nothing enforces
/// `position + time == 1.0`. With weights summing past one the combined
/// evaluation can leave `[-1, 1]`; it is deliberately not clamped, since
/// clamping would hide the configuration mistake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub position: f64,
    pub time: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            position: 0.7,
            time: 0.3,
        }
    }
}

impl Weights {
    pub fn new(position: f64, time: f64) -> Self {
        Self { position, time }
    }

    /// Weighted sum of the two normalized terms.
    #[inline]
    pub fn combine(&self, position_score: f64, time_advantage: f64) -> f64 {
        self.position * position_score + self.time * time_advantage
    }

    /// Full breakdown for one evaluation, components included.
    pub fn evaluation(&self, position_score: f64, time_advantage: f64) -> Evaluation {
        Evaluation {
            position_evaluation: position_score,
            time_advantage,
            position_weight: self.position,
            time_weight: self.time,
            combined_evaluation: self.combine(position_score, time_advantage),
        }
    }
}

/// Read-only snapshot of a single evaluation. The combined score is the
/// headline number; the unblended components are kept for transparency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub position_evaluation: f64,
    pub time_advantage: f64,
    pub position_weight: f64,
    pub time_weight: f64,
    pub combined_evaluation: f64,
}
