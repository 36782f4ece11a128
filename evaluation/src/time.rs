/// Odd sigmoid mapping ℝ onto (-1, 1): `2 / (1 + e^-x) - 1`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    2.0 / (1.0 + (-x).exp()) - 1.0
}

/// Strategy for turning two remaining clock times into a bounded advantage
/// for White.
///
/// All variants return positive values when the clock situation favors White.
/// `threshold` is interpreted per variant: a cutoff for `HardThreshold`, a
/// scale for `Sigmoid`, and ignored by `InversePressure`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeStrategy {
    /// Zero inside the `|Δt| < threshold` dead zone, then linear in Δt with
    /// saturation at `±2·threshold`. Superseded by `Sigmoid`; kept for
    /// backward-compatible behavior.
    HardThreshold,
    /// Smooth `sigmoid(Δt / threshold)`: no dead zone, no discontinuity,
    /// strictly inside (-1, 1).
    #[default]
    Sigmoid,
    /// Urgency model `1/(black+1) - 1/(white+1)`: a player with seconds left
    /// is under disproportionate pressure, regardless of the threshold.
    InversePressure,
}

impl TimeStrategy {
    pub fn advantage(self, white_time: f64, black_time: f64, threshold: f64) -> f64 {
        let diff = white_time - black_time;

        match self {
            TimeStrategy::HardThreshold => {
                if diff.abs() < threshold {
                    return 0.0;
                }
                (diff / (threshold * 2.0)).clamp(-1.0, 1.0)
            }
            TimeStrategy::Sigmoid => sigmoid(diff / threshold),
            TimeStrategy::InversePressure => 1.0 / (black_time + 1.0) - 1.0 / (white_time + 1.0),
        }
    }
}
