//! Engine configuration, read once when an [`Engine`](crate::Engine) is built.

use std::time::Duration;

/// Weights of the five evaluation terms.
///
/// Each term is a difference (perspective side minus opponent), so every
/// weight applies symmetrically to both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    /// Per piece still on the board.
    pub material: i32,
    /// Per ring of distance from the edge (4 at the centre, 0 on the edge).
    pub center: i32,
    /// Per adjacent pair of same-player pieces.
    pub cohesion: i32,
    /// Per opposing piece a push could displace right now.
    pub aggression: i32,
    /// Per edge piece with fewer than two friendly neighbours. Negative.
    pub danger: i32,
}

impl Weights {
    /// Weights with material and aggression scaled by `factor`.
    ///
    /// Used to force contact in long games where nobody has lost a piece.
    pub fn escalated(self, factor: i32) -> Weights {
        Weights {
            material: self.material.saturating_mul(factor),
            aggression: self.aggression.saturating_mul(factor),
            ..self
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            material: 10_000,
            center: 20,
            cohesion: 10,
            aggression: 500,
            danger: -100,
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Evaluator weights.
    pub weights: Weights,
    /// Extra plies of push-only search below the nominal depth.
    pub quiescence_depth: u8,
    /// Transposition table size in megabytes. 0 disables the table.
    pub tt_size_mb: usize,
    /// Budget used when the caller has no preference.
    pub time_budget: Duration,
    /// Deepest iteration the driver starts.
    pub max_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            quiescence_depth: 4,
            tt_size_mb: 16,
            time_budget: Duration::from_secs(3),
            max_depth: 32,
        }
    }
}
