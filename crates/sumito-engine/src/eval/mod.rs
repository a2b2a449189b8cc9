//! Static evaluation: a weighted sum of five positional terms.
//!
//! Every term is computed as perspective side minus opponent, so
//! `evaluate(b, p) == -evaluate(b, !p)` for every board. Negamax relies on
//! this.

pub mod aggression;
pub mod center;
pub mod material;
pub mod structure;

use std::fmt;

use sumito_core::{Board, Player};

use crate::config::Weights;

use self::aggression::aggression;
use self::center::center_control;
use self::material::material;
use self::structure::{cohesion, danger};

/// Weighted contribution of each term, and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub material: i32,
    pub center: i32,
    pub cohesion: i32,
    pub aggression: i32,
    pub danger: i32,
    pub total: i32,
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "material {} center {} cohesion {} aggression {} danger {} = {}",
            self.material, self.center, self.cohesion, self.aggression, self.danger, self.total
        )
    }
}

/// Position evaluator with fixed weights.
///
/// Cohesion, aggression, and danger are side differences rather than
/// one-sided counts: the opponent's exposed edge pieces count in the
/// perspective's favour, and aggression compares pushable pieces for both
/// sides whoever is on turn. This keeps the sum antisymmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluator {
    weights: Weights,
}

impl Evaluator {
    /// Create an evaluator using `weights`.
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Score `board` from `perspective`'s point of view. Higher is better.
    pub fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        self.breakdown(board, perspective).total
    }

    /// Score `board` term by term.
    pub fn breakdown(&self, board: &Board, perspective: Player) -> Breakdown {
        let w = &self.weights;
        let material = material(board, perspective).saturating_mul(w.material);
        let center = center_control(board, perspective).saturating_mul(w.center);
        let cohesion = cohesion(board, perspective).saturating_mul(w.cohesion);
        let aggression = aggression(board, perspective).saturating_mul(w.aggression);
        let danger = danger(board, perspective).saturating_mul(w.danger);
        Breakdown {
            material,
            center,
            cohesion,
            aggression,
            danger,
            total: material + center + cohesion + aggression + danger,
        }
    }
}

/// Evaluate with the default weights.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    Evaluator::default().evaluate(board, perspective)
}

/// Term breakdown with the default weights.
pub fn evaluate_breakdown(board: &Board, perspective: Player) -> Breakdown {
    Evaluator::default().breakdown(board, perspective)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [&str; 4] = [
        "wwwww/wwwwww/2www2/8/9/8/2bbb2/bbbbbb/bbbbb b 0 0 0",
        "5/6/7/8/2bbw4/8/7/6/5 w 0 0 0",
        "5/6/2w4/3bw3/2bbbw3/3ww3/7/6/5 b 1 3 22",
        "5/6/7/7b/7bb/8/7/6/w4 w 0 5 40",
    ];

    #[test]
    fn starting_position_is_even() {
        let board = Board::starting_position();
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn antisymmetric() {
        for layout in POSITIONS {
            let board: Board = layout.parse().unwrap();
            assert_eq!(
                evaluate(&board, Player::Black),
                -evaluate(&board, Player::White),
                "{layout}"
            );
        }
    }

    #[test]
    fn deterministic() {
        let board: Board = POSITIONS[2].parse().unwrap();
        let first = evaluate(&board, Player::Black);
        let second = evaluate(&board, Player::Black);
        assert_eq!(first, second);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let board: Board = POSITIONS[2].parse().unwrap();
        let b = evaluate_breakdown(&board, Player::White);
        assert_eq!(b.material + b.center + b.cohesion + b.aggression + b.danger, b.total);
        assert_eq!(b.total, evaluate(&board, Player::White));
    }

    #[test]
    fn material_dominates() {
        // One piece up with a worse shape still scores positive.
        let board: Board = "5/6/7/8/4b4/8/7/6/w3b w 0 0 0".parse().unwrap();
        assert!(evaluate(&board, Player::Black) > 5_000);
    }

    #[test]
    fn structural_terms_credit_the_opponent_side() {
        let w = Weights::default();

        // White is on turn, yet Black's push on E5 still counts.
        let contact: Board = "5/6/7/8/2bbw4/8/7/6/5 w 0 0 0".parse().unwrap();
        assert_eq!(evaluate_breakdown(&contact, Player::Black).aggression, w.aggression);

        // Only White has an exposed edge piece (A1), which helps Black.
        let exposed: Board = "5/6/7/8/4b4/8/7/6/w4 b 0 0 0".parse().unwrap();
        assert_eq!(evaluate_breakdown(&exposed, Player::Black).danger, -w.danger);
        assert_eq!(evaluate_breakdown(&exposed, Player::White).danger, w.danger);
    }

    #[test]
    fn custom_weights_apply() {
        let board: Board = POSITIONS[1].parse().unwrap();
        let weights = Weights {
            material: 0,
            center: 0,
            cohesion: 0,
            aggression: 1,
            danger: 0,
        };
        assert_eq!(Evaluator::new(weights).evaluate(&board, Player::Black), 1);
    }
}
