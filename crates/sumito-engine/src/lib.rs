//! Evaluation and search for sumito.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::{EngineConfig, Weights};
pub use error::{ParseAlgorithmError, SearchError};
pub use eval::{Breakdown, Evaluator, evaluate, evaluate_breakdown};
pub use search::control::SearchControl;
pub use search::negamax::{DRAW_SCORE, INF, WIN_SCORE, WIN_THRESHOLD};
pub use search::{Algorithm, Diagnostics, Engine, SearchOutcome};
