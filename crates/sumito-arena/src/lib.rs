//! Headless engine-vs-engine matches and series.

pub mod arena;
pub mod config;
pub mod error;

pub use arena::{Arena, EndReason, MatchRecord, SeriesSummary};
pub use config::{MatchConfig, MatchRules, SideConfig, arena_weights};
pub use error::ArenaError;
