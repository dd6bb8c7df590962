pub mod engine;
pub mod summary;

pub use engine::{Decision, EngineConfig, EngineError, GameEngine};
pub use summary::{RoundSummary, SeatPlay, TrickRecord};
