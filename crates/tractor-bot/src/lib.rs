#![deny(warnings)]
pub mod helpers;
pub mod strategy;

pub use strategy::{BasicAgent, GreedyAgent};
