#![deny(warnings)]
pub mod agent;
pub mod game;
pub mod model;
pub mod rules;
