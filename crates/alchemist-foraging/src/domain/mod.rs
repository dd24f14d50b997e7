//! Domain layer for the Foraging context.

pub mod attempt;
pub mod commands;
pub mod config;
pub mod dice;
pub mod gate;
pub mod resolver;
pub mod selector;
pub mod talents;
