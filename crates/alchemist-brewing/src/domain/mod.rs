//! Domain layer for the Brewing context.

pub mod commands;
pub mod composer;
pub mod recipe;
pub mod scoring;
pub mod selector;
