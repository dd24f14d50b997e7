//! Application layer for the Foraging context.

pub mod command_handlers;
pub mod query_handlers;
