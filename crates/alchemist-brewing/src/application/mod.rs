//! Application layer for the Brewing context.

pub mod command_handlers;
