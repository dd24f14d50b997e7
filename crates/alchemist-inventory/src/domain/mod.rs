//! Domain layer for the Inventory context.

pub mod pantry;
pub mod stock;
