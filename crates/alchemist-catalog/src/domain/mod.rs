//! Domain layer for the Catalog context.

pub mod catalog;
pub mod ingredient;
pub mod potion;
