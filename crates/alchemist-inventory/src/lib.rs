//! Alchemist: Inventory bounded context.
//!
//! Tracks how many units of each collected ingredient a player still holds
//! and when a stack was used up. Created potions reuse the same stock
//! lifecycle.

pub mod domain;
