//! Alchemist: Brewing bounded context.
//!
//! Responsible for scoring three ingredients, choosing the winning
//! attribute, mapping the score onto a potion, and layering the brewing
//! talents (cauldron bonus, potion brewer) on top.

pub mod application;
pub mod domain;
