//! Alchemist: Foraging bounded context.
//!
//! Responsible for rolling a foraging check, mapping the total onto a
//! rarity band, picking a concrete ingredient from the catalog, applying
//! foraging talents, and enforcing the daily attempt limit.

pub mod application;
pub mod domain;
