//! Alchemist Core: shared domain abstractions.
//!
//! This crate defines the ports every bounded context depends on: the
//! random source, the clock, the record repository used by the persistence
//! collaborator, the talent snapshot, and the shared error type. It
//! contains no infrastructure code beyond the seedable production RNG.

pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
pub mod rng;
pub mod talents;
