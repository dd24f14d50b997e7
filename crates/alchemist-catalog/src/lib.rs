//! Alchemist: Catalog bounded context.
//!
//! Holds the immutable ingredient and potion entities and the read-only
//! port through which the foraging and brewing engines look them up.
//! Loading catalog files is the host's concern; this crate only indexes
//! data that has already been parsed.

pub mod domain;
