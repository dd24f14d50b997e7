//! Shared test mocks and utilities for the Alchemist engine.

mod catalog;
mod clock;
mod repository;
mod rng;

pub use catalog::{sample_catalog, sample_ingredient};
pub use clock::FixedClock;
pub use repository::{
    ContendedRecordRepository, EmptyRecordRepository, FailingRecordRepository,
    RecordingRecordRepository, UnsavedCollectionRecordRepository,
};
pub use rng::{MockRng, SequenceRng};
