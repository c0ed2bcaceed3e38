//! Spaced repetition algorithm implementations.

pub mod sm2;

use crate::error::Result;
use crate::types::{Rating, SrsData};
use chrono::{DateTime, Utc};

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the state that follows one review.
    ///
    /// `state` is `None` for a card that has never been reviewed. The input is
    /// never modified; a fresh value is returned.
    fn schedule(&self, state: Option<&SrsData>, rating: Rating, now: DateTime<Utc>)
        -> Result<SrsData>;

    /// Initial state for a new card.
    fn initial_state(&self, now: DateTime<Utc>) -> SrsData;
}

/// Get algorithm by name.
pub fn get_algorithm(name: &str) -> Option<Box<dyn SpacedRepetitionAlgorithm>> {
    match name {
        "sm2" => Some(Box::new(sm2::Sm2::default())),
        _ => None,
    }
}
