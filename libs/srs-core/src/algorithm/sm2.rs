//! SM-2 spaced repetition algorithm.
//!
//! Based on SuperMemo 2 with configurable parameters. A review moves a card
//! through `(repetition_count, interval)`:
//! - ratings below 3 reset the repetition count and schedule the card for
//!   the next day
//! - the first two passing reviews use fixed intervals (1 day, then 6 days)
//! - later passing reviews multiply the previous interval by the easiness
//!   factor, rounding half away from zero
//!
//! The easiness factor is updated on every review and never drops below 1.3.

use super::SpacedRepetitionAlgorithm;
use crate::error::{Result, SrsError};
use crate::types::{Rating, ReviewRecord, SrsData, DEFAULT_EASINESS, MIN_EASINESS};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// SM-2 algorithm with configurable parameters.
///
/// `minimum_ease` can only raise the easiness floor above 1.3, and negative
/// fixed intervals are treated as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub first_interval: i64,
    pub second_interval: i64,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: DEFAULT_EASINESS,
            minimum_ease: MIN_EASINESS,
            first_interval: 1,
            second_interval: 6,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self, now: DateTime<Utc>) -> SrsData {
        SrsData::with_easiness(self.initial_ease.max(self.ease_floor()), now)
    }

    fn schedule(
        &self,
        state: Option<&SrsData>,
        rating: Rating,
        now: DateTime<Utc>,
    ) -> Result<SrsData> {
        let initial;
        let old = match state {
            Some(s) => s,
            None => {
                initial = self.initial_state(now);
                &initial
            }
        };
        if let Err(err) = old.validate_with_floor(self.ease_floor()) {
            warn!(error = %err, "rejected review on invalid state");
            return Err(err);
        }

        let easiness_factor = self.easiness(old.easiness_factor, rating);
        let repetition_count = if rating.is_passing() {
            old.repetition_count.checked_add(1).ok_or_else(|| {
                SrsError::InvalidState(format!(
                    "repetition count {} cannot be incremented",
                    old.repetition_count
                ))
            })?
        } else {
            0
        };
        let interval = self.interval(old.interval, old.repetition_count, easiness_factor, rating);

        let next_review_date = Duration::try_days(interval)
            .and_then(|d| now.checked_add_signed(d))
            .ok_or_else(|| {
                SrsError::InvalidState(format!("interval of {interval} days overflows the calendar"))
            })?;

        let mut review_history = Vec::with_capacity(old.review_history.len() + 1);
        review_history.extend_from_slice(&old.review_history);
        review_history.push(ReviewRecord {
            date: now,
            rating,
            interval_at_review: old.interval,
        });

        debug!(
            rating = rating.value(),
            easiness_factor,
            repetition_count,
            interval,
            "scheduled review"
        );

        Ok(SrsData {
            easiness_factor,
            repetition_count,
            interval,
            next_review_date,
            last_review_date: Some(now),
            review_history,
        })
    }
}

impl Sm2 {
    fn ease_floor(&self) -> f64 {
        self.minimum_ease.max(MIN_EASINESS)
    }

    /// Easiness factor after a review with the given rating.
    pub fn easiness(&self, easiness_factor: f64, rating: Rating) -> f64 {
        let q = f64::from(Rating::MAX - rating.value());
        let updated = easiness_factor + (0.1 - q * (0.08 + q * 0.02));
        updated.max(self.ease_floor())
    }

    /// Interval in days for the review following this one.
    ///
    /// `repetitions_before` is the repetition count as it was before this
    /// review was applied.
    pub fn interval(
        &self,
        current_interval: i64,
        repetitions_before: u32,
        new_easiness: f64,
        rating: Rating,
    ) -> i64 {
        let first = self.first_interval.max(0);
        if !rating.is_passing() {
            return first;
        }
        match repetitions_before {
            0 => first,
            1 => self.second_interval.max(0),
            // f64::round rounds half away from zero
            _ => (current_interval as f64 * new_easiness).round() as i64,
        }
    }
}

/// Update an easiness factor with the default SM-2 parameters.
pub fn compute_easiness(easiness_factor: f64, rating: Rating) -> f64 {
    Sm2::default().easiness(easiness_factor, rating)
}

/// Compute the next interval with the default SM-2 parameters.
pub fn compute_interval(
    current_interval: i64,
    repetitions_before: u32,
    new_easiness: f64,
    rating: Rating,
) -> i64 {
    Sm2::default().interval(current_interval, repetitions_before, new_easiness, rating)
}

/// Apply one review with the default SM-2 parameters.
pub fn apply_review(state: Option<&SrsData>, rating: Rating, now: DateTime<Utc>) -> Result<SrsData> {
    Sm2::default().schedule(state, rating, now)
}
