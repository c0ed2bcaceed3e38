//! Core types for the scheduling engine.

use crate::error::{Result, SrsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Easiness factor assigned to a card before its first review.
pub const DEFAULT_EASINESS: f64 = 2.5;

/// Lowest easiness factor any card may carry.
pub const MIN_EASINESS: f64 = 1.3;

/// Quality of recall for a single review, 0 (blackout) to 5 (perfect).
///
/// Only the validating constructors produce a `Rating`, so every value that
/// reaches the scheduler is already known to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;
    /// Ratings at or above this value count as a successful recall.
    pub const PASSING: u8 = 3;

    /// Create from an integer value in [0, 5].
    pub fn new(value: i64) -> Result<Self> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SrsError::rating_out_of_range(value))
        }
    }

    /// Create from a float that must hold an integral value in [0, 5].
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(SrsError::rating_out_of_range(value));
        }
        Self::new(value as i64)
    }

    /// Map a right/wrong answer onto the 0-5 scale.
    /// Wrong -> 1, Correct -> 4
    pub fn from_2point(correct: bool) -> Self {
        if correct {
            Self(4)
        } else {
            Self(1)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_passing(self) -> bool {
        self.0 >= Self::PASSING
    }
}

impl TryFrom<i64> for Rating {
    type Error = SrsError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<u8> for Rating {
    type Error = SrsError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(i64::from(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// One entry of a card's review log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub date: DateTime<Utc>,
    pub rating: Rating,
    /// Interval that was in effect when the review happened.
    pub interval_at_review: i64,
}

/// Per-card scheduling state, in the shape the storage layer persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsData {
    pub easiness_factor: f64,
    pub repetition_count: u32,
    pub interval: i64,
    pub next_review_date: DateTime<Utc>,
    pub last_review_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_history: Vec<ReviewRecord>,
}

impl SrsData {
    /// State of a card that has never been reviewed, due at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_easiness(DEFAULT_EASINESS, now)
    }

    pub(crate) fn with_easiness(easiness_factor: f64, now: DateTime<Utc>) -> Self {
        Self {
            easiness_factor,
            repetition_count: 0,
            interval: 0,
            next_review_date: now,
            last_review_date: None,
            review_history: Vec::new(),
        }
    }

    /// Reject state that could not have been produced by the scheduler.
    pub fn validate(&self) -> Result<()> {
        self.validate_with_floor(MIN_EASINESS)
    }

    pub(crate) fn validate_with_floor(&self, minimum_ease: f64) -> Result<()> {
        if !self.easiness_factor.is_finite() || self.easiness_factor < minimum_ease {
            return Err(SrsError::InvalidState(format!(
                "easiness factor {} is below the floor of {minimum_ease}",
                self.easiness_factor
            )));
        }
        if self.interval < 0 {
            return Err(SrsError::InvalidState(format!(
                "interval {} is negative",
                self.interval
            )));
        }
        Ok(())
    }
}

/// Coarse mastery label. Always derived from `SrsData`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl MasteryLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Learning => "learning",
            Self::Reviewing => "reviewing",
            Self::Mastered => "mastered",
        }
    }
}

/// A piece of study material as seen by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    /// `None` until the card is reviewed for the first time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srs: Option<SrsData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl Card {
    /// Create a new, never reviewed card.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            srs: None,
            profile_id: None,
            application_id: None,
        }
    }

    pub fn with_srs(mut self, srs: SrsData) -> Self {
        self.srs = Some(srs);
        self
    }

    pub fn with_profile(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }

    pub fn with_application(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    pub fn srs(&self) -> Option<&SrsData> {
        self.srs.as_ref()
    }
}

/// A rating submitted for a card at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEvent {
    pub item_id: String,
    pub rating: Rating,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_ok());
        assert!(Rating::new(5).is_ok());
        assert!(matches!(Rating::new(-1), Err(SrsError::Validation(_))));
        assert!(matches!(Rating::new(6), Err(SrsError::Validation(_))));
        assert!(Rating::try_from(9u8).is_err());
    }

    #[test]
    fn test_rating_rejects_fractional() {
        assert_eq!(Rating::from_f64(3.0).map(Rating::value), Ok(3));
        assert!(matches!(Rating::from_f64(3.5), Err(SrsError::Validation(_))));
        assert!(Rating::from_f64(f64::NAN).is_err());
        assert!(Rating::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rating_passing() {
        assert!(!Rating::new(2).unwrap().is_passing());
        assert!(Rating::new(3).unwrap().is_passing());
        assert!(Rating::from_2point(true).is_passing());
        assert!(!Rating::from_2point(false).is_passing());
    }

    #[test]
    fn test_validate_rejects_low_easiness() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut data = SrsData::new(now);
        data.easiness_factor = 1.2;
        assert!(matches!(data.validate(), Err(SrsError::InvalidState(_))));
    }

    #[test]
    fn test_validate_rejects_negative_interval() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut data = SrsData::new(now);
        data.interval = -3;
        assert!(matches!(data.validate(), Err(SrsError::InvalidState(_))));
    }

    #[test]
    fn test_card_builders() {
        let card = Card::new("q-1").with_profile("alice").with_application("acme");
        assert_eq!(card.id, "q-1");
        assert!(card.srs().is_none());
        assert_eq!(card.profile_id.as_deref(), Some("alice"));
        assert_eq!(card.application_id.as_deref(), Some("acme"));
    }
}
