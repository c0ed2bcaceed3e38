//! Spaced repetition scheduling engine.
//!
//! Provides:
//! - SM-2 review transitions (easiness, interval, review log)
//! - Mastery classification and due-set selection
//! - Interleaved study queues with an injected random source
//! - Deck statistics, readiness score, review calendar and streaks
//!
//! Every operation is pure: callers pass "now" explicitly and receive new
//! values, inputs are never modified.

pub mod algorithm;
pub mod calendar;
pub mod due;
pub mod error;
pub mod mastery;
pub mod queue;
pub mod readiness;
pub mod review;
pub mod stats;
pub mod streak;
pub mod types;

pub use algorithm::sm2::{apply_review, compute_easiness, compute_interval, Sm2};
pub use algorithm::{get_algorithm, SpacedRepetitionAlgorithm};
pub use calendar::{review_calendar, study_day, CalendarDay};
pub use due::{days_until_review, is_due, select_due, select_new, sort_by_priority};
pub use error::{Result, SrsError};
pub use mastery::classify;
pub use queue::{build_queue, StudyQueue, StudyQueueOptions};
pub use readiness::{card_score, score};
pub use review::{review_card, review_cards};
pub use stats::{aggregate, review_summary, DeckStats, ReviewSummary};
pub use streak::{compute_streak, compute_streak_with_reset, review_dates, Streak};
pub use types::{Card, MasteryLevel, Rating, ReviewEvent, ReviewRecord, SrsData};
