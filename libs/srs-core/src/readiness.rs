//! Preparedness score for a card set.

use crate::due::{days_until_review, is_due};
use crate::mastery::classify;
use crate::types::{Card, MasteryLevel};
use chrono::{DateTime, Utc};

/// Points deducted per day a reviewed card is overdue.
const OVERDUE_PENALTY_PER_DAY: u32 = 5;
/// Lowest score a card can fall to through overdue penalties.
const MIN_CARD_SCORE: u32 = 10;

fn base_score(level: MasteryLevel) -> u32 {
    match level {
        MasteryLevel::New => 10,
        MasteryLevel::Learning => 40,
        MasteryLevel::Reviewing => 70,
        MasteryLevel::Mastered => 100,
    }
}

/// Score of a single card at `now`, in [10, 100].
pub fn card_score(card: &Card, now: DateTime<Utc>) -> u32 {
    let level = classify(card.srs());
    let base = base_score(level);
    if level == MasteryLevel::New || !is_due(card.srs(), now) {
        return base;
    }
    let days_overdue = days_until_review(card.srs(), now).unsigned_abs();
    let penalty = u64::from(OVERDUE_PENALTY_PER_DAY).saturating_mul(days_overdue);
    u64::from(base)
        .saturating_sub(penalty)
        .max(u64::from(MIN_CARD_SCORE)) as u32
}

/// Mean card score rounded to the nearest integer; 0 for an empty set.
pub fn score(cards: &[Card], now: DateTime<Utc>) -> u8 {
    if cards.is_empty() {
        return 0;
    }
    let total: u64 = cards.iter().map(|c| u64::from(card_score(c, now))).sum();
    (total as f64 / cards.len() as f64).round() as u8
}
