//! Aggregate statistics over a card collection.

use crate::due::{days_until_review, is_due};
use crate::mastery::classify;
use crate::types::{Card, MasteryLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Card counts per mastery level plus due/overdue totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total: usize,
    pub new: usize,
    pub learning: usize,
    pub reviewing: usize,
    pub mastered: usize,
    /// Every card that is due at `now`, never-reviewed cards included.
    pub due_today: usize,
    /// Reviewed cards whose next review date is at least a day past.
    pub overdue: usize,
}

/// Count cards by mastery level and due status.
pub fn aggregate(cards: &[Card], now: DateTime<Utc>) -> DeckStats {
    let mut stats = DeckStats::default();

    for card in cards {
        stats.total += 1;
        match classify(card.srs()) {
            MasteryLevel::New => stats.new += 1,
            MasteryLevel::Learning => stats.learning += 1,
            MasteryLevel::Reviewing => stats.reviewing += 1,
            MasteryLevel::Mastered => stats.mastered += 1,
        }
        if is_due(card.srs(), now) {
            stats.due_today += 1;
        }
        if card.srs.is_some() && days_until_review(card.srs(), now) < 0 {
            stats.overdue += 1;
        }
    }

    stats
}

/// Review log totals across a card collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub total_reviews: usize,
    pub passed_reviews: usize,
    /// Share of reviews with a passing rating, 0.0 when nothing was reviewed.
    pub retention_rate: f64,
}

/// Summarize every review recorded on the given cards.
pub fn review_summary(cards: &[Card]) -> ReviewSummary {
    let (total_reviews, passed_reviews) = cards
        .iter()
        .filter_map(|c| c.srs())
        .flat_map(|s| s.review_history.iter())
        .fold((0usize, 0usize), |(total, passed), record| {
            (total + 1, passed + usize::from(record.rating.is_passing()))
        });

    let retention_rate = if total_reviews == 0 {
        0.0
    } else {
        passed_reviews as f64 / total_reviews as f64
    };

    ReviewSummary {
        total_reviews,
        passed_reviews,
        retention_rate,
    }
}
