//! Due-set selection and priority ordering.

use crate::types::{Card, SrsData};
use chrono::{DateTime, Utc};
use std::borrow::Borrow;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Whether a card should be offered for review at `now`.
///
/// A card without scheduling state is always due.
pub fn is_due(srs: Option<&SrsData>, now: DateTime<Utc>) -> bool {
    match srs {
        Some(data) => now >= data.next_review_date,
        None => true,
    }
}

/// Whole days until the next review, rounded up. Negative means overdue.
pub fn days_until_review(srs: Option<&SrsData>, now: DateTime<Utc>) -> i64 {
    match srs {
        Some(data) => {
            let millis = (data.next_review_date - now).num_milliseconds() as f64;
            (millis / MILLIS_PER_DAY).ceil() as i64
        }
        None => 0,
    }
}

/// Reviewed cards that are due at `now`.
pub fn select_due(cards: &[Card], now: DateTime<Utc>) -> Vec<&Card> {
    cards
        .iter()
        .filter(|c| c.srs.is_some() && is_due(c.srs(), now))
        .collect()
}

/// Cards that have never been reviewed.
pub fn select_new(cards: &[Card]) -> Vec<&Card> {
    cards.iter().filter(|c| c.srs.is_none()).collect()
}

/// Order cards for study: due cards (most overdue first), then new cards,
/// then cards that are not yet due (soonest first). Ties keep their input
/// order.
pub fn sort_by_priority<C: Borrow<Card>>(cards: &mut [C], now: DateTime<Utc>) {
    cards.sort_by_key(|c| priority_key(<C as Borrow<Card>>::borrow(c), now));
}

fn priority_key(card: &Card, now: DateTime<Utc>) -> (u8, i64) {
    match card.srs() {
        Some(data) if is_due(Some(data), now) => (0, days_until_review(Some(data), now)),
        None => (1, 0),
        Some(data) => (2, days_until_review(Some(data), now)),
    }
}
