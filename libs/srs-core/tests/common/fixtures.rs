//! Card fixtures.

use chrono::Duration;
use srs_core::{Card, Rating, SrsData};

use super::now;

pub fn rating(value: i64) -> Rating {
    Rating::new(value).unwrap()
}

/// Reviewed card with the given counters, due `next_in` from now.
pub fn reviewed_card(id: &str, repetition_count: u32, interval: i64, next_in: Duration) -> Card {
    let data = SrsData {
        repetition_count,
        interval,
        next_review_date: now() + next_in,
        last_review_date: Some(now() - Duration::days(interval)),
        ..SrsData::new(now())
    };
    Card::new(id).with_srs(data)
}

/// `due` overdue reviewed cards followed by `new` never-reviewed cards.
pub fn mixed_deck(due: usize, new: usize) -> Vec<Card> {
    let mut cards: Vec<Card> = (0..due)
        .map(|i| reviewed_card(&format!("due-{i}"), 2, 6, Duration::days(-(i as i64) - 1)))
        .collect();
    cards.extend((0..new).map(|i| Card::new(format!("new-{i}"))));
    cards
}
