//! Applying rating events to cards.

use crate::algorithm::SpacedRepetitionAlgorithm;
use crate::error::{Result, SrsError};
use crate::types::{Card, ReviewEvent};
use std::collections::HashMap;

/// Apply one rating event to the card it names, returning the updated card.
pub fn review_card(
    algorithm: &dyn SpacedRepetitionAlgorithm,
    card: &Card,
    event: &ReviewEvent,
) -> Result<Card> {
    if event.item_id != card.id {
        return Err(SrsError::Validation(format!(
            "review for {} cannot be applied to card {}",
            event.item_id, card.id
        )));
    }
    let srs = algorithm.schedule(card.srs(), event.rating, event.timestamp)?;
    Ok(Card {
        srs: Some(srs),
        ..card.clone()
    })
}

/// Apply a batch of events in order.
///
/// Card ids must be unique and every event must name a card in `cards`;
/// otherwise nothing is applied and the error is returned.
pub fn review_cards(
    algorithm: &dyn SpacedRepetitionAlgorithm,
    cards: &[Card],
    events: &[ReviewEvent],
) -> Result<Vec<Card>> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(cards.len());
    for (i, card) in cards.iter().enumerate() {
        if positions.insert(card.id.as_str(), i).is_some() {
            return Err(SrsError::Validation(format!("duplicate card id {}", card.id)));
        }
    }

    let mut updated = cards.to_vec();
    for event in events {
        let index = *positions.get(event.item_id.as_str()).ok_or_else(|| {
            SrsError::Validation(format!("review for unknown card {}", event.item_id))
        })?;
        updated[index] = review_card(algorithm, &updated[index], event)?;
    }
    Ok(updated)
}
