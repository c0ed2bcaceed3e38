//! Study session queue construction.

use crate::due::{is_due, sort_by_priority};
use crate::types::Card;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options for building a study queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyQueueOptions {
    pub max_new: usize,
    pub max_review: usize,
    /// Due cards emitted before each new card when interleaving.
    pub reviews_per_new: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl Default for StudyQueueOptions {
    fn default() -> Self {
        Self {
            max_new: 20,
            max_review: 200,
            reviews_per_new: 5,
            profile_id: None,
            application_id: None,
        }
    }
}

impl StudyQueueOptions {
    /// Whether a card falls inside the profile/application scope.
    pub fn matches_scope(&self, card: &Card) -> bool {
        let profile_ok = self
            .profile_id
            .as_ref()
            .map_or(true, |p| card.profile_id.as_ref() == Some(p));
        let application_ok = self
            .application_id
            .as_ref()
            .map_or(true, |a| card.application_id.as_ref() == Some(a));
        profile_ok && application_ok
    }
}

/// Ordered cards for one study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyQueue {
    pub cards: Vec<Card>,
    /// Due cards in scope before the review limit was applied.
    pub due_available: usize,
    /// New cards in scope before the new-card limit was applied.
    pub new_available: usize,
    pub new_remaining: usize,
    pub review_remaining: usize,
}

impl StudyQueue {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Build the session queue for `now`.
///
/// Due cards are ordered by priority, new cards are shuffled with `rng`, both
/// lists are capped by the option limits and then interleaved. Cards that are
/// reviewed but not yet due are left out.
pub fn build_queue<R: Rng + ?Sized>(
    cards: &[Card],
    options: &StudyQueueOptions,
    now: DateTime<Utc>,
    rng: &mut R,
) -> StudyQueue {
    let (mut due, mut new): (Vec<&Card>, Vec<&Card>) = cards
        .iter()
        .filter(|c| options.matches_scope(c))
        .filter(|c| is_due(c.srs(), now))
        .partition(|c| c.srs.is_some());

    let due_available = due.len();
    let new_available = new.len();

    sort_by_priority(&mut due, now);
    new.shuffle(rng);

    due.truncate(options.max_review);
    new.truncate(options.max_new);

    let review_taken = due.len();
    let new_taken = new.len();
    let cards = interleave(due, new, options.reviews_per_new.max(1));

    debug!(
        due_available,
        new_available,
        review_taken,
        new_taken,
        "built study queue"
    );

    StudyQueue {
        cards,
        due_available,
        new_available,
        new_remaining: options.max_new.saturating_sub(new_taken),
        review_remaining: options.max_review.saturating_sub(review_taken),
    }
}

/// Emit `burst` due cards, then one new card, until either list runs out;
/// the other list is then appended as is.
fn interleave(due: Vec<&Card>, new: Vec<&Card>, burst: usize) -> Vec<Card> {
    let mut out = Vec::with_capacity(due.len() + new.len());
    let mut due = due.into_iter();
    let mut new = new.into_iter();

    loop {
        let before = out.len();
        out.extend(due.by_ref().take(burst).cloned());
        if out.len() == before {
            out.extend(new.cloned());
            break;
        }
        match new.next() {
            Some(card) => out.push(card.clone()),
            None => {
                out.extend(due.cloned());
                break;
            }
        }
    }
    out
}
