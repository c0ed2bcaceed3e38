//! Mastery classification.

use crate::types::{MasteryLevel, SrsData};

/// Longest interval, in days, still considered part of the learning phase.
pub const LEARNING_MAX_INTERVAL: i64 = 6;
/// Longest interval, in days, before a card counts as mastered.
pub const REVIEWING_MAX_INTERVAL: i64 = 21;

/// Derive the mastery level of a card from its scheduling state.
pub fn classify(srs: Option<&SrsData>) -> MasteryLevel {
    let Some(data) = srs else {
        return MasteryLevel::New;
    };
    match data.repetition_count {
        0 => MasteryLevel::New,
        1 | 2 => MasteryLevel::Learning,
        _ if data.interval <= LEARNING_MAX_INTERVAL => MasteryLevel::Learning,
        _ if data.interval <= REVIEWING_MAX_INTERVAL => MasteryLevel::Reviewing,
        _ => MasteryLevel::Mastered,
    }
}
