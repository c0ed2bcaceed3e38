//! Study-day handling and review activity per day.

use crate::types::Card;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Study day a timestamp counts toward.
///
/// A study day starts at `daily_reset_hour` (0-23, UTC). Reviews done before
/// the reset hour belong to the previous day, so late-night sessions keep
/// counting toward the day they started on.
pub fn study_day(at: DateTime<Utc>, daily_reset_hour: u32) -> NaiveDate {
    let shift = i64::from(daily_reset_hour.min(23));
    (at - Duration::hours(shift)).date_naive()
}

/// Number of reviews done on one study day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub reviews: usize,
}

/// Review counts for the last `days` study days up to and including the one
/// containing `now`, oldest first.
pub fn review_calendar(
    cards: &[Card],
    now: DateTime<Utc>,
    days: usize,
    daily_reset_hour: u32,
) -> Vec<CalendarDay> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for record in cards
        .iter()
        .filter_map(|c| c.srs())
        .flat_map(|s| s.review_history.iter())
    {
        *counts.entry(study_day(record.date, daily_reset_hour)).or_default() += 1;
    }

    let today = study_day(now, daily_reset_hour);
    let mut data: Vec<CalendarDay> = (0..days)
        .map(|i| {
            let date = today - Duration::days(i as i64);
            CalendarDay {
                date,
                reviews: counts.get(&date).copied().unwrap_or(0),
            }
        })
        .collect();

    // Reverse so oldest is first
    data.reverse();
    data
}
