//! Consecutive-day study streaks.

use crate::calendar::study_day;
use crate::types::Card;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Run of study days ending today or yesterday, 0 otherwise.
    pub current: u32,
    pub longest: u32,
}

/// Timestamps of every review recorded on the given cards.
pub fn review_dates(cards: &[Card]) -> Vec<DateTime<Utc>> {
    cards
        .iter()
        .filter_map(|c| c.srs())
        .flat_map(|s| s.review_history.iter().map(|r| r.date))
        .collect()
}

/// Compute streaks over UTC calendar days.
pub fn compute_streak(review_dates: &[DateTime<Utc>], now: DateTime<Utc>) -> Streak {
    compute_streak_with_reset(review_dates, now, 0)
}

/// Compute streaks over study days starting at `daily_reset_hour`.
///
/// Reviews dated after `now` (clock skew between devices) count toward today.
pub fn compute_streak_with_reset(
    review_dates: &[DateTime<Utc>],
    now: DateTime<Utc>,
    daily_reset_hour: u32,
) -> Streak {
    let today = study_day(now, daily_reset_hour);
    let yesterday = today.pred_opt();

    let mut days: Vec<NaiveDate> = review_dates
        .iter()
        .map(|d| study_day(*d, daily_reset_hour).min(today))
        .collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let mut streak = Streak::default();
    let mut run_head: Option<NaiveDate> = None;
    let mut run_len = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for day in days {
        let continues = previous.and_then(|p| p.pred_opt()) == Some(day);
        if continues {
            run_len += 1;
        } else {
            run_head = Some(day);
            run_len = 1;
        }
        if run_head == Some(today) || run_head == yesterday {
            streak.current = run_len;
        }
        streak.longest = streak.longest.max(run_len);
        previous = Some(day);
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 15, 0, 0).unwrap()
    }

    fn days_ago(n: i64) -> DateTime<Utc> {
        now() - Duration::days(n)
    }

    #[test]
    fn empty_history() {
        assert_eq!(compute_streak(&[], now()), Streak::default());
    }

    #[test]
    fn three_consecutive_days() {
        let streak = compute_streak(&[days_ago(0), days_ago(1), days_ago(2)], now());
        assert_eq!(streak, Streak { current: 3, longest: 3 });
    }

    #[test]
    fn gap_breaks_streak() {
        let streak = compute_streak(&[days_ago(0), days_ago(3)], now());
        assert_eq!(streak, Streak { current: 1, longest: 1 });
    }

    #[test]
    fn anchored_at_yesterday() {
        let streak = compute_streak(&[days_ago(1), days_ago(2)], now());
        assert_eq!(streak, Streak { current: 2, longest: 2 });
    }

    #[test]
    fn stale_streak_is_not_current() {
        let streak = compute_streak(&[days_ago(2), days_ago(3), days_ago(4)], now());
        assert_eq!(streak, Streak { current: 0, longest: 3 });
    }

    #[test]
    fn duplicates_and_order_ignored() {
        let dates = [
            days_ago(5),
            days_ago(0),
            days_ago(0) - Duration::hours(3),
            days_ago(6),
            days_ago(1),
            days_ago(7),
            days_ago(4),
        ];
        assert_eq!(compute_streak(&dates, now()), Streak { current: 2, longest: 4 });
    }

    #[test]
    fn future_review_counts_as_today() {
        let dates = [now() + Duration::days(1), days_ago(0), days_ago(1)];
        assert_eq!(compute_streak(&dates, now()), Streak { current: 2, longest: 2 });

        let dates = [now() + Duration::days(1), days_ago(1)];
        assert_eq!(compute_streak(&dates, now()), Streak { current: 2, longest: 2 });
    }

    #[test]
    fn reset_hour_moves_day_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 2, 0, 0).unwrap();
        let dates = [
            Utc.with_ymd_and_hms(2024, 6, 10, 1, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 9, 20, 0, 0).unwrap(),
        ];
        assert_eq!(compute_streak(&dates, now), Streak { current: 2, longest: 2 });
        assert_eq!(
            compute_streak_with_reset(&dates, now, 4),
            Streak { current: 1, longest: 1 }
        );
    }
}
