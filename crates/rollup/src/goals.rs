use api_types::goal::Goal;
use chrono::NaiveDate;

use crate::Amount;

/// Progress and pace for one savings goal, relative to `today`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalProgress {
    pub current: Amount,
    pub target: Amount,
    pub remaining: Amount,
    /// True percentage (`100 · current/target`), unclamped; 0 when the
    /// target is zero.
    pub percent: f64,
    /// Signed day count; negative once the target date has passed.
    pub days_remaining: i64,
    /// Saving pace needed to land on time, per 30-day month. `None` once
    /// the target date is today or past.
    pub monthly_needed: Option<Amount>,
}

impl GoalProgress {
    /// Fill ratio for progress bars, clamped to `[0, 1]`. The text next to
    /// the bar shows the true `percent`.
    #[must_use]
    pub fn fill_ratio(self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }
}

#[must_use]
pub fn goal_progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
    let current = Amount::parse_or_zero(&goal.current_amount);
    let target = Amount::parse_or_zero(&goal.target_amount);
    let remaining = target - current;

    let percent = if target.cents() > 0 {
        current.cents() as f64 / target.cents() as f64 * 100.0
    } else {
        0.0
    };

    let days_remaining = goal
        .target_date
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|target_date| (target_date - today).num_days())
        .unwrap_or(0);

    let monthly_needed = if days_remaining > 0 {
        let cents = (remaining.cents() as f64 * 30.0 / days_remaining as f64).round() as i64;
        Some(Amount::from_cents(cents))
    } else {
        None
    };

    GoalProgress {
        current,
        target,
        remaining,
        percent,
        days_remaining,
        monthly_needed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(current: &str, target: &str, target_date: &str) -> Goal {
        Goal {
            id: "goal-1".to_string(),
            household_id: "household-1".to_string(),
            name: "Emergency fund".to_string(),
            target_amount: target.to_string(),
            current_amount: current.to_string(),
            target_date: target_date.to_string(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn thirty_days_out_scenario() {
        let progress = goal_progress(&goal("250", "1000", "2024-07-01"), date("2024-06-01"));
        assert!((progress.percent - 25.0).abs() < f64::EPSILON);
        assert_eq!(progress.days_remaining, 30);
        assert_eq!(progress.remaining, Amount::from_cents(75_000));
        assert_eq!(progress.monthly_needed, Some(Amount::from_cents(75_000)));
    }

    #[test]
    fn overfunded_goal_reports_true_percent_but_clamps_bar() {
        let progress = goal_progress(&goal("1500", "1000", "2024-07-01"), date("2024-06-01"));
        assert!((progress.percent - 150.0).abs() < f64::EPSILON);
        assert!((progress.fill_ratio() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_pace_once_due_or_overdue() {
        let due_today = goal_progress(&goal("250", "1000", "2024-06-01"), date("2024-06-01"));
        assert_eq!(due_today.days_remaining, 0);
        assert_eq!(due_today.monthly_needed, None);

        let overdue = goal_progress(&goal("250", "1000", "2024-05-01"), date("2024-06-01"));
        assert_eq!(overdue.days_remaining, -31);
        assert_eq!(overdue.monthly_needed, None);
    }

    #[test]
    fn pace_scales_with_days_remaining() {
        // 15 days left: twice the monthly pace is needed.
        let progress = goal_progress(&goal("250", "1000", "2024-06-16"), date("2024-06-01"));
        assert_eq!(progress.monthly_needed, Some(Amount::from_cents(150_000)));
    }

    #[test]
    fn zero_target_is_zero_percent() {
        let progress = goal_progress(&goal("0", "0", "2024-07-01"), date("2024-06-01"));
        assert_eq!(progress.percent, 0.0);
    }
}
