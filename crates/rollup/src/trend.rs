use api_types::transaction::Transaction;
use chrono::{Days, NaiveDate};

use crate::{Amount, summary::txn_date};

/// One day of the cumulative trend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Running net total from the start of the window through this day.
    pub net: Amount,
}

pub const TREND_DAYS: u64 = 90;

/// Cumulative net series over the last 90 calendar days, oldest first.
///
/// Each day's delta is income minus expense for transactions dated that
/// day; the running total is seeded at zero the day before the window.
/// Transactions outside `[today − 89, today]` are ignored, so the final
/// point equals the net of the whole window.
#[must_use]
pub fn trend_series(transactions: &[Transaction], today: NaiveDate) -> Vec<TrendPoint> {
    let start = today
        .checked_sub_days(Days::new(TREND_DAYS - 1))
        .unwrap_or(today);

    let mut deltas: Vec<Amount> = vec![Amount::ZERO; TREND_DAYS as usize];
    for txn in transactions {
        let Some(date) = txn_date(txn) else {
            continue;
        };
        if date < start || date > today {
            continue;
        }
        let index = (date - start).num_days() as usize;
        let amount = Amount::parse_or_zero(&txn.amount);
        deltas[index] += if txn.is_income { amount } else { -amount };
    }

    let mut cumulative = Amount::ZERO;
    deltas
        .into_iter()
        .enumerate()
        .map(|(offset, delta)| {
            cumulative += delta;
            TrendPoint {
                date: start + Days::new(offset as u64),
                net: cumulative,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, amount: &str, is_income: bool) -> Transaction {
        Transaction {
            id: format!("txn-{date}-{amount}"),
            account_id: "acc-1".to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
            merchant: None,
            category: None,
            is_income,
            status: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn exactly_ninety_ascending_points() {
        let today = date("2024-06-30");
        let series = trend_series(&[], today);
        assert_eq!(series.len(), 90);
        assert_eq!(series[0].date, date("2024-04-02"));
        assert_eq!(series[89].date, today);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        assert!(series.iter().all(|p| p.net == Amount::ZERO));
    }

    #[test]
    fn final_point_equals_window_net() {
        let today = date("2024-06-30");
        let txns = vec![
            txn("2024-06-01", "100", true),
            txn("2024-06-02", "40", false),
            txn("2024-06-20", "15.25", false),
        ];
        let series = trend_series(&txns, today);
        assert_eq!(series[89].net, Amount::from_cents(4_475));
    }

    #[test]
    fn accumulates_across_days() {
        let today = date("2024-06-30");
        let txns = vec![txn("2024-06-29", "10", true), txn("2024-06-30", "4", false)];
        let series = trend_series(&txns, today);
        assert_eq!(series[87].net, Amount::ZERO);
        assert_eq!(series[88].net, Amount::from_cents(1_000));
        assert_eq!(series[89].net, Amount::from_cents(600));
    }

    #[test]
    fn out_of_window_transactions_are_ignored() {
        let today = date("2024-06-30");
        let txns = vec![
            txn("2024-01-01", "999", true),
            txn("2024-07-01", "999", true),
            txn("2024-04-02", "1", true),
        ];
        let series = trend_series(&txns, today);
        assert_eq!(series[0].net, Amount::from_cents(100));
        assert_eq!(series[89].net, Amount::from_cents(100));
    }
}
