use api_types::transaction::Transaction;
use chrono::{Datelike, NaiveDate};

use crate::Amount;

/// Income/expense totals over a date window.
///
/// Both totals are non-negative; `is_income` selects which bucket a
/// transaction lands in, never a negative amount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowSummary {
    pub income: Amount,
    pub expenses: Amount,
}

impl WindowSummary {
    #[must_use]
    pub fn net(self) -> Amount {
        self.income - self.expenses
    }
}

/// Parses the calendar date out of a transaction's date string.
///
/// The wire format is ISO-8601, either a bare date or a timestamp; only
/// the first 10 characters are significant here.
#[must_use]
pub fn txn_date(txn: &Transaction) -> Option<NaiveDate> {
    let prefix = txn.date.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn accumulate<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
    from: NaiveDate,
    to: NaiveDate,
) -> WindowSummary {
    let mut summary = WindowSummary::default();
    for txn in transactions {
        let Some(date) = txn_date(txn) else {
            continue;
        };
        if date < from || date > to {
            continue;
        }
        let amount = Amount::parse_or_zero(&txn.amount);
        if txn.is_income {
            summary.income += amount;
        } else {
            summary.expenses += amount;
        }
    }
    summary
}

/// Sums income and expenses over transactions dated within `[from, to]`.
#[must_use]
pub fn window_summary(
    transactions: &[Transaction],
    from: NaiveDate,
    to: NaiveDate,
) -> WindowSummary {
    accumulate(transactions.iter(), from, to)
}

/// Same window rollup, scoped to one account.
#[must_use]
pub fn account_summary(
    account_id: &str,
    transactions: &[Transaction],
    from: NaiveDate,
    to: NaiveDate,
) -> WindowSummary {
    accumulate(
        transactions.iter().filter(|txn| txn.account_id == account_id),
        from,
        to,
    )
}

/// First day of `today`'s month through `today`, inclusive.
#[must_use]
pub fn month_to_date(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    (first, today)
}

/// The `"YYYY-MM"` key for `today`'s month, as budgets use it.
#[must_use]
pub fn month_key(today: NaiveDate) -> String {
    format!("{:04}-{:02}", today.year(), today.month())
}

/// Per-category expense totals, largest first.
///
/// Uncategorized spending lands under `"Other"`.
#[must_use]
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<(String, Amount)> {
    use std::collections::HashMap;

    let mut breakdown: HashMap<String, Amount> = HashMap::new();
    for txn in transactions {
        if txn.is_income {
            continue;
        }
        let category = txn.category.clone().unwrap_or_else(|| "Other".to_string());
        *breakdown.entry(category).or_insert(Amount::ZERO) += Amount::parse_or_zero(&txn.amount);
    }

    let mut result: Vec<_> = breakdown.into_iter().collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result
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
    fn june_window_scenario() {
        let txns = vec![txn("2024-06-01", "100", true), txn("2024-06-02", "40", false)];
        let summary = window_summary(&txns, date("2024-06-01"), date("2024-06-30"));
        assert_eq!(summary.income, Amount::from_cents(10_000));
        assert_eq!(summary.expenses, Amount::from_cents(4_000));
        assert_eq!(summary.net(), Amount::from_cents(6_000));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let txns = vec![
            txn("2024-06-01", "10", false),
            txn("2024-06-30", "20", false),
            txn("2024-07-01", "40", false),
            txn("2024-05-31", "80", false),
        ];
        let summary = window_summary(&txns, date("2024-06-01"), date("2024-06-30"));
        assert_eq!(summary.expenses, Amount::from_cents(3_000));
    }

    #[test]
    fn timestamped_dates_still_bucket() {
        let txns = vec![txn("2024-06-15T09:30:00Z", "5", true)];
        let summary = window_summary(&txns, date("2024-06-01"), date("2024-06-30"));
        assert_eq!(summary.income, Amount::from_cents(500));
    }

    #[test]
    fn net_equals_signed_sum() {
        let txns = vec![
            txn("2024-06-01", "100", true),
            txn("2024-06-02", "40", false),
            txn("2024-06-03", "25.50", false),
            txn("2024-06-04", "10", true),
        ];
        let summary = window_summary(&txns, date("2024-06-01"), date("2024-06-30"));

        let signed: Amount = txns
            .iter()
            .map(|t| {
                let a = Amount::parse_or_zero(&t.amount);
                if t.is_income { a } else { -a }
            })
            .sum();
        assert_eq!(summary.net(), signed);
    }

    #[test]
    fn account_summary_scopes_by_account() {
        let mut other = txn("2024-06-02", "99", false);
        other.account_id = "acc-2".to_string();
        let txns = vec![txn("2024-06-01", "100", true), other];

        let summary = account_summary("acc-1", &txns, date("2024-06-01"), date("2024-06-30"));
        assert_eq!(summary.income, Amount::from_cents(10_000));
        assert_eq!(summary.expenses, Amount::ZERO);
    }

    #[test]
    fn breakdown_sorts_descending_and_defaults_other() {
        let mut food = txn("2024-06-02", "120", false);
        food.category = Some("Food".to_string());
        let mut rent = txn("2024-06-03", "900", false);
        rent.category = Some("Rent".to_string());
        let uncategorized = txn("2024-06-04", "5", false);
        let income = txn("2024-06-05", "1000", true);

        let breakdown = category_breakdown(&[food, rent, uncategorized, income]);
        assert_eq!(
            breakdown,
            vec![
                ("Rent".to_string(), Amount::from_cents(90_000)),
                ("Food".to_string(), Amount::from_cents(12_000)),
                ("Other".to_string(), Amount::from_cents(500)),
            ]
        );
    }

    #[test]
    fn month_helpers() {
        let today = date("2024-06-17");
        assert_eq!(month_to_date(today), (date("2024-06-01"), today));
        assert_eq!(month_key(today), "2024-06");
    }
}
