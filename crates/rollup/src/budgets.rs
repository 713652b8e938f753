use api_types::{budget::Budget, transaction::Transaction};

use crate::Amount;

/// Spend-vs-limit rollup for one budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetUsage {
    pub spent: Amount,
    pub limit: Amount,
    /// True percentage (`100 · spent/limit`), unclamped; 0 when the limit
    /// is zero. Display clamps the bar, not this value.
    pub percent: f64,
    pub is_over: bool,
    pub over_by: Amount,
}

impl BudgetUsage {
    /// Fill ratio for progress bars, clamped to `[0, 1]`.
    #[must_use]
    pub fn fill_ratio(self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }
}

/// Sums expense transactions matching the budget's category and month.
///
/// Month matching is a string-prefix test on the raw ISO date, exactly as
/// the backend's `"YYYY-MM"` keys expect. Income never counts toward a
/// budget.
#[must_use]
pub fn budget_spent(budget: &Budget, transactions: &[Transaction]) -> Amount {
    budget_transactions(budget, transactions)
        .into_iter()
        .map(|txn| Amount::parse_or_zero(&txn.amount))
        .sum()
}

#[must_use]
pub fn budget_usage(budget: &Budget, transactions: &[Transaction]) -> BudgetUsage {
    let spent = budget_spent(budget, transactions);
    let limit = Amount::parse_or_zero(&budget.limit_amount);

    let percent = if limit.cents() > 0 {
        spent.cents() as f64 / limit.cents() as f64 * 100.0
    } else {
        0.0
    };
    let is_over = spent > limit;
    let over_by = if is_over { spent - limit } else { Amount::ZERO };

    BudgetUsage {
        spent,
        limit,
        percent,
        is_over,
        over_by,
    }
}

/// The expense transactions a budget's spent figure is made of, for the
/// budget detail view.
#[must_use]
pub fn budget_transactions<'a>(
    budget: &Budget,
    transactions: &'a [Transaction],
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|txn| {
            !txn.is_income
                && txn.category.as_deref() == Some(budget.category.as_str())
                && txn.date.starts_with(&budget.month)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(month: &str, category: &str, limit: &str) -> Budget {
        Budget {
            id: "bud-1".to_string(),
            household_id: "household-1".to_string(),
            month: month.to_string(),
            category: category.to_string(),
            limit_amount: limit.to_string(),
        }
    }

    fn expense(date: &str, category: &str, amount: &str) -> Transaction {
        Transaction {
            id: format!("txn-{date}-{amount}"),
            account_id: "acc-1".to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
            merchant: None,
            category: Some(category.to_string()),
            is_income: false,
            status: None,
        }
    }

    #[test]
    fn food_budget_scenario() {
        let budget = budget("2024-06", "Food", "200");
        let txns = vec![
            expense("2024-06-03", "Food", "100"),
            expense("2024-06-12", "Food", "150"),
        ];

        let usage = budget_usage(&budget, &txns);
        assert_eq!(usage.spent, Amount::from_cents(25_000));
        assert!(usage.is_over);
        assert_eq!(usage.over_by, Amount::from_cents(5_000));
    }

    #[test]
    fn percent_is_spent_over_limit() {
        let budget = budget("2024-06", "Food", "200");
        let txns = vec![expense("2024-06-03", "Food", "50")];
        let usage = budget_usage(&budget, &txns);
        assert!((usage.percent - 25.0).abs() < f64::EPSILON);
        assert!(!usage.is_over);
        assert_eq!(usage.over_by, Amount::ZERO);
    }

    #[test]
    fn spent_equal_to_limit_is_not_over() {
        let budget = budget("2024-06", "Food", "200");
        let txns = vec![expense("2024-06-03", "Food", "200")];
        let usage = budget_usage(&budget, &txns);
        assert!(!usage.is_over);
        assert!((usage.percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_limit_yields_zero_percent() {
        let budget = budget("2024-06", "Food", "0");
        let txns = vec![expense("2024-06-03", "Food", "10")];
        let usage = budget_usage(&budget, &txns);
        assert_eq!(usage.percent, 0.0);
        assert!(usage.is_over);
    }

    #[test]
    fn month_match_is_a_string_prefix() {
        let budget = budget("2024-06", "Food", "200");
        let txns = vec![
            expense("2024-06-30", "Food", "10"),
            expense("2024-07-01", "Food", "999"),
            expense("2024-06-15", "Rent", "999"),
        ];
        assert_eq!(budget_spent(&budget, &txns), Amount::from_cents(1_000));
    }

    #[test]
    fn income_never_counts_toward_spend() {
        let budget = budget("2024-06", "Food", "200");
        let mut refund = expense("2024-06-03", "Food", "40");
        refund.is_income = true;
        assert_eq!(budget_spent(&budget, &[refund]), Amount::ZERO);
    }

    #[test]
    fn fill_ratio_clamps_over_budget() {
        let budget = budget("2024-06", "Food", "100");
        let txns = vec![expense("2024-06-03", "Food", "250")];
        let usage = budget_usage(&budget, &txns);
        assert!((usage.percent - 250.0).abs() < f64::EPSILON);
        assert!((usage.fill_ratio() - 1.0).abs() < f64::EPSILON);
    }
}
