use api_types::{budget::Budget, goal::Goal, transaction::Transaction};

use crate::{Amount, budgets::budget_usage};

/// The "Shared Finances" rollup across everything the household holds:
/// whole-slice income/expenses, all budgets' limits vs. spend, and all
/// goals' targets vs. saved.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CombinedFinances {
    pub income: Amount,
    pub expenses: Amount,
    pub budget_limit: Amount,
    pub budget_spent: Amount,
    pub goal_target: Amount,
    pub goal_current: Amount,
}

impl CombinedFinances {
    #[must_use]
    pub fn net(self) -> Amount {
        self.income - self.expenses
    }

    /// Overall goal progress percentage; 0 when no goal has a target.
    #[must_use]
    pub fn goal_percent(self) -> f64 {
        if self.goal_target.cents() > 0 {
            self.goal_current.cents() as f64 / self.goal_target.cents() as f64 * 100.0
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn budgets_over(self) -> bool {
        self.budget_spent > self.budget_limit
    }
}

#[must_use]
pub fn combined_household(
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[Goal],
) -> CombinedFinances {
    let mut combined = CombinedFinances::default();

    for txn in transactions {
        let amount = Amount::parse_or_zero(&txn.amount);
        if txn.is_income {
            combined.income += amount;
        } else {
            combined.expenses += amount;
        }
    }

    for budget in budgets {
        let usage = budget_usage(budget, transactions);
        combined.budget_limit += usage.limit;
        combined.budget_spent += usage.spent;
    }

    for goal in goals {
        combined.goal_target += Amount::parse_or_zero(&goal.target_amount);
        combined.goal_current += Amount::parse_or_zero(&goal.current_amount);
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_all_three_slices() {
        let txns = vec![
            Transaction {
                id: "t1".to_string(),
                account_id: "acc-1".to_string(),
                date: "2024-06-01".to_string(),
                amount: "1000".to_string(),
                merchant: None,
                category: None,
                is_income: true,
                status: None,
            },
            Transaction {
                id: "t2".to_string(),
                account_id: "acc-1".to_string(),
                date: "2024-06-02".to_string(),
                amount: "300".to_string(),
                merchant: None,
                category: Some("Food".to_string()),
                is_income: false,
                status: None,
            },
        ];
        let budgets = vec![Budget {
            id: "b1".to_string(),
            household_id: "household-1".to_string(),
            month: "2024-06".to_string(),
            category: "Food".to_string(),
            limit_amount: "400".to_string(),
        }];
        let goals = vec![Goal {
            id: "g1".to_string(),
            household_id: "household-1".to_string(),
            name: "Trip".to_string(),
            target_amount: "2000".to_string(),
            current_amount: "500".to_string(),
            target_date: "2024-12-31".to_string(),
        }];

        let combined = combined_household(&txns, &budgets, &goals);
        assert_eq!(combined.income, Amount::from_cents(100_000));
        assert_eq!(combined.expenses, Amount::from_cents(30_000));
        assert_eq!(combined.net(), Amount::from_cents(70_000));
        assert_eq!(combined.budget_limit, Amount::from_cents(40_000));
        assert_eq!(combined.budget_spent, Amount::from_cents(30_000));
        assert!(!combined.budgets_over());
        assert_eq!(combined.goal_target, Amount::from_cents(200_000));
        assert_eq!(combined.goal_current, Amount::from_cents(50_000));
        assert!((combined.goal_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_household_is_all_zero() {
        let combined = combined_household(&[], &[], &[]);
        assert_eq!(combined, CombinedFinances::default());
        assert_eq!(combined.goal_percent(), 0.0);
    }
}
