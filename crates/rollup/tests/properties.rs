use api_types::{budget::Budget, goal::Goal, transaction::Transaction};
use chrono::NaiveDate;

use rollup::{
    Amount, budget_usage, combined_household, goal_progress, trend_series, window_summary,
};

fn txn(id: &str, date: &str, amount: &str, category: Option<&str>, is_income: bool) -> Transaction {
    Transaction {
        id: id.to_string(),
        account_id: "acc-1".to_string(),
        date: date.to_string(),
        amount: amount.to_string(),
        merchant: None,
        category: category.map(str::to_string),
        is_income,
        status: None,
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// A month of mixed activity used by several properties below.
fn june_fixture() -> Vec<Transaction> {
    vec![
        txn("t1", "2024-06-01", "2500", None, true),
        txn("t2", "2024-06-02", "83.12", Some("Food"), false),
        txn("t3", "2024-06-05", "1200", Some("Rent"), false),
        txn("t4", "2024-06-09", "42.50", Some("Food"), false),
        txn("t5", "2024-06-15", "300", None, true),
        txn("t6", "2024-06-21", "19.99", Some("Fun"), false),
        txn("t7", "2024-06-28", "74.39", Some("Food"), false),
    ]
}

#[test]
fn income_minus_expenses_equals_signed_sum() {
    let txns = june_fixture();
    let summary = window_summary(&txns, date("2024-06-01"), date("2024-06-30"));

    let signed: Amount = txns
        .iter()
        .map(|t| {
            let a = Amount::parse_or_zero(&t.amount);
            if t.is_income { a } else { -a }
        })
        .sum();

    assert_eq!(summary.income - summary.expenses, signed);
    assert_eq!(summary.net(), signed);
}

#[test]
fn no_transaction_counts_in_both_buckets() {
    let txns = june_fixture();
    let summary = window_summary(&txns, date("2024-06-01"), date("2024-06-30"));
    let total: Amount = txns.iter().map(|t| Amount::parse_or_zero(&t.amount)).sum();
    assert_eq!(summary.income + summary.expenses, total);
}

#[test]
fn budget_over_flag_boundaries() {
    let budget = |limit: &str| Budget {
        id: "b".to_string(),
        household_id: "h".to_string(),
        month: "2024-06".to_string(),
        category: "Food".to_string(),
        limit_amount: limit.to_string(),
    };
    let txns = june_fixture(); // Food spend: 83.12 + 42.50 + 74.39 = 200.01

    let under = budget_usage(&budget("300"), &txns);
    assert!(!under.is_over);
    assert!((under.percent - 200.01 / 300.0 * 100.0).abs() < 1e-9);

    let exact = budget_usage(&budget("200.01"), &txns);
    assert!(!exact.is_over, "spent == limit must not flag over");
    assert_eq!(exact.over_by, Amount::ZERO);

    let over = budget_usage(&budget("200.00"), &txns);
    assert!(over.is_over);
    assert_eq!(over.over_by, Amount::from_cents(1));
}

#[test]
fn food_budget_overspent_250_of_200() {
    let budget = Budget {
        id: "b".to_string(),
        household_id: "h".to_string(),
        month: "2024-06".to_string(),
        category: "Food".to_string(),
        limit_amount: "200".to_string(),
    };
    let txns = vec![
        txn("t1", "2024-06-03", "100", Some("Food"), false),
        txn("t2", "2024-06-18", "150", Some("Food"), false),
    ];
    let usage = budget_usage(&budget, &txns);
    assert_eq!(usage.spent, Amount::from_cents(25_000));
    assert!(usage.is_over);
    assert_eq!(usage.over_by, Amount::from_cents(5_000));
}

#[test]
fn goal_reports_true_percent_and_clamped_ratio() {
    let goal = |current: &str| Goal {
        id: "g".to_string(),
        household_id: "h".to_string(),
        name: "Trip".to_string(),
        target_amount: "1000".to_string(),
        current_amount: current.to_string(),
        target_date: "2024-07-01".to_string(),
    };

    let quarter = goal_progress(&goal("250"), date("2024-06-01"));
    assert!((quarter.percent - 25.0).abs() < f64::EPSILON);
    assert_eq!(quarter.days_remaining, 30);
    assert_eq!(quarter.monthly_needed, Some(Amount::from_cents(75_000)));

    let over = goal_progress(&goal("1250"), date("2024-06-01"));
    assert!((over.percent - 125.0).abs() < f64::EPSILON);
    assert!((over.fill_ratio() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn trend_series_shape_and_total() {
    let today = date("2024-06-30");
    let txns = june_fixture();
    let series = trend_series(&txns, today);

    assert_eq!(series.len(), 90);
    assert!(series.windows(2).all(|w| w[0].date < w[1].date));

    let window_net = window_summary(&txns, series[0].date, today).net();
    assert_eq!(series[89].net, window_net);
}

#[test]
fn combined_household_matches_piecewise_rollups() {
    let txns = june_fixture();
    let budgets = vec![
        Budget {
            id: "b1".to_string(),
            household_id: "h".to_string(),
            month: "2024-06".to_string(),
            category: "Food".to_string(),
            limit_amount: "250".to_string(),
        },
        Budget {
            id: "b2".to_string(),
            household_id: "h".to_string(),
            month: "2024-06".to_string(),
            category: "Rent".to_string(),
            limit_amount: "1100".to_string(),
        },
    ];
    let goals = vec![Goal {
        id: "g1".to_string(),
        household_id: "h".to_string(),
        name: "Trip".to_string(),
        target_amount: "3000".to_string(),
        current_amount: "900".to_string(),
        target_date: "2025-01-01".to_string(),
    }];

    let combined = combined_household(&txns, &budgets, &goals);
    let spent_sum: Amount = budgets.iter().map(|b| budget_usage(b, &txns).spent).sum();
    assert_eq!(combined.budget_spent, spent_sum);
    assert_eq!(combined.budget_limit, Amount::from_cents(135_000));
    assert!(combined.budgets_over(), "rent overruns the household total");
    assert!((combined.goal_percent() - 30.0).abs() < f64::EPSILON);
}
