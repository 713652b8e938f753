//! Client-side aggregation over the budgeting API's records.
//!
//! Everything here is a pure function over slices of [`api_types`] values,
//! recomputed from scratch whenever the underlying store slice changes.
//! Amounts stay in integer cents (see [`Amount`]); dates are parsed only
//! where calendar math is required, and budget month matching stays a
//! string-prefix test to match the backend's `"YYYY-MM"` keys.

mod amount;
mod budgets;
mod goals;
mod household;
mod summary;
mod trend;

pub use amount::{Amount, AmountError};
pub use budgets::{BudgetUsage, budget_spent, budget_transactions, budget_usage};
pub use goals::{GoalProgress, goal_progress};
pub use household::{CombinedFinances, combined_household};
pub use summary::{
    WindowSummary, account_summary, category_breakdown, month_key, month_to_date, txn_date,
    window_summary,
};
pub use trend::{TREND_DAYS, TrendPoint, trend_series};
