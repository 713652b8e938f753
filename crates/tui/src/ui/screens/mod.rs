pub mod budgets;
pub mod dashboard;
pub mod goals;
pub mod household;
pub mod link;
pub mod transactions;
