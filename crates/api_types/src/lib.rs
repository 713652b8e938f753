use serde::{Deserialize, Serialize};

pub mod user {
    use super::*;

    /// Current user, from `GET /api/me`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct User {
        pub id: String,
        pub email: String,
        pub household_id: String,
    }
}

pub mod account {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum AccountKind {
        Checking,
        Savings,
        Brokerage,
    }

    impl AccountKind {
        pub fn label(self) -> &'static str {
            match self {
                Self::Checking => "Checking",
                Self::Savings => "Savings",
                Self::Brokerage => "Investment",
            }
        }
    }

    /// A linked bank account. One household can hold many accounts.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Account {
        pub id: String,
        pub institution_id: String,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: AccountKind,
        /// Last digits of the account number, for display only.
        pub mask: String,
        /// Decimal amount as a string, e.g. `"1234.56"`.
        pub balance: String,
        pub institution: String,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum TransactionStatus {
        Posted,
        Pending,
    }

    /// A single bank transaction, belonging to exactly one account.
    ///
    /// `amount` is always non-negative; `is_income` selects the sign when
    /// aggregating.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Transaction {
        pub id: String,
        pub account_id: String,
        /// ISO-8601 date string, e.g. `"2024-06-01"`.
        pub date: String,
        /// Decimal amount as a string, e.g. `"42.17"`.
        pub amount: String,
        pub merchant: Option<String>,
        /// User-editable post-hoc via `PATCH /api/transactions/:id`.
        pub category: Option<String>,
        pub is_income: bool,
        pub status: Option<TransactionStatus>,
    }

    /// Query parameters for `GET /api/transactions`.
    ///
    /// Unset filters are omitted from the query string.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionQuery {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub from: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub to: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub q: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub account_id: Option<String>,
    }

    /// Server-computed income/expense totals for the query window.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Summary {
        pub income: String,
        pub expenses: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionPage {
        pub transactions: Vec<Transaction>,
        pub summary: Summary,
    }

    /// Body for `PATCH /api/transactions/:id`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransactionPatch {
        pub category: String,
    }
}

pub mod budget {
    use super::*;

    /// A per-category monthly spending limit, shared across a household.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Budget {
        pub id: String,
        pub household_id: String,
        /// `"YYYY-MM"`.
        pub month: String,
        pub category: String,
        pub limit_amount: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BudgetPage {
        pub month: String,
        pub budgets: Vec<Budget>,
    }

    /// Body for `POST /api/budgets`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetNew {
        pub month: String,
        pub category: String,
        pub limit_amount: String,
    }
}

pub mod goal {
    use super::*;

    /// A savings target. Progress is computed client-side, never stored.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Goal {
        pub id: String,
        pub household_id: String,
        pub name: String,
        pub target_amount: String,
        pub current_amount: String,
        /// ISO-8601 date string.
        pub target_date: String,
    }

    /// Body for `POST /api/goals`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GoalNew {
        pub name: String,
        pub target_amount: String,
        pub target_date: String,
    }
}

pub mod partner {
    use super::*;

    /// Lifecycle of a household-sharing relationship.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum PartnerStatus {
        Invited,
        Accepted,
        Active,
    }

    impl PartnerStatus {
        pub fn label(self) -> &'static str {
            match self {
                Self::Invited => "invited",
                Self::Accepted => "accepted",
                Self::Active => "active",
            }
        }
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Partner {
        pub id: String,
        pub email: String,
        pub household_id: String,
        pub status: PartnerStatus,
        pub invited_by: String,
        pub invited_at: String,
        pub accepted_at: Option<String>,
    }

    /// Body for `POST /api/partners/invite`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct PartnerInvite {
        pub email: String,
    }
}

pub mod plaid {
    use super::*;

    // The aggregator speaks snake_case, unlike the rest of the API.

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct LinkToken {
        pub link_token: String,
    }

    /// Body for `POST /api/plaid/exchange`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Exchange {
        pub public_token: String,
        pub institution_name: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Ack {
        pub ok: bool,
    }
}
