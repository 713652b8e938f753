use api_types::{
    account::Account,
    budget::Budget,
    goal::Goal,
    partner::Partner,
    transaction::{Summary, Transaction, TransactionPage},
    user::User,
};

/// Current user, filled once by the best-effort startup bootstrap and left
/// empty when that call fails.
#[derive(Debug, Default)]
pub struct Session {
    pub user: Option<User>,
}

/// Monotonic request counter for one store slice.
///
/// Without it, overlapping loads of the same slice are last-response-wins
/// and a slow stale response can overwrite newer data. Every load takes a
/// token up front and a response only lands while its token is still the
/// newest one issued.
#[derive(Debug, Default)]
struct Generation {
    issued: u64,
}

impl Generation {
    fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn is_current(&self, token: u64) -> bool {
        token == self.issued
    }
}

/// All server-confirmed state the UI renders from.
///
/// Loads replace a slice wholesale (entries absent from the new response
/// are dropped); mutations splice the confirmed record back in. Nothing
/// here is optimistic.
#[derive(Debug, Default)]
pub struct DataStore {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<Goal>,
    pub partners: Vec<Partner>,
    /// Server-computed totals for the last transaction query.
    pub summary: Option<Summary>,
    transactions_gen: Generation,
}

impl DataStore {
    /// Starts a transactions load; the returned token must be handed back
    /// to [`DataStore::apply_transactions`].
    pub fn begin_transactions_load(&mut self) -> u64 {
        self.transactions_gen.begin()
    }

    /// Commits a transactions response unless a newer load was issued in
    /// the meantime. Returns whether the page landed.
    pub fn apply_transactions(&mut self, token: u64, page: TransactionPage) -> bool {
        if !self.transactions_gen.is_current(token) {
            tracing::debug!(token, "dropping stale transactions response");
            return false;
        }
        self.transactions = page.transactions;
        self.summary = Some(page.summary);
        true
    }

    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    pub fn set_budgets(&mut self, budgets: Vec<Budget>) {
        self.budgets = budgets;
    }

    pub fn set_goals(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    pub fn set_partners(&mut self, partners: Vec<Partner>) {
        self.partners = partners;
    }

    /// Replaces the matching transaction in place; unknown ids are ignored
    /// (the row may have been filtered out since the edit started).
    pub fn upsert_transaction(&mut self, updated: Transaction) {
        if let Some(slot) = self.transactions.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn push_budget(&mut self, budget: Budget) {
        self.budgets.push(budget);
    }

    pub fn push_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    pub fn push_partner(&mut self, partner: Partner) {
        self.partners.push(partner);
    }

    /// Replaces the matching partner in place (status transitions).
    pub fn apply_partner(&mut self, updated: Partner) {
        if let Some(slot) = self.partners.iter_mut().find(|p| p.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn remove_partner(&mut self, id: &str) {
        self.partners.retain(|p| p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_types::partner::PartnerStatus;

    fn txn(id: &str, amount: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            account_id: "acc-1".to_string(),
            date: "2024-06-01".to_string(),
            amount: amount.to_string(),
            merchant: None,
            category: None,
            is_income: false,
            status: None,
        }
    }

    fn page(ids: &[&str]) -> TransactionPage {
        TransactionPage {
            transactions: ids.iter().map(|id| txn(id, "10")).collect(),
            summary: Summary {
                income: "0".to_string(),
                expenses: "10".to_string(),
            },
        }
    }

    fn partner(id: &str, status: PartnerStatus) -> Partner {
        Partner {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            household_id: "household-1".to_string(),
            status,
            invited_by: "user-1".to_string(),
            invited_at: "2024-06-01".to_string(),
            accepted_at: None,
        }
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut store = DataStore::default();

        // Two overlapping loads: the first one's response arrives last.
        let first = store.begin_transactions_load();
        let second = store.begin_transactions_load();

        assert!(store.apply_transactions(second, page(&["new"])));
        assert!(!store.apply_transactions(first, page(&["old"])));

        assert_eq!(store.transactions.len(), 1);
        assert_eq!(store.transactions[0].id, "new");
    }

    #[test]
    fn in_order_responses_both_land() {
        let mut store = DataStore::default();

        let first = store.begin_transactions_load();
        assert!(store.apply_transactions(first, page(&["a"])));

        let second = store.begin_transactions_load();
        assert!(store.apply_transactions(second, page(&["b", "c"])));

        assert_eq!(store.transactions.len(), 2);
        assert!(store.summary.is_some());
    }

    #[test]
    fn load_replaces_wholesale() {
        let mut store = DataStore::default();
        let token = store.begin_transactions_load();
        store.apply_transactions(token, page(&["a", "b"]));

        let token = store.begin_transactions_load();
        store.apply_transactions(token, page(&["c"]));

        // Stale ids from the previous response are gone, not merged.
        assert_eq!(store.transactions.len(), 1);
        assert_eq!(store.transactions[0].id, "c");
    }

    #[test]
    fn upsert_replaces_by_id_and_ignores_unknown() {
        let mut store = DataStore::default();
        let token = store.begin_transactions_load();
        store.apply_transactions(token, page(&["a", "b"]));

        let mut edited = txn("b", "10");
        edited.category = Some("Food".to_string());
        store.upsert_transaction(edited);
        assert_eq!(store.transactions[1].category.as_deref(), Some("Food"));

        store.upsert_transaction(txn("ghost", "1"));
        assert_eq!(store.transactions.len(), 2);
    }

    #[test]
    fn partner_lifecycle() {
        let mut store = DataStore::default();
        store.push_partner(partner("p1", PartnerStatus::Invited));
        store.push_partner(partner("p2", PartnerStatus::Active));

        let mut accepted = partner("p1", PartnerStatus::Accepted);
        accepted.accepted_at = Some("2024-06-10".to_string());
        store.apply_partner(accepted);
        assert_eq!(store.partners[0].status, PartnerStatus::Accepted);

        store.remove_partner("p2");
        assert_eq!(store.partners.len(), 1);
        assert_eq!(store.partners[0].id, "p1");
    }
}
