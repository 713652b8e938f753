use std::time::{Duration, Instant};

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate};
use crossterm::event::{self, Event, KeyEvent};

use api_types::{
    budget::BudgetNew,
    goal::GoalNew,
    partner::{PartnerInvite, PartnerStatus},
    plaid::Exchange,
    transaction::{TransactionPatch, TransactionQuery},
};
use rollup::{Amount, month_key, month_to_date};

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::Result,
    store::{DataStore, Session},
    ui::{
        self,
        keymap::{AppAction, map_edit_key, map_key},
    },
};

const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Transactions,
    Budgets,
    Goals,
    Household,
    Link,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Dashboard,
        Self::Transactions,
        Self::Budgets,
        Self::Goals,
        Self::Household,
        Self::Link,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Transactions => "Transactions",
            Self::Budgets => "Budgets",
            Self::Goals => "Goals",
            Self::Household => "Household",
            Self::Link => "Link",
        }
    }

    pub fn key(self) -> char {
        match self {
            Self::Dashboard => 'd',
            Self::Transactions => 't',
            Self::Budgets => 'b',
            Self::Goals => 'g',
            Self::Household => 'h',
            Self::Link => 'l',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    raised_at: Instant,
}

#[derive(Debug, Default)]
pub struct DashboardUi {
    pub loaded: bool,
}

#[derive(Debug, Default)]
pub struct FilterForm {
    pub active: bool,
    pub from: String,
    pub to: String,
    pub category: String,
    pub q: String,
    pub account_id: String,
    pub focus: usize,
}

impl FilterForm {
    const FIELDS: usize = 5;

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.from,
            1 => &mut self.to,
            2 => &mut self.category,
            3 => &mut self.q,
            _ => &mut self.account_id,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::FIELDS;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Empty fields become absent query parameters.
    pub fn to_query(&self) -> TransactionQuery {
        let opt = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        TransactionQuery {
            from: opt(&self.from),
            to: opt(&self.to),
            category: opt(&self.category),
            q: opt(&self.q),
            account_id: opt(&self.account_id),
        }
    }
}

#[derive(Debug, Default)]
pub struct TransactionsUi {
    pub selected: usize,
    pub filters: FilterForm,
    /// Input buffer while recategorizing the selected row.
    pub category_edit: Option<String>,
    pub loaded: bool,
}

#[derive(Debug, Default)]
pub struct BudgetForm {
    pub active: bool,
    pub category: String,
    pub limit: String,
    pub focus: usize,
    pub error: Option<String>,
}

impl BudgetForm {
    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.category,
            _ => &mut self.limit,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % 2;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug)]
pub struct BudgetsUi {
    /// First day of the month being browsed.
    pub month: NaiveDate,
    pub selected: usize,
    pub form: BudgetForm,
    pub show_detail: bool,
    pub loaded: bool,
}

#[derive(Debug, Default)]
pub struct GoalForm {
    pub active: bool,
    pub name: String,
    pub target: String,
    pub target_date: String,
    pub focus: usize,
    pub error: Option<String>,
}

impl GoalForm {
    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.target,
            _ => &mut self.target_date,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % 3;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub struct GoalsUi {
    pub selected: usize,
    pub form: GoalForm,
    pub loaded: bool,
}

#[derive(Debug, Default)]
pub struct InviteForm {
    pub active: bool,
    pub email: String,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct HouseholdUi {
    pub selected: usize,
    pub invite: InviteForm,
    pub loaded: bool,
}

/// The aggregator handshake, minus the real widget: the confirm step
/// stands in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStep {
    Idle,
    Confirm,
    Done,
    Failed(String),
}

#[derive(Debug)]
pub struct LinkUi {
    pub step: LinkStep,
    pub token: Option<String>,
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub session: Session,
    pub data: DataStore,
    pub today: NaiveDate,
    pub dashboard: DashboardUi,
    pub transactions: TransactionsUi,
    pub budgets: BudgetsUi,
    pub goals: GoalsUi,
    pub household: HouseholdUi,
    pub link: LinkUi,
    pub toast: Option<ToastState>,
    pub last_refresh: Option<DateTime<Local>>,
    pub base_url: String,
}

impl AppState {
    fn new(base_url: String, today: NaiveDate) -> Self {
        Self {
            section: Section::Dashboard,
            session: Session::default(),
            data: DataStore::default(),
            today,
            dashboard: DashboardUi::default(),
            transactions: TransactionsUi::default(),
            budgets: BudgetsUi {
                month: first_of_month(today),
                selected: 0,
                form: BudgetForm::default(),
                show_detail: false,
                loaded: false,
            },
            goals: GoalsUi::default(),
            household: HouseholdUi::default(),
            link: LinkUi {
                step: LinkStep::Idle,
                token: None,
            },
            toast: None,
            last_refresh: None,
            base_url,
        }
    }
}

pub struct App {
    client: Client,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let today = Local::now().date_naive();
        let state = AppState::new(config.base_url, today);

        Ok(Self {
            client,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.bootstrap_session().await;
        let initial = self.refresh_dashboard().await;
        self.report(initial);

        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.tick();

            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| crate::error::AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn tick(&mut self) {
        if let Some(toast) = &self.state.toast {
            if toast.raised_at.elapsed() > TOAST_TTL {
                self.state.toast = None;
            }
        }
        self.state.today = Local::now().date_naive();
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.state.toast = Some(ToastState {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        });
    }

    /// Bubbles a store-operation failure into a toast.
    fn report(&mut self, result: std::result::Result<(), ClientError>) {
        if let Err(err) = result {
            tracing::debug!("request failed: {err}");
            self.toast(ToastLevel::Error, err.to_string());
        }
    }

    /// One best-effort call; an unauthenticated session just stays empty.
    async fn bootstrap_session(&mut self) {
        match self.client.me().await {
            Ok(user) => self.state.session.user = Some(user),
            Err(err) => tracing::warn!("session bootstrap failed: {err}"),
        }
    }

    fn editing(&self) -> bool {
        match self.state.section {
            Section::Transactions => {
                self.state.transactions.filters.active
                    || self.state.transactions.category_edit.is_some()
            }
            Section::Budgets => self.state.budgets.form.active,
            Section::Goals => self.state.goals.form.active,
            Section::Household => self.state.household.invite.active,
            _ => false,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.editing() {
            self.handle_edit_key(key).await
        } else {
            self.handle_browse_key(key).await
        }
    }

    async fn handle_edit_key(&mut self, key: KeyEvent) -> Result<()> {
        match map_edit_key(key) {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => self.cancel_edit(),
            AppAction::NextField => match self.state.section {
                Section::Transactions => self.state.transactions.filters.next_field(),
                Section::Budgets => self.state.budgets.form.next_field(),
                Section::Goals => self.state.goals.form.next_field(),
                _ => {}
            },
            AppAction::Backspace => {
                if let Some(field) = self.active_field_mut() {
                    field.pop();
                }
            }
            AppAction::Input(ch) => {
                if let Some(field) = self.active_field_mut() {
                    field.push(ch);
                }
            }
            AppAction::Submit => self.submit_edit().await,
            AppAction::Up | AppAction::Down | AppAction::None => {}
        }
        Ok(())
    }

    fn cancel_edit(&mut self) {
        match self.state.section {
            Section::Transactions => {
                self.state.transactions.filters.active = false;
                self.state.transactions.category_edit = None;
            }
            Section::Budgets => self.state.budgets.form.close(),
            Section::Goals => self.state.goals.form.close(),
            Section::Household => self.state.household.invite = InviteForm::default(),
            _ => {}
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.state.section {
            Section::Transactions => {
                if self.state.transactions.filters.active {
                    Some(self.state.transactions.filters.field_mut())
                } else {
                    self.state.transactions.category_edit.as_mut()
                }
            }
            Section::Budgets => Some(self.state.budgets.form.field_mut()),
            Section::Goals => Some(self.state.goals.form.field_mut()),
            Section::Household => Some(&mut self.state.household.invite.email),
            _ => None,
        }
    }

    async fn submit_edit(&mut self) {
        match self.state.section {
            Section::Transactions => {
                if self.state.transactions.filters.active {
                    self.apply_filters().await;
                } else {
                    self.submit_category_edit().await;
                }
            }
            Section::Budgets => self.submit_budget().await,
            Section::Goals => self.submit_goal().await,
            Section::Household => self.submit_invite().await,
            _ => {}
        }
    }

    async fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match map_key(key) {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => {
                self.state.toast = None;
                match self.state.section {
                    Section::Budgets => self.state.budgets.show_detail = false,
                    Section::Link => {
                        self.state.link.step = LinkStep::Idle;
                        self.state.link.token = None;
                    }
                    _ => {}
                }
            }
            AppAction::Up => self.select_prev(),
            AppAction::Down => self.select_next(),
            AppAction::Submit => match self.state.section {
                Section::Transactions => self.open_category_edit(),
                Section::Budgets => {
                    self.state.budgets.show_detail = !self.state.budgets.show_detail;
                }
                Section::Link => self.advance_link().await,
                _ => {}
            },
            AppAction::Input(ch) => self.handle_browse_char(ch).await?,
            AppAction::NextField | AppAction::Backspace | AppAction::None => {}
        }
        Ok(())
    }

    async fn handle_browse_char(&mut self, ch: char) -> Result<()> {
        let lower = ch.to_ascii_lowercase();

        if let Some(section) = Section::ALL.iter().find(|s| s.key() == lower) {
            self.switch_section(*section).await;
            return Ok(());
        }

        match (self.state.section, lower) {
            (_, 'r') => self.refresh_current().await,
            (_, 'j') => self.select_next(),
            (_, 'k') => self.select_prev(),
            (Section::Transactions, '/') => self.state.transactions.filters.active = true,
            (Section::Transactions, 'e') => self.open_category_edit(),
            (Section::Transactions, 'c') => {
                self.state.transactions.filters.clear();
                let query = TransactionQuery::default();
                let result = self.load_transactions(query).await;
                self.report(result);
            }
            (Section::Budgets, 'a') => self.state.budgets.form.active = true,
            (Section::Budgets, 'n') => self.shift_budget_month(1).await,
            (Section::Budgets, 'p') => self.shift_budget_month(-1).await,
            (Section::Goals, 'a') => self.state.goals.form.active = true,
            (Section::Household, 'i') => self.state.household.invite.active = true,
            (Section::Household, 'a') => self.accept_selected_partner().await,
            (Section::Household, 'x') => self.remove_selected_partner().await,
            _ => {}
        }
        Ok(())
    }

    fn select_next(&mut self) {
        let (selected, len) = self.selection_mut();
        if let Some(selected) = selected {
            if len > 0 {
                *selected = (*selected + 1).min(len - 1);
            }
        }
    }

    fn select_prev(&mut self) {
        let (selected, _) = self.selection_mut();
        if let Some(selected) = selected {
            *selected = selected.saturating_sub(1);
        }
    }

    fn selection_mut(&mut self) -> (Option<&mut usize>, usize) {
        match self.state.section {
            Section::Transactions => (
                Some(&mut self.state.transactions.selected),
                self.state.data.transactions.len(),
            ),
            Section::Budgets => (
                Some(&mut self.state.budgets.selected),
                self.state.data.budgets.len(),
            ),
            Section::Goals => (
                Some(&mut self.state.goals.selected),
                self.state.data.goals.len(),
            ),
            Section::Household => (
                Some(&mut self.state.household.selected),
                self.state.data.partners.len(),
            ),
            _ => (None, 0),
        }
    }

    async fn switch_section(&mut self, section: Section) {
        self.state.section = section;
        let result = match section {
            Section::Dashboard if !self.state.dashboard.loaded => self.refresh_dashboard().await,
            Section::Transactions if !self.state.transactions.loaded => {
                self.state.transactions.loaded = true;
                self.load_transactions(TransactionQuery::default()).await
            }
            Section::Budgets if !self.state.budgets.loaded => self.load_budgets_month().await,
            Section::Goals if !self.state.goals.loaded => self.load_goals().await,
            Section::Household if !self.state.household.loaded => self.load_household().await,
            _ => Ok(()),
        };
        self.report(result);
    }

    async fn refresh_current(&mut self) {
        let result = match self.state.section {
            Section::Dashboard => self.refresh_dashboard().await,
            Section::Transactions => {
                let query = self.state.transactions.filters.to_query();
                self.load_transactions(query).await
            }
            Section::Budgets => self.load_budgets_month().await,
            Section::Goals => self.load_goals().await,
            Section::Household => self.load_household().await,
            Section::Link => Ok(()),
        };
        self.report(result);
    }

    async fn refresh_dashboard(&mut self) -> std::result::Result<(), ClientError> {
        let accounts = self.client.accounts().await?;
        self.state.data.set_accounts(accounts);

        let partners = self.client.partners().await?;
        self.state.data.set_partners(partners);

        let (from, to) = month_to_date(self.state.today);
        self.load_transactions(TransactionQuery {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            ..Default::default()
        })
        .await?;

        let page = self.client.budgets(&month_key(self.state.today)).await?;
        self.state.data.set_budgets(page.budgets);

        let goals = self.client.goals().await?;
        self.state.data.set_goals(goals);

        self.state.dashboard.loaded = true;
        self.state.last_refresh = Some(Local::now());
        Ok(())
    }

    /// Generation-guarded: if another load is issued before this one's
    /// response lands, the response is dropped instead of clobbering it.
    async fn load_transactions(
        &mut self,
        query: TransactionQuery,
    ) -> std::result::Result<(), ClientError> {
        let token = self.state.data.begin_transactions_load();
        let page = self.client.transactions(&query).await?;
        if self.state.data.apply_transactions(token, page) {
            self.state.transactions.selected = 0;
        }
        self.state.last_refresh = Some(Local::now());
        Ok(())
    }

    async fn load_budgets_month(&mut self) -> std::result::Result<(), ClientError> {
        let month = self.state.budgets.month;
        let page = self.client.budgets(&month_key(month)).await?;
        self.state.data.set_budgets(page.budgets);
        self.state.budgets.selected = 0;
        self.state.budgets.loaded = true;

        // The usage bars and the detail view roll up this month's spend
        // client-side, so fetch the month's transactions alongside.
        self.load_transactions(TransactionQuery {
            from: Some(month.to_string()),
            to: Some(last_of_month(month).to_string()),
            ..Default::default()
        })
        .await
    }

    async fn load_goals(&mut self) -> std::result::Result<(), ClientError> {
        let goals = self.client.goals().await?;
        self.state.data.set_goals(goals);
        self.state.goals.loaded = true;
        self.state.last_refresh = Some(Local::now());
        Ok(())
    }

    async fn load_household(&mut self) -> std::result::Result<(), ClientError> {
        let partners = self.client.partners().await?;
        self.state.data.set_partners(partners);

        let page = self.client.budgets(&month_key(self.state.today)).await?;
        self.state.data.set_budgets(page.budgets);

        let goals = self.client.goals().await?;
        self.state.data.set_goals(goals);

        let (from, to) = month_to_date(self.state.today);
        self.load_transactions(TransactionQuery {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            ..Default::default()
        })
        .await?;

        self.state.household.loaded = true;
        Ok(())
    }

    async fn shift_budget_month(&mut self, delta: i32) {
        let month = self.state.budgets.month;
        let shifted = if delta >= 0 {
            month.checked_add_months(Months::new(delta as u32))
        } else {
            month.checked_sub_months(Months::new(delta.unsigned_abs()))
        };
        if let Some(shifted) = shifted {
            self.state.budgets.month = shifted;
            let result = self.load_budgets_month().await;
            self.report(result);
        }
    }

    async fn apply_filters(&mut self) {
        self.state.transactions.filters.active = false;
        let query = self.state.transactions.filters.to_query();
        let result = self.load_transactions(query).await;
        self.report(result);
    }

    fn open_category_edit(&mut self) {
        let selected = self.state.transactions.selected;
        if let Some(txn) = self.state.data.transactions.get(selected) {
            self.state.transactions.category_edit =
                Some(txn.category.clone().unwrap_or_default());
        }
    }

    async fn submit_category_edit(&mut self) {
        let Some(category) = self.state.transactions.category_edit.take() else {
            return;
        };
        let selected = self.state.transactions.selected;
        let Some(txn) = self.state.data.transactions.get(selected) else {
            return;
        };
        let id = txn.id.clone();

        match self
            .client
            .update_transaction(&id, &TransactionPatch { category })
            .await
        {
            Ok(updated) => {
                self.state.data.upsert_transaction(updated);
                self.toast(ToastLevel::Success, "Category updated");
            }
            Err(err) => self.report(Err(err)),
        }
    }

    async fn submit_budget(&mut self) {
        let category = self.state.budgets.form.category.trim().to_string();
        let limit = self.state.budgets.form.limit.trim().to_string();

        if category.is_empty() {
            self.state.budgets.form.error = Some("Category is required.".to_string());
            return;
        }
        if limit.parse::<Amount>().is_err() {
            self.state.budgets.form.error = Some("Limit must be a valid amount.".to_string());
            return;
        }

        let body = BudgetNew {
            month: month_key(self.state.budgets.month),
            category,
            limit_amount: limit,
        };
        match self.client.create_budget(&body).await {
            Ok(budget) => {
                self.state.data.push_budget(budget);
                self.state.budgets.form.close();
                self.toast(ToastLevel::Success, "Budget created");
            }
            Err(err) => self.report(Err(err)),
        }
    }

    async fn submit_goal(&mut self) {
        let name = self.state.goals.form.name.trim().to_string();
        let target = self.state.goals.form.target.trim().to_string();
        let target_date = self.state.goals.form.target_date.trim().to_string();

        if name.is_empty() {
            self.state.goals.form.error = Some("Name is required.".to_string());
            return;
        }
        if target.parse::<Amount>().is_err() {
            self.state.goals.form.error = Some("Target must be a valid amount.".to_string());
            return;
        }
        if NaiveDate::parse_from_str(&target_date, "%Y-%m-%d").is_err() {
            self.state.goals.form.error = Some("Date must be YYYY-MM-DD.".to_string());
            return;
        }

        let body = GoalNew {
            name,
            target_amount: target,
            target_date,
        };
        match self.client.create_goal(&body).await {
            Ok(goal) => {
                self.state.data.push_goal(goal);
                self.state.goals.form.close();
                self.toast(ToastLevel::Success, "Goal created");
            }
            Err(err) => self.report(Err(err)),
        }
    }

    async fn submit_invite(&mut self) {
        let email = self.state.household.invite.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            self.state.household.invite.error = Some("Enter a valid email.".to_string());
            return;
        }

        match self.client.invite_partner(&PartnerInvite { email }).await {
            Ok(partner) => {
                self.state.data.push_partner(partner);
                self.state.household.invite = InviteForm::default();
                self.toast(ToastLevel::Success, "Invitation sent");
            }
            Err(err) => self.report(Err(err)),
        }
    }

    async fn accept_selected_partner(&mut self) {
        let selected = self.state.household.selected;
        let Some(partner) = self.state.data.partners.get(selected) else {
            return;
        };
        if partner.status != PartnerStatus::Invited {
            self.toast(ToastLevel::Info, "Only pending invitations can be accepted");
            return;
        }
        let id = partner.id.clone();

        match self.client.accept_partner(&id).await {
            Ok(updated) => {
                self.state.data.apply_partner(updated);
                self.toast(ToastLevel::Success, "Invitation accepted");
            }
            Err(err) => self.report(Err(err)),
        }
    }

    async fn remove_selected_partner(&mut self) {
        let selected = self.state.household.selected;
        let Some(partner) = self.state.data.partners.get(selected) else {
            return;
        };
        let id = partner.id.clone();

        match self.client.remove_partner(&id).await {
            Ok(()) => {
                self.state.data.remove_partner(&id);
                let len = self.state.data.partners.len();
                if self.state.household.selected >= len && len > 0 {
                    self.state.household.selected = len - 1;
                }
                self.toast(ToastLevel::Success, "Partner removed");
            }
            Err(err) => self.report(Err(err)),
        }
    }

    /// Steps the bank-link handshake: token, placeholder widget confirm,
    /// exchange, sync, reload. Failures surface inline on the Link screen.
    async fn advance_link(&mut self) {
        match self.state.link.step.clone() {
            LinkStep::Idle => match self.client.create_link_token().await {
                Ok(token) => {
                    self.state.link.token = Some(token.link_token);
                    self.state.link.step = LinkStep::Confirm;
                }
                Err(err) => self.state.link.step = LinkStep::Failed(err.to_string()),
            },
            LinkStep::Confirm => {
                let exchange = Exchange {
                    public_token: "demo-public-token".to_string(),
                    institution_name: "Demo Bank".to_string(),
                };
                let result = async {
                    self.client.exchange_public_token(&exchange).await?;
                    self.client.sync_transactions().await?;
                    Ok::<(), ClientError>(())
                }
                .await;

                match result {
                    Ok(()) => {
                        self.state.link.step = LinkStep::Done;
                        let reload = self.refresh_dashboard().await;
                        self.report(reload);
                    }
                    Err(err) => self.state.link.step = LinkStep::Failed(err.to_string()),
                }
            }
            LinkStep::Done | LinkStep::Failed(_) => {
                self.state.link.step = LinkStep::Idle;
                self.state.link.token = None;
            }
        }
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        let first = first_of_month(date);
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(
            last_of_month(first),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );

        let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(
            last_of_month(feb),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn filter_form_query_omits_blank_fields() {
        let mut form = FilterForm::default();
        form.category = "  Food ".to_string();
        form.q = String::new();
        let query = form.to_query();
        assert_eq!(query.category.as_deref(), Some("Food"));
        assert!(query.q.is_none());
        assert!(query.from.is_none());
    }
}
