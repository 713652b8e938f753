use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use rollup::{
    Amount, account_summary, category_breakdown, combined_household, month_to_date, trend_series,
};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::{ascii_bar, mini_bar_chart, trend_levels},
            money::{styled_amount, usage_bar},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Month-to-date KPIs
            Constraint::Length(5), // 90-day trend
            Constraint::Min(6),    // Accounts
            Constraint::Length(6), // Shared finances
        ])
        .split(area);

    render_kpis(frame, layout[0], state, &theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout[1]);
    render_trend(frame, middle[0], state, &theme);
    render_top_spending(frame, middle[1], state, &theme);

    render_accounts(frame, layout[2], state, &theme);
    render_shared_finances(frame, layout[3], state, &theme);
}

/// The server computes the window totals; net is derived client-side.
fn render_kpis(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (income, expenses) = state
        .data
        .summary
        .as_ref()
        .map(|s| {
            (
                Amount::parse_or_zero(&s.income),
                Amount::parse_or_zero(&s.expenses),
            )
        })
        .unwrap_or((Amount::ZERO, Amount::ZERO));
    let net = income - expenses;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    StatCard::new("Income This Month", income.format_whole(), theme)
        .value_style(Style::default().fg(theme.positive))
        .render(frame, cols[0]);

    // Spending shown relative to income when there is any.
    let mut spending = StatCard::new("Spending This Month", expenses.format_whole(), theme)
        .value_style(Style::default().fg(theme.negative));
    if income.cents() > 0 {
        let ratio = expenses.cents() as f64 / income.cents() as f64;
        spending = spending.subtitle(ascii_bar(ratio, 16));
    }
    spending.render(frame, cols[1]);

    let net_color = if net.is_negative() {
        theme.negative
    } else {
        theme.positive
    };
    StatCard::new("Net This Month", net.format_whole(), theme)
        .value_style(Style::default().fg(net_color))
        .render(frame, cols[2]);
}

fn render_trend(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("90-Day Trend", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if state.data.transactions.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No data available",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let series = trend_series(&state.data.transactions, state.today);
    let levels = trend_levels(&series);
    // One cell per day when it fits, otherwise the most recent days.
    let width = inner.width as usize;
    let visible = &levels[levels.len().saturating_sub(width)..];

    let net = series.last().map(|p| p.net).unwrap_or(Amount::ZERO);
    let lines = vec![
        Line::from(Span::styled(
            mini_bar_chart(visible),
            Style::default().fg(theme.accent),
        )),
        Line::from(vec![
            Span::styled("Window net ", Style::default().fg(theme.dim)),
            styled_amount(net, theme),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_top_spending(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Top Spending", theme);
    let inner = card.inner(area);

    let breakdown = category_breakdown(&state.data.transactions);
    if breakdown.is_empty() {
        card.render_with(
            frame,
            area,
            Paragraph::new(Span::styled(
                "No spending yet",
                Style::default().fg(theme.dim),
            )),
        );
        return;
    }

    let lines: Vec<Line> = breakdown
        .iter()
        .take(inner.height as usize)
        .map(|(category, amount)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", truncate(category, 13)),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:>10}", amount.to_string()),
                    Style::default().fg(theme.negative),
                ),
            ])
        })
        .collect();

    card.render_with(frame, area, Paragraph::new(lines));
}

fn render_accounts(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Your Accounts", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if state.data.accounts.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("No accounts linked. Press ", Style::default().fg(theme.dim)),
                Span::styled("l", Style::default().fg(theme.accent)),
                Span::styled(" to link a bank account.", Style::default().fg(theme.dim)),
            ])),
            inner,
        );
        return;
    }

    let (from, to) = month_to_date(state.today);

    let items: Vec<ListItem> = state
        .data
        .accounts
        .iter()
        .take(inner.height as usize)
        .map(|account| {
            let summary = account_summary(&account.id, &state.data.transactions, from, to);
            let balance = Amount::parse_or_zero(&account.balance);

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<18}", truncate(&account.name, 17)),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{} ••••{}  ", account.institution, account.mask),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(
                    format!("{:<11}", account.kind.label()),
                    Style::default().fg(theme.dim),
                ),
                Span::styled(
                    format!("{:>12}", balance.to_string()),
                    Style::default().fg(theme.text),
                ),
                Span::raw("   "),
                styled_amount(summary.income, theme),
                Span::raw(" / "),
                styled_amount(-summary.expenses, theme),
                Span::styled(" mtd", Style::default().fg(theme.dim)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// Household rollup, shown once a partner exists.
fn render_shared_finances(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Shared Finances", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if state.data.partners.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Invite a partner to share budgets and goals.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let combined = combined_household(
        &state.data.transactions,
        &state.data.budgets,
        &state.data.goals,
    );

    let budget_ratio = if combined.budget_limit.cents() > 0 {
        combined.budget_spent.cents() as f64 / combined.budget_limit.cents() as f64
    } else {
        0.0
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Net         ", Style::default().fg(theme.dim)),
            styled_amount(combined.net(), theme),
        ]),
        Line::from(vec![
            Span::styled("Budgets     ", Style::default().fg(theme.dim)),
            Span::styled(
                format!("{} of {} ", combined.budget_spent, combined.budget_limit),
                Style::default().fg(theme.text),
            ),
            usage_bar(budget_ratio, 16, theme),
        ]),
        Line::from(vec![
            Span::styled("Goals       ", Style::default().fg(theme.dim)),
            Span::styled(
                format!(
                    "{} of {} ({:.1}%)",
                    combined.goal_current,
                    combined.goal_target,
                    combined.goal_percent()
                ),
                Style::default().fg(theme.text),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
