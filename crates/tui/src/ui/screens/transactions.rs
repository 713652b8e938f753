use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use api_types::transaction::{Transaction, TransactionStatus};
use rollup::Amount;

use crate::{
    app::{AppState, FilterForm},
    ui::{components::money::styled_amount, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let mut constraints = vec![Constraint::Length(3)];
    if state.transactions.filters.active {
        constraints.push(Constraint::Length(9));
    }
    if state.transactions.category_edit.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    render_summary(frame, layout[next], state, &theme);
    next += 1;

    if state.transactions.filters.active {
        render_filters(frame, layout[next], &state.transactions.filters, &theme);
        next += 1;
    }
    if let Some(buffer) = &state.transactions.category_edit {
        render_category_edit(frame, layout[next], buffer, &theme);
        next += 1;
    }

    render_list(frame, layout[next], state, &theme);
}

fn render_summary(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            " Transactions ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match &state.data.summary {
        Some(summary) => {
            let income = Amount::parse_or_zero(&summary.income);
            let expenses = Amount::parse_or_zero(&summary.expenses);
            Line::from(vec![
                Span::styled("Income ", Style::default().fg(theme.dim)),
                Span::styled(income.to_string(), Style::default().fg(theme.positive)),
                Span::raw("   "),
                Span::styled("Expenses ", Style::default().fg(theme.dim)),
                Span::styled(expenses.to_string(), Style::default().fg(theme.negative)),
                Span::raw("   "),
                Span::styled(
                    format!("{} rows", state.data.transactions.len()),
                    Style::default().fg(theme.text_muted),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "No summary yet. Press r to load.",
            Style::default().fg(theme.dim),
        )),
    };

    frame.render_widget(Paragraph::new(line), inner);
}

fn render_filters(frame: &mut Frame<'_>, area: Rect, filters: &FilterForm, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(" Filters ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [
        ("From (YYYY-MM-DD)", &filters.from),
        ("To (YYYY-MM-DD)", &filters.to),
        ("Category", &filters.category),
        ("Search", &filters.q),
        ("Account id", &filters.account_id),
    ];

    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let focused = filters.focus == i;
            let cursor = if focused { "│" } else { "" };
            let style = if focused {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text_muted)
            };
            Line::from(vec![
                Span::styled(format!("{label:<18} "), Style::default().fg(theme.dim)),
                Span::styled(format!("{value}{cursor}"), style),
            ])
        })
        .collect();

    let mut all = lines;
    all.push(Line::from(Span::styled(
        "Tab next · Enter apply · Esc cancel",
        Style::default().fg(theme.dim),
    )));
    frame.render_widget(Paragraph::new(all), inner);
}

fn render_category_edit(frame: &mut Frame<'_>, area: Rect, buffer: &str, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(" Category ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{buffer}│"), Style::default().fg(theme.accent)),
            Span::styled(
                "   Enter save · Esc cancel",
                Style::default().fg(theme.dim),
            ),
        ])),
        inner,
    );
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let items = state
        .data
        .transactions
        .iter()
        .map(|txn| ListItem::new(transaction_line(txn, theme)))
        .collect::<Vec<_>>();

    if items.is_empty() {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No transactions found",
                Style::default().fg(theme.dim),
            ))
            .alignment(ratatui::layout::Alignment::Center),
            inner,
        );
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(state.transactions.selected));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn transaction_line(txn: &Transaction, theme: &Theme) -> Line<'static> {
    let date = txn.date.get(..10).unwrap_or(&txn.date).to_string();
    let merchant = txn.merchant.as_deref().unwrap_or("—").to_string();
    let category = txn
        .category
        .as_deref()
        .map(|c| format!("#{c}"))
        .unwrap_or_default();
    let pending = matches!(txn.status, Some(TransactionStatus::Pending));

    let amount = Amount::parse_or_zero(&txn.amount);
    let signed = if txn.is_income { amount } else { -amount };

    let mut spans = vec![
        Span::styled(format!("{date:<12}"), Style::default().fg(theme.dim)),
        Span::styled(format!("{merchant:<22}"), Style::default().fg(theme.text)),
        styled_amount(signed, theme),
        Span::raw("  "),
        Span::styled(category, Style::default().fg(theme.accent)),
    ];
    if pending {
        spans.push(Span::styled(" pending", Style::default().fg(theme.warning)));
    }

    Line::from(spans)
}
