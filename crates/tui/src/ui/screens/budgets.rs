use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use rollup::{budget_transactions, budget_usage, month_key};

use crate::{
    app::{AppState, BudgetForm},
    ui::{components::money::usage_bar, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let mut constraints = vec![Constraint::Length(3)];
    if state.budgets.form.active {
        constraints.push(Constraint::Length(6));
    }
    constraints.push(Constraint::Min(0));
    if state.budgets.show_detail {
        constraints.push(Constraint::Length(8));
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    render_month_header(frame, layout[next], state, &theme);
    next += 1;

    if state.budgets.form.active {
        render_form(frame, layout[next], &state.budgets.form, &theme);
        next += 1;
    }

    render_list(frame, layout[next], state, &theme);
    next += 1;

    if state.budgets.show_detail {
        render_detail(frame, layout[next], state, &theme);
    }
}

fn render_month_header(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(" Budgets ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(
            month_key(state.budgets.month),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("p", Style::default().fg(theme.accent)),
        Span::styled(" prev  ", Style::default().fg(theme.dim)),
        Span::styled("n", Style::default().fg(theme.accent)),
        Span::styled(" next  ", Style::default().fg(theme.dim)),
        Span::styled("a", Style::default().fg(theme.accent)),
        Span::styled(" add budget", Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &BudgetForm, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            " New Budget ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [("Category", &form.category), ("Limit", &form.limit)];
    let mut lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let focused = form.focus == i;
            let cursor = if focused { "│" } else { "" };
            let style = if focused {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text_muted)
            };
            Line::from(vec![
                Span::styled(format!("{label:<10} "), Style::default().fg(theme.dim)),
                Span::styled(format!("{value}{cursor}"), style),
            ])
        })
        .collect();

    match &form.error {
        Some(err) => lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(theme.error),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Tab next · Enter create · Esc cancel",
            Style::default().fg(theme.dim),
        ))),
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    if state.data.budgets.is_empty() {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No budgets for this month",
                Style::default().fg(theme.dim),
            ))
            .alignment(ratatui::layout::Alignment::Center),
            inner,
        );
        return;
    }

    let bar_width = 20;
    let items: Vec<ListItem> = state
        .data
        .budgets
        .iter()
        .map(|budget| {
            let usage = budget_usage(budget, &state.data.transactions);
            let status_color = if usage.is_over {
                theme.negative
            } else {
                theme.text_muted
            };

            let mut spans = vec![
                Span::styled(
                    format!("{:<16}", budget.category),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:>10} / {:<10}", usage.spent.to_string(), usage.limit.to_string()),
                    Style::default().fg(status_color),
                ),
                Span::raw(" "),
                usage_bar(usage.fill_ratio(), bar_width, theme),
                Span::styled(
                    format!(" {:>5.1}%", usage.percent),
                    Style::default().fg(theme.dim),
                ),
            ];
            if usage.is_over {
                spans.push(Span::styled(
                    format!("  over by {}", usage.over_by),
                    Style::default().fg(theme.negative),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.budgets.selected));

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

/// The expense rows behind the selected budget's spent figure.
fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let Some(budget) = state.data.budgets.get(state.budgets.selected) else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} — {} ", budget.category, budget.month),
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let matching = budget_transactions(budget, &state.data.transactions);
    if matching.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No matching expenses this month",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = matching
        .iter()
        .take(inner.height as usize)
        .map(|txn| {
            let date = txn.date.get(..10).unwrap_or(&txn.date).to_string();
            let merchant = txn.merchant.clone().unwrap_or_else(|| "—".to_string());
            let amount = rollup::Amount::parse_or_zero(&txn.amount);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<12}"), Style::default().fg(theme.dim)),
                Span::styled(format!("{merchant:<24}"), Style::default().fg(theme.text)),
                Span::styled(amount.to_string(), Style::default().fg(theme.negative)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}
