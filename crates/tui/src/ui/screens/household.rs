use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use api_types::partner::PartnerStatus;
use rollup::{combined_household, month_to_date, window_summary};

use crate::{
    app::AppState,
    ui::{
        components::money::{styled_amount, usage_bar},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let mut constraints = vec![Constraint::Length(4)];
    if state.household.invite.active {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(5));
    constraints.push(Constraint::Length(6));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    render_month_summary(frame, layout[next], state, &theme);
    next += 1;

    if state.household.invite.active {
        render_invite_form(frame, layout[next], state, &theme);
        next += 1;
    }

    render_partner_list(frame, layout[next], state, &theme);
    next += 1;

    render_combined(frame, layout[next], state, &theme);
}

fn render_month_summary(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            " Household ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (from, to) = month_to_date(state.today);
    let summary = window_summary(&state.data.transactions, from, to);

    let lines = vec![
        Line::from(vec![
            Span::styled("This month  ", Style::default().fg(theme.dim)),
            styled_amount(summary.income, theme),
            Span::styled(" in / ", Style::default().fg(theme.dim)),
            styled_amount(-summary.expenses, theme),
            Span::styled(" out / ", Style::default().fg(theme.dim)),
            styled_amount(summary.net(), theme),
            Span::styled(" net", Style::default().fg(theme.dim)),
        ]),
        Line::from(vec![
            Span::styled("i", Style::default().fg(theme.accent)),
            Span::styled(" invite  ", Style::default().fg(theme.dim)),
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::styled(" accept  ", Style::default().fg(theme.dim)),
            Span::styled("x", Style::default().fg(theme.accent)),
            Span::styled(" remove", Style::default().fg(theme.dim)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_invite_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(
            " Invite Partner ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let invite = &state.household.invite;
    let mut lines = vec![Line::from(vec![
        Span::styled("Email  ", Style::default().fg(theme.dim)),
        Span::styled(
            format!("{}│", invite.email),
            Style::default().fg(theme.accent),
        ),
    ])];
    match &invite.error {
        Some(err) => lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(theme.error),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Enter send · Esc cancel",
            Style::default().fg(theme.dim),
        ))),
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_partner_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    if state.data.partners.is_empty() {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No partners yet. Press i to invite one.",
                Style::default().fg(theme.dim),
            ))
            .alignment(ratatui::layout::Alignment::Center),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .data
        .partners
        .iter()
        .map(|partner| {
            let status_color = match partner.status {
                PartnerStatus::Invited => theme.warning,
                PartnerStatus::Accepted => theme.accent,
                PartnerStatus::Active => theme.positive,
            };
            let since = partner
                .accepted_at
                .as_deref()
                .unwrap_or(partner.invited_at.as_str());
            let since = since.get(..10).unwrap_or(since).to_string();

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<30}", partner.email),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:<10}", partner.status.label()),
                    Style::default().fg(status_color),
                ),
                Span::styled(since, Style::default().fg(theme.dim)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.household.selected));

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

fn render_combined(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card_block = Block::default()
        .title(Span::styled(
            " Combined Finances ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = card_block.inner(area);
    frame.render_widget(card_block, area);

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
    let budget_color = if combined.budgets_over() {
        theme.negative
    } else {
        theme.text
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Income      ", Style::default().fg(theme.dim)),
            styled_amount(combined.income, theme),
            Span::styled("   Expenses ", Style::default().fg(theme.dim)),
            styled_amount(-combined.expenses, theme),
            Span::styled("   Net ", Style::default().fg(theme.dim)),
            styled_amount(combined.net(), theme),
        ]),
        Line::from(vec![
            Span::styled("Budgets     ", Style::default().fg(theme.dim)),
            Span::styled(
                format!("{} of {} ", combined.budget_spent, combined.budget_limit),
                Style::default().fg(budget_color),
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
