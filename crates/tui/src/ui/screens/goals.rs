use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use rollup::goal_progress;

use crate::{
    app::{AppState, GoalForm},
    ui::{components::money::usage_bar, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let mut constraints = vec![Constraint::Length(2)];
    if state.goals.form.active {
        constraints.push(Constraint::Length(7));
    }
    constraints.push(Constraint::Min(0));

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    render_header(frame, layout[next], &theme);
    next += 1;

    if state.goals.form.active {
        render_form(frame, layout[next], &state.goals.form, &theme);
        next += 1;
    }

    render_list(frame, layout[next], state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("Savings Goals", Style::default().fg(theme.text)),
        Span::raw("    "),
        Span::styled("a", Style::default().fg(theme.accent)),
        Span::styled(" add goal", Style::default().fg(theme.dim)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &GoalForm, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(" New Goal ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [
        ("Name", &form.name),
        ("Target", &form.target),
        ("Target date", &form.target_date),
    ];
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
                Span::styled(format!("{label:<12} "), Style::default().fg(theme.dim)),
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
    if state.data.goals.is_empty() {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No goals yet. Press a to create one.",
                Style::default().fg(theme.dim),
            ))
            .alignment(ratatui::layout::Alignment::Center),
            inner,
        );
        return;
    }

    let bar_width = 18;
    let items: Vec<ListItem> = state
        .data
        .goals
        .iter()
        .map(|goal| {
            let progress = goal_progress(goal, state.today);

            // The bar clamps at 100%; the printed percent does not.
            let mut spans = vec![
                Span::styled(format!("{:<18}", goal.name), Style::default().fg(theme.text)),
                Span::styled(
                    format!("{:>10} / {:<10}", progress.current.to_string(), progress.target.to_string()),
                    Style::default().fg(theme.text_muted),
                ),
                Span::raw(" "),
                usage_bar(progress.fill_ratio(), bar_width, theme),
                Span::styled(
                    format!(" {:>5.1}%", progress.percent),
                    Style::default().fg(theme.dim),
                ),
            ];

            let deadline = if progress.days_remaining > 0 {
                Span::styled(
                    format!("  {} days left", progress.days_remaining),
                    Style::default().fg(theme.text_muted),
                )
            } else if progress.days_remaining == 0 {
                Span::styled("  due today", Style::default().fg(theme.warning))
            } else {
                Span::styled(
                    format!("  {} days overdue", -progress.days_remaining),
                    Style::default().fg(theme.negative),
                )
            };
            spans.push(deadline);

            if let Some(pace) = progress.monthly_needed {
                spans.push(Span::styled(
                    format!("  {pace}/month needed"),
                    Style::default().fg(theme.positive),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.goals.selected));

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
