use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    app::{AppState, LinkStep},
    ui::theme::Theme,
};

/// The bank-link handshake. The real aggregator widget is out of scope;
/// the confirm step stands in for it, and status/errors render inline
/// rather than as a toast.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let block = Block::default()
        .title(Span::styled(
            " Link Bank Account ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Connect a bank securely through the aggregator to import accounts and transactions.",
            Style::default().fg(theme.text_muted),
        )),
        rows[0],
    );

    let steps = [
        "1. Request a link token",
        "2. Open the aggregator widget (simulated here)",
        "3. Exchange the public token",
        "4. Sync accounts and transactions",
    ];
    let step_lines: Vec<Line> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let done = match &state.link.step {
                LinkStep::Idle => false,
                LinkStep::Confirm => i == 0,
                LinkStep::Done => true,
                LinkStep::Failed(_) => i == 0 && state.link.token.is_some(),
            };
            let marker = if done { "✔" } else { "·" };
            let style = if done {
                Style::default().fg(theme.positive)
            } else {
                Style::default().fg(theme.dim)
            };
            Line::from(Span::styled(format!("{marker} {step}"), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(step_lines), rows[1]);

    let status = match &state.link.step {
        LinkStep::Idle => Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.dim)),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::styled(" to start linking.", Style::default().fg(theme.dim)),
        ]),
        LinkStep::Confirm => Line::from(vec![
            Span::styled(
                "The aggregator widget would open here. ",
                Style::default().fg(theme.text),
            ),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::styled(
                " to simulate a connection, ",
                Style::default().fg(theme.dim),
            ),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" to cancel.", Style::default().fg(theme.dim)),
        ]),
        LinkStep::Done => Line::from(vec![
            Span::styled(
                "Bank linked; accounts and transactions reloaded. ",
                Style::default().fg(theme.positive),
            ),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::styled(" to link another.", Style::default().fg(theme.dim)),
        ]),
        LinkStep::Failed(message) => Line::from(vec![
            Span::styled(message.clone(), Style::default().fg(theme.error)),
            Span::styled("  Press ", Style::default().fg(theme.dim)),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::styled(" to start over.", Style::default().fg(theme.dim)),
        ]),
    };

    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Left),
        rows[2],
    );
}
