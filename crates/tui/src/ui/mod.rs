pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.section, &theme);

    let content = layout[2];
    match state.section {
        Section::Dashboard => screens::dashboard::render(frame, content, state),
        Section::Transactions => screens::transactions::render(frame, content, state),
        Section::Budgets => screens::budgets::render(frame, content, state),
        Section::Goals => screens::goals::render(frame, content, state),
        Section::Household => screens::household::render(frame, content, state),
        Section::Link => screens::link::render(frame, content, state),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let user = state
        .session
        .user
        .as_ref()
        .map(|u| u.email.as_str())
        .unwrap_or("not signed in");
    let household = state
        .session
        .user
        .as_ref()
        .map(|u| u.household_id.as_str())
        .unwrap_or("-");
    let refresh = state
        .last_refresh
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("User", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {user}  ")),
        Span::styled("Household", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {household}  ")),
        Span::styled("Backend", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled("Refresh", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {refresh}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    let context_hints = get_context_hints(state, theme);
    if !context_hints.is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.extend(context_hints);
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("r", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" refresh"));
    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("q", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Context-specific keyboard hints for the current section.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    let hint = |key: &'static str, action: &'static str| {
        [
            Span::styled(key, Style::default().fg(theme.accent)),
            Span::raw(format!(" {action}  ")),
        ]
    };

    match state.section {
        Section::Dashboard => Vec::new(),
        Section::Transactions => {
            if state.transactions.filters.active || state.transactions.category_edit.is_some() {
                [hint("Tab", "next"), hint("Enter", "apply"), hint("Esc", "cancel")]
                    .concat()
            } else {
                [
                    hint("/", "filters"),
                    hint("e", "edit category"),
                    hint("c", "clear"),
                    hint("↑↓", "select"),
                ]
                .concat()
            }
        }
        Section::Budgets => {
            if state.budgets.form.active {
                [hint("Tab", "next"), hint("Enter", "create"), hint("Esc", "cancel")]
                    .concat()
            } else {
                [
                    hint("a", "add"),
                    hint("p", "prev month"),
                    hint("n", "next month"),
                    hint("Enter", "detail"),
                ]
                .concat()
            }
        }
        Section::Goals => {
            if state.goals.form.active {
                [hint("Tab", "next"), hint("Enter", "create"), hint("Esc", "cancel")]
                    .concat()
            } else {
                [hint("a", "add"), hint("↑↓", "select")].concat()
            }
        }
        Section::Household => {
            if state.household.invite.active {
                [hint("Enter", "send"), hint("Esc", "cancel")].concat()
            } else {
                [
                    hint("i", "invite"),
                    hint("a", "accept"),
                    hint("x", "remove"),
                    hint("↑↓", "select"),
                ]
                .concat()
            }
        }
        Section::Link => [hint("Enter", "continue"), hint("Esc", "reset")].concat(),
    }
}
