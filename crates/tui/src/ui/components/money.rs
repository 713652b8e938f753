use ratatui::{
    style::{Modifier, Style},
    text::Span,
};
use rollup::Amount;

use crate::ui::theme::Theme;

/// Styled span for a signed amount: positive green with `+`, negative red,
/// zero neutral.
#[must_use]
pub fn styled_amount(amount: Amount, theme: &Theme) -> Span<'static> {
    let (color, prefix) = if amount.cents() > 0 {
        (theme.positive, "+")
    } else if amount.cents() < 0 {
        (theme.negative, "")
    } else {
        (theme.text, "")
    };

    Span::styled(format!("{prefix}{amount}"), Style::default().fg(color))
}

/// Like [`styled_amount`] but bold, for totals.
#[must_use]
pub fn styled_amount_bold(amount: Amount, theme: &Theme) -> Span<'static> {
    let span = styled_amount(amount, theme);
    let style = span.style.add_modifier(Modifier::BOLD);
    Span::styled(span.content, style)
}

/// Colored fill bar for a usage ratio: green under 70%, amber to 90%, red
/// beyond.
#[must_use]
pub fn usage_bar(ratio: f64, width: usize, theme: &Theme) -> Span<'static> {
    let color = if ratio < 0.7 {
        theme.positive
    } else if ratio < 0.9 {
        theme.warning
    } else {
        theme.negative
    };

    let bar = super::charts::ascii_bar(ratio, width);
    Span::styled(bar, Style::default().fg(color))
}
