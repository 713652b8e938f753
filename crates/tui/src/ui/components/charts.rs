use ratatui::symbols;
use rollup::TrendPoint;

/// Simple ASCII fill bar, `████████░░░░` for the given ratio in `[0, 1]`.
#[must_use]
pub fn ascii_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Mini bar chart as a string, `▁▂▃▅▇…`, one cell per value.
#[must_use]
pub fn mini_bar_chart(values: &[u64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max = *values.iter().max().unwrap_or(&1);
    if max == 0 {
        return " ".repeat(values.len());
    }

    let bars = [
        symbols::bar::ONE_EIGHTH,
        symbols::bar::ONE_QUARTER,
        symbols::bar::THREE_EIGHTHS,
        symbols::bar::HALF,
        symbols::bar::FIVE_EIGHTHS,
        symbols::bar::THREE_QUARTERS,
        symbols::bar::SEVEN_EIGHTHS,
        symbols::bar::FULL,
    ];

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                " "
            } else {
                let index = ((v as f64 / max as f64) * 7.0) as usize;
                bars[index.min(7)]
            }
        })
        .collect()
}

/// Shifts a cumulative net series to non-negative levels for sparkline
/// rendering. The minimum of the window becomes 0; shape is preserved.
#[must_use]
pub fn trend_levels(series: &[TrendPoint]) -> Vec<u64> {
    let floor = series
        .iter()
        .map(|p| p.net.cents())
        .min()
        .unwrap_or(0)
        .min(0);
    series
        .iter()
        .map(|p| (p.net.cents() - floor) as u64)
        .collect()
}
