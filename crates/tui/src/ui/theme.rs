use ratatui::style::Color;

/// Warm, dark palette. Income/positive values are green, spending red,
/// budget warnings amber.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(16, 12, 8),
            surface: Color::Rgb(26, 21, 15),
            text: Color::Rgb(228, 222, 212),
            text_muted: Color::Rgb(164, 154, 140),
            dim: Color::Rgb(120, 112, 102),
            border: Color::Rgb(64, 54, 42),
            border_focused: Color::Rgb(214, 150, 64),
            accent: Color::Rgb(214, 150, 64),
            positive: Color::Rgb(104, 178, 106),
            negative: Color::Rgb(208, 92, 80),
            warning: Color::Rgb(222, 178, 76),
            error: Color::Rgb(206, 76, 68),
        }
    }
}
