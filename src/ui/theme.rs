use crate::theme::{ColorRole, Palette};
use ratatui::style::Color;

/// Terminal colours derived from the active palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTheme {
    pub bg: Color,
    pub sidebar: Color,
    pub activity_bar: Color,
    pub tab_border: Color,
    pub tab_inactive: Color,
    pub hover: Color,
    pub selection: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub status_bar: Color,
    pub badge: Color,
    pub blue: Color,
    pub green: Color,
    pub orange: Color,
    pub purple: Color,
    pub yellow: Color,
    pub error: Color, // Red; no palette carries one
    pub cyan: Color,  // Prompt lines
}

fn rgb(palette: &Palette, role: ColorRole) -> Color {
    let (r, g, b) = palette.rgb(role);
    Color::Rgb(r, g, b)
}

impl UiTheme {
    pub fn from_palette(palette: &Palette) -> Self {
        UiTheme {
            bg: rgb(palette, ColorRole::Bg),
            sidebar: rgb(palette, ColorRole::Sidebar),
            activity_bar: rgb(palette, ColorRole::ActivityBar),
            tab_border: rgb(palette, ColorRole::TabBorder),
            tab_inactive: rgb(palette, ColorRole::TabInactive),
            hover: rgb(palette, ColorRole::Hover),
            selection: rgb(palette, ColorRole::Selection),
            border: rgb(palette, ColorRole::Border),
            text: rgb(palette, ColorRole::Text),
            text_muted: rgb(palette, ColorRole::TextMuted),
            status_bar: rgb(palette, ColorRole::StatusBar),
            badge: rgb(palette, ColorRole::ActivityBarBadge),
            blue: rgb(palette, ColorRole::SyntaxBlue),
            green: rgb(palette, ColorRole::SyntaxGreen),
            orange: rgb(palette, ColorRole::SyntaxOrange),
            purple: rgb(palette, ColorRole::SyntaxPurple),
            yellow: rgb(palette, ColorRole::SyntaxYellow),
            error: Color::Rgb(244, 71, 71),
            cyan: Color::Rgb(78, 201, 176),
        }
    }
}
