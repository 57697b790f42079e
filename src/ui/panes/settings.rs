//! Theme picker popup

use crate::shell::settings::SettingsState;
use crate::theme::{ColorRole, ThemeId};
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Roles previewed as swatches next to each theme name
const SWATCH_ROLES: [ColorRole; 5] = [
    ColorRole::Bg,
    ColorRole::SyntaxBlue,
    ColorRole::SyntaxGreen,
    ColorRole::SyntaxOrange,
    ColorRole::SyntaxPurple,
];

/// Centered popup area, clipped to `area`
pub fn popup_area(area: Rect) -> Rect {
    let width = 44.min(area.width);
    let height = (ThemeId::ALL.len() as u16 + 4).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render_settings_popup(
    frame: &mut Frame,
    area: Rect,
    settings: &SettingsState,
    theme: &UiTheme,
) {
    let popup = popup_area(area);

    let block = Block::default()
        .title(" Color Theme ")
        .title_bottom(Line::from(" ↑↓ preview · Enter/Esc close ").right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.badge))
        .style(Style::default().bg(theme.sidebar).fg(theme.text));

    let mut lines = Vec::with_capacity(ThemeId::ALL.len() + 1);
    lines.push(Line::default());
    for (i, id) in ThemeId::ALL.into_iter().enumerate() {
        let palette = id.palette();
        let selected = i == settings.selected;
        let style = if selected {
            Style::default()
                .bg(theme.selection)
                .fg(theme.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };

        let mut spans = vec![
            Span::styled(if selected { " ▸ " } else { "   " }, style),
            Span::styled(format!("{:<22}", palette.name), style),
        ];
        spans.extend(SWATCH_ROLES.iter().map(|role| {
            let (r, g, b) = palette.rgb(*role);
            Span::styled("██", Style::default().fg(Color::Rgb(r, g, b)))
        }));
        lines.push(Line::from(spans));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centered_and_clipped() {
        let popup = popup_area(Rect::new(0, 0, 100, 40));
        assert_eq!(popup, Rect::new(28, 14, 44, 11));

        let small = popup_area(Rect::new(0, 0, 20, 5));
        assert_eq!(small, Rect::new(0, 0, 20, 5));
    }
}
