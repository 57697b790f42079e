//! Status bar with editor info and keybindings

use crate::ui::theme::UiTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the status bar shows
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub language: Option<&'a str>,
    pub theme_name: &'a str,
    pub terminal_open: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData, theme: &UiTheme) {
    let bar = Style::default().bg(theme.status_bar).fg(Color::White);

    let key_style = Style::default().bg(theme.badge).fg(Color::Black);
    let right = right_line(&data, bar, key_style);
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right.width() as u16)])
        .split(area);

    let left_spans = vec![
        Span::styled(" ⎇ main ", bar.add_modifier(Modifier::BOLD)),
        Span::styled("│", bar),
        Span::styled(format!(" {} ", data.message), bar),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar)
            .alignment(Alignment::Left),
        layout[0],
    );

    frame.render_widget(
        Paragraph::new(right)
            .style(bar)
            .alignment(Alignment::Right),
        layout[1],
    );
}

/// Clickable `^T Terminal` segment, when the right side fits in `area`
pub fn terminal_button(area: Rect, data: &StatusRenderData) -> Option<Rect> {
    let right = right_line(data, Style::default(), Style::default());
    let width = right.width() as u16;
    if width > area.width {
        return None;
    }
    let segment: u16 = right.spans[..2].iter().map(|s| s.width() as u16).sum();
    Some(Rect::new(area.right() - width, area.y, segment, 1))
}

fn right_line<'a>(data: &StatusRenderData, bar: Style, key_style: Style) -> Line<'a> {
    let terminal_style = if data.terminal_open {
        bar.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        bar
    };

    // The terminal toggle leads; terminal_button relies on that
    let mut right_spans = vec![
        Span::styled(" ^T ", key_style),
        Span::styled(" Terminal ", terminal_style),
        Span::styled(" ^K ", key_style),
        Span::styled(format!(" {} ", data.theme_name), bar),
        Span::styled("│", bar),
        Span::styled(" Ln 12, Col 4 ", bar),
        Span::styled(" Spaces: 2 ", bar),
        Span::styled(" UTF-8 ", bar),
    ];
    if let Some(language) = data.language {
        right_spans.push(Span::styled(format!(" {language} "), bar));
    }
    Line::from(right_spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(language: Option<&'static str>) -> StatusRenderData<'static> {
        StatusRenderData {
            message: "Ready",
            language,
            theme_name: "Dark+ (default)",
            terminal_open: false,
        }
    }

    #[test]
    fn test_terminal_button_leads_right_side() {
        // 4 + 10 + 4 + 17 + 1 + 14 + 11 + 7 + 16 cells on the right
        let button = terminal_button(Rect::new(0, 39, 120, 1), &data(Some("JavaScript JSX")));
        assert_eq!(button, Some(Rect::new(36, 39, 14, 1)));
    }

    #[test]
    fn test_terminal_button_hidden_when_clipped() {
        assert_eq!(terminal_button(Rect::new(0, 0, 40, 1), &data(None)), None);
    }
}
