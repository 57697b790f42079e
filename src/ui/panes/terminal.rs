//! Terminal panel rendering

use crate::terminal::{TerminalSession, PROMPT};
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

const CLEAR_LABEL: &str = "[clear]";
const CLOSE_LABEL: &str = "[×]";

/// Header controls on the panel's top row, right-aligned: clear, then close
pub fn header_controls(area: Rect) -> (Rect, Rect) {
    let close_w = CLOSE_LABEL.chars().count() as u16;
    let clear_w = CLEAR_LABEL.chars().count() as u16;
    let close_x = area.right().saturating_sub(close_w + 1).max(area.x);
    let clear_x = close_x.saturating_sub(clear_w + 1).max(area.x);
    (
        Rect::new(clear_x, area.y, clear_w, 1),
        Rect::new(close_x, area.y, close_w, 1),
    )
}

/// Colour for one transcript line, keyed off how the line starts
fn line_style(line: &str, theme: &UiTheme) -> Style {
    if line.starts_with(PROMPT) {
        Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD)
    } else if line.starts_with('✓') {
        Style::default().fg(theme.blue)
    } else if line.contains("command not found") || line.contains("permission denied") {
        Style::default().fg(theme.error)
    } else if line.starts_with('💡') || line.starts_with('📖') {
        Style::default().fg(theme.yellow)
    } else if line.starts_with("[sudo]") {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.text_muted)
    }
}

/// Render the terminal panel: transcript followed by the live input line.
///
/// `scroll_offset` is clamped in place; `usize::MAX` pins the view to the
/// bottom.
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    session: &TerminalSession,
    theme: &UiTheme,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default().fg(theme.badge).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" TERMINAL ", Style::default().fg(theme.text)),
            Span::styled(" 1: bash ", Style::default().fg(theme.text_muted)),
        ]))
        .borders(Borders::TOP)
        .border_style(border_style)
        .style(Style::default().bg(theme.bg))
        .padding(Padding::new(1, 1, 0, 0));

    let mut all_items: Vec<ListItem> = session
        .output()
        .iter()
        .map(|line| ListItem::new(line.as_str()).style(line_style(line, theme)))
        .collect();

    let cursor = if is_focused { "▏" } else { "" };
    let (before, after) = session.input_parts();
    let input_style = Style::default().fg(theme.text);
    all_items.push(ListItem::new(Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default().fg(theme.cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(before.to_string(), input_style),
        Span::styled(cursor, input_style),
        Span::styled(after.to_string(), input_style),
    ])));

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(1).max(1) as usize; // top border

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);

    let (clear, close) = header_controls(area);
    let control = Style::default().fg(theme.text_muted).bg(theme.bg);
    frame.render_widget(Paragraph::new(CLEAR_LABEL).style(control), clear);
    frame.render_widget(Paragraph::new(CLOSE_LABEL).style(control), close);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_controls_sit_at_the_right() {
        let (clear, close) = header_controls(Rect::new(31, 23, 89, 16));
        assert_eq!(close, Rect::new(116, 23, 3, 1));
        assert_eq!(clear, Rect::new(108, 23, 7, 1));
    }

    #[test]
    fn test_line_classification() {
        let theme = UiTheme::from_palette(crate::theme::ThemeId::default().palette());
        assert_eq!(line_style("bash: x: command not found", &theme).fg, Some(theme.error));
        assert_eq!(line_style("✓ Opening about.html...", &theme).fg, Some(theme.blue));
        assert_eq!(line_style(&format!("{PROMPT} ls"), &theme).fg, Some(theme.cyan));
        assert_eq!(line_style("home.jsx", &theme).fg, Some(theme.text_muted));
    }
}
