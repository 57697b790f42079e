//! Tab bar rendering and hit-testing

use crate::ui::theme::UiTheme;
use crate::workspace::Tab;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CLOSE_GLYPH: &str = "×";

/// Screen regions of one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabHitbox {
    pub index: usize,
    /// Whole tab, close control included
    pub tab: Rect,
    pub close: Rect,
}

/// Lay tabs out left to right as ` name × ` segments. Tabs that do not fit
/// in `area` get no hitbox.
pub fn tab_hitboxes(tabs: &[Tab], area: Rect) -> Vec<TabHitbox> {
    let mut boxes = Vec::with_capacity(tabs.len());
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);

    for (index, tab) in tabs.iter().enumerate() {
        // " " + name + " " + "×" + " "
        let width = tab.name.chars().count() as u16 + 4;
        if x.saturating_add(width) > right {
            break;
        }
        boxes.push(TabHitbox {
            index,
            tab: Rect::new(x, area.y, width, area.height.min(1)),
            close: Rect::new(x + width - 2, area.y, 1, area.height.min(1)),
        });
        x += width + 1; // separator
    }
    boxes
}

/// Render the tab bar
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    tabs: &[Tab],
    active: Option<usize>,
    theme: &UiTheme,
) {
    let visible = tab_hitboxes(tabs, area).len();
    let mut spans = Vec::with_capacity(visible * 3 + 1);

    for (index, tab) in tabs.iter().take(visible).enumerate() {
        let is_active = active == Some(index);
        let style = if is_active {
            Style::default()
                .bg(theme.bg)
                .fg(theme.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(theme.tab_inactive).fg(theme.text_muted)
        };
        spans.push(Span::styled(format!(" {} ", tab.name), style));
        spans.push(Span::styled(format!("{CLOSE_GLYPH} "), style));
        spans.push(Span::styled(" ", Style::default().bg(theme.tab_border)));
    }
    if visible < tabs.len() {
        spans.push(Span::styled(
            format!(" +{} ", tabs.len() - visible),
            Style::default().fg(theme.text_muted),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.tab_border)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitboxes_are_contiguous() {
        let tabs = vec![Tab::new("home.jsx", "home.jsx"), Tab::new("about.html", "about.html")];
        let boxes = tab_hitboxes(&tabs, Rect::new(10, 2, 80, 1));

        assert_eq!(boxes[0].tab, Rect::new(10, 2, 12, 1));
        assert_eq!(boxes[0].close, Rect::new(20, 2, 1, 1));
        assert_eq!(boxes[1].tab.x, 23);
    }

    #[test]
    fn test_overflowing_tabs_are_dropped() {
        let tabs = vec![Tab::new("a", "aaaaaaaa"), Tab::new("b", "bbbbbbbb")];
        let boxes = tab_hitboxes(&tabs, Rect::new(0, 0, 15, 1));
        assert_eq!(boxes.len(), 1);
    }
}
