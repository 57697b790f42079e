//! Activity bar: the icon strip on the far left

use crate::shell::sidebar::{SidebarState, SidebarView};
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Width of the strip in cells
pub const ACTIVITY_BAR_WIDTH: u16 = 3;

/// Something clickable in the activity bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityItem {
    View(SidebarView),
    Terminal,
    GitHub,
    Settings,
}

impl ActivityItem {
    fn glyph(self) -> &'static str {
        match self {
            ActivityItem::View(SidebarView::Explorer) => "≡",
            ActivityItem::View(SidebarView::Search) => "⌕",
            ActivityItem::View(SidebarView::Extensions) => "⊞",
            ActivityItem::Terminal => ">_",
            ActivityItem::GitHub => "⎇",
            ActivityItem::Settings => "⚙",
        }
    }
}

/// Icons stacked from the top, two rows apart
const TOP_ITEMS: [ActivityItem; 4] = [
    ActivityItem::View(SidebarView::Explorer),
    ActivityItem::View(SidebarView::Search),
    ActivityItem::Terminal,
    ActivityItem::View(SidebarView::Extensions),
];

/// Icon positions: views and the terminal toggle from the top, github and
/// settings pinned to the bottom
pub fn activity_hitboxes(area: Rect) -> Vec<(ActivityItem, Rect)> {
    let mut boxes = Vec::with_capacity(TOP_ITEMS.len() + 2);
    let row = |y: u16| Rect::new(area.x, y, area.width, 1);

    for (i, item) in TOP_ITEMS.into_iter().enumerate() {
        let y = area.y + 1 + i as u16 * 2;
        if y < area.bottom() {
            boxes.push((item, row(y)));
        }
    }
    if area.height >= 10 {
        boxes.push((ActivityItem::GitHub, row(area.bottom() - 4)));
        boxes.push((ActivityItem::Settings, row(area.bottom() - 2)));
    }
    boxes
}

pub fn render_activity_bar(
    frame: &mut Frame,
    area: Rect,
    sidebar: &SidebarState,
    terminal_open: bool,
    theme: &UiTheme,
) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.activity_bar)),
        area,
    );

    for (item, rect) in activity_hitboxes(area) {
        let active = match item {
            ActivityItem::View(view) => sidebar.open && sidebar.view == view,
            ActivityItem::Terminal => terminal_open,
            _ => false,
        };
        let (marker, style) = if active {
            (
                Span::styled("▎", Style::default().fg(theme.badge)),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )
        } else {
            (Span::raw(" "), Style::default().fg(theme.text_muted))
        };
        let line = Line::from(vec![marker, Span::styled(item.glyph(), style)]);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_stack_from_top() {
        let boxes = activity_hitboxes(Rect::new(0, 0, 3, 30));
        assert_eq!(boxes.len(), 6);
        assert_eq!(
            boxes[0],
            (ActivityItem::View(SidebarView::Explorer), Rect::new(0, 1, 3, 1))
        );
        assert_eq!(boxes[2], (ActivityItem::Terminal, Rect::new(0, 5, 3, 1)));
        assert_eq!(boxes[3].0, ActivityItem::View(SidebarView::Extensions));
        assert_eq!(boxes[5], (ActivityItem::Settings, Rect::new(0, 28, 3, 1)));
    }

    #[test]
    fn test_short_bar_drops_bottom_icons() {
        let boxes = activity_hitboxes(Rect::new(0, 0, 3, 6));
        assert_eq!(boxes.len(), 3);
        assert!(!boxes
            .iter()
            .any(|(item, _)| matches!(item, ActivityItem::GitHub | ActivityItem::Settings)));
    }
}
