//! Sidebar pane: explorer tree, file search and the extensions list

use crate::content::EXTENSIONS;
use crate::shell::sidebar::SidebarView;
use crate::ui::theme::UiTheme;
use crate::workspace::explorer::{Explorer, ExplorerRow};
use crate::workspace::VirtualFile;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Rows above the result list in the search view (query box, hit count)
const SEARCH_HEADER_ROWS: u16 = 2;

/// Screen rows taken by one extension entry
const EXTENSION_ROWS: u16 = 2;

/// Render data for the sidebar
pub struct SidebarRenderData<'a> {
    pub view: SidebarView,
    pub explorer: &'a Explorer,
    pub active_file: Option<&'a str>,
    pub query: &'a str,
    pub results: &'a [&'static VirtualFile],
    pub cursor: usize,
    pub is_focused: bool,
}

/// Number of selectable items the view shows
pub fn item_count(view: SidebarView, explorer: &Explorer, results: &[&VirtualFile]) -> usize {
    match view {
        SidebarView::Explorer => explorer.rows().len(),
        SidebarView::Search => results.len(),
        SidebarView::Extensions => EXTENSIONS.len(),
    }
}

fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::TOP | Borders::RIGHT)
        .padding(Padding::left(1))
}

/// Where sidebar content lands inside `area`
pub fn inner_area(area: Rect) -> Rect {
    frame_block().inner(area)
}

fn sidebar_block(view: SidebarView, theme: &UiTheme, is_focused: bool) -> Block<'static> {
    let border = if is_focused {
        Style::default().fg(theme.badge)
    } else {
        Style::default().fg(theme.border)
    };
    frame_block()
        .title(Span::styled(
            format!(" {} ", view.title()),
            Style::default().fg(theme.text_muted).add_modifier(Modifier::BOLD),
        ))
        .border_style(border)
        .style(Style::default().bg(theme.sidebar))
}

/// Screen row of the cursor within the scrolled content
fn cursor_row(view: SidebarView, cursor: usize) -> usize {
    match view {
        SidebarView::Explorer => cursor,
        SidebarView::Search => cursor + SEARCH_HEADER_ROWS as usize,
        SidebarView::Extensions => cursor * EXTENSION_ROWS as usize + 1,
    }
}

/// Rows scrolled off the top so the cursor stays visible
pub fn scroll_for(view: SidebarView, cursor: usize, inner: Rect) -> u16 {
    let visible = inner.height.max(1) as usize;
    cursor_row(view, cursor).saturating_sub(visible - 1) as u16
}

/// Item under screen row `y`, given the sidebar's inner area and scroll
pub fn item_at(view: SidebarView, inner: Rect, y: u16, scroll: u16, count: usize) -> Option<usize> {
    if y < inner.y || y >= inner.bottom() {
        return None;
    }
    let offset = y - inner.y + scroll;
    let index = match view {
        SidebarView::Explorer => offset as usize,
        SidebarView::Search => offset.checked_sub(SEARCH_HEADER_ROWS)? as usize,
        SidebarView::Extensions => (offset / EXTENSION_ROWS) as usize,
    };
    (index < count).then_some(index)
}

fn cursor_style(selected: bool, data: &SidebarRenderData, theme: &UiTheme) -> Style {
    if selected && data.is_focused {
        Style::default().bg(theme.selection).fg(theme.text)
    } else if selected {
        Style::default().bg(theme.hover).fg(theme.text)
    } else {
        Style::default().fg(theme.text)
    }
}

fn explorer_lines<'a>(data: &SidebarRenderData, theme: &UiTheme) -> Vec<Line<'a>> {
    data.explorer
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = "  ".repeat(row.depth());
            let base = cursor_style(i == data.cursor, data, theme);
            match row {
                ExplorerRow::Folder {
                    folder, expanded, ..
                } => {
                    let arrow = if expanded { "▾ " } else { "▸ " };
                    Line::from(vec![
                        Span::styled(indent, base),
                        Span::styled(arrow, base.fg(theme.text_muted)),
                        Span::styled(folder.label(), base.add_modifier(Modifier::BOLD)),
                    ])
                }
                ExplorerRow::File { file, .. } => {
                    let name_style = if data.active_file == Some(file.id) {
                        base.fg(theme.blue)
                    } else {
                        base
                    };
                    Line::from(vec![
                        Span::styled(indent, base),
                        Span::styled("  ", base),
                        Span::styled(file.name, name_style),
                    ])
                }
            }
        })
        .collect()
}

fn search_lines<'a>(data: &SidebarRenderData, theme: &UiTheme) -> Vec<Line<'a>> {
    let caret = if data.is_focused { "▏" } else { "" };
    let query = if data.query.is_empty() && !data.is_focused {
        Span::styled("Search files", Style::default().fg(theme.text_muted))
    } else {
        Span::styled(format!("{}{caret}", data.query), Style::default().fg(theme.text))
    };
    let mut lines = vec![
        Line::from(vec![Span::styled("⌕ ", Style::default().fg(theme.text_muted)), query]),
        Line::from(Span::styled(
            if data.query.is_empty() {
                String::new()
            } else {
                format!("{} result(s)", data.results.len())
            },
            Style::default().fg(theme.text_muted),
        )),
    ];
    lines.extend(data.results.iter().enumerate().map(|(i, file)| {
        let base = cursor_style(i == data.cursor, data, theme);
        Line::from(vec![
            Span::styled(file.name, base),
            Span::styled(format!("  {}", file.path), base.fg(theme.text_muted)),
        ])
    }));
    lines
}

fn extension_lines<'a>(data: &SidebarRenderData, theme: &UiTheme) -> Vec<Line<'a>> {
    let mut lines = Vec::with_capacity(EXTENSIONS.len() * EXTENSION_ROWS as usize);
    for (i, ext) in EXTENSIONS.iter().enumerate() {
        let base = cursor_style(i == data.cursor, data, theme);
        let badge = if ext.installed {
            Span::styled(" ✓", base.fg(theme.green))
        } else {
            Span::styled(" Install", base.fg(theme.badge))
        };
        lines.push(Line::from(vec![
            Span::styled(ext.name, base.add_modifier(Modifier::BOLD)),
            badge,
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "{} · {} · ★ {:.1} · {}",
                ext.publisher, ext.downloads, ext.rating, ext.description
            ),
            Style::default().fg(theme.text_muted),
        )));
    }
    lines
}

/// Render the sidebar. Content scrolls so the cursor stays visible.
pub fn render_sidebar_pane(
    frame: &mut Frame,
    area: Rect,
    data: SidebarRenderData,
    theme: &UiTheme,
) {
    let block = sidebar_block(data.view, theme, data.is_focused);
    let inner = inner_area(area);

    let lines = match data.view {
        SidebarView::Explorer => explorer_lines(&data, theme),
        SidebarView::Search => search_lines(&data, theme),
        SidebarView::Extensions => extension_lines(&data, theme),
    };
    let scroll = scroll_for(data.view, data.cursor, inner);

    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_at_accounts_for_headers() {
        let inner = Rect::new(4, 2, 20, 20);
        assert_eq!(item_at(SidebarView::Explorer, inner, 2, 0, 8), Some(0));
        assert_eq!(item_at(SidebarView::Explorer, inner, 9, 0, 8), Some(7));
        assert_eq!(item_at(SidebarView::Explorer, inner, 10, 0, 8), None);

        assert_eq!(item_at(SidebarView::Search, inner, 3, 0, 2), None);
        assert_eq!(item_at(SidebarView::Search, inner, 4, 0, 2), Some(0));

        assert_eq!(item_at(SidebarView::Extensions, inner, 5, 0, 14), Some(1));
        assert_eq!(item_at(SidebarView::Extensions, inner, 1, 0, 14), None);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let inner = Rect::new(0, 0, 20, 5);
        assert_eq!(scroll_for(SidebarView::Explorer, 3, inner), 0);
        assert_eq!(scroll_for(SidebarView::Extensions, 13, inner), 23);

        let y = inner.y + 4;
        assert_eq!(item_at(SidebarView::Extensions, inner, y, 23, 14), Some(13));
    }
}
