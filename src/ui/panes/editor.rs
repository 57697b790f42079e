//! Editor pane: the active file's content view
//!
//! The view is laid out as heading, blank line, body lines, blank line and
//! then one row per link. Links are numbered so they can be followed from
//! the keyboard; the selected one is highlighted.

use crate::content::ContentView;
use crate::ui::theme::UiTheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the line-number gutter
const GUTTER_WIDTH: usize = 4;

/// Content row (before scrolling) of the first link
fn first_link_row(view: &ContentView) -> usize {
    view.lines.len() + 3
}

/// Total content rows of a view
pub fn content_height(view: &ContentView) -> usize {
    first_link_row(view) + view.links.len()
}

/// Link under screen row `y`
pub fn link_at(view: &ContentView, inner: Rect, scroll: usize, y: u16) -> Option<usize> {
    if y < inner.y || y >= inner.bottom() {
        return None;
    }
    let row = (y - inner.y) as usize + scroll;
    let index = row.checked_sub(first_link_row(view))?;
    (index < view.links.len()).then_some(index)
}

/// Where editor content lands inside `area`
pub fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::TOP).inner(area)
}

fn editor_block(theme: &UiTheme, is_focused: bool) -> Block<'static> {
    let border = if is_focused {
        Style::default().fg(theme.badge)
    } else {
        Style::default().fg(theme.border)
    };
    Block::default()
        .borders(Borders::TOP)
        .border_style(border)
        .style(Style::default().bg(theme.bg))
}

/// Body lines get a little colour: `key: value` pairs and URLs stand out
fn body_line<'a>(text: &'a str, theme: &UiTheme) -> Vec<Span<'a>> {
    if let Some(pos) = text.find("https://") {
        return vec![
            Span::styled(&text[..pos], Style::default().fg(theme.text)),
            Span::styled(
                &text[pos..],
                Style::default().fg(theme.blue).add_modifier(Modifier::UNDERLINED),
            ),
        ];
    }
    if let Some((key, value)) = text.split_once(": ") {
        return vec![
            Span::styled(key, Style::default().fg(theme.purple)),
            Span::styled(": ", Style::default().fg(theme.text_muted)),
            Span::styled(value, Style::default().fg(theme.orange)),
        ];
    }
    vec![Span::styled(text, Style::default().fg(theme.text))]
}

/// Render the editor area.
///
/// `scroll` is clamped in place so the last content row can reach the top
/// at most.
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    view: &ContentView,
    selected_link: Option<usize>,
    theme: &UiTheme,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = editor_block(theme, is_focused);

    let mut rows: Vec<Vec<Span>> = Vec::with_capacity(content_height(view));
    rows.push(vec![Span::styled(
        view.heading,
        Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
    )]);
    rows.push(Vec::new());
    rows.extend(view.lines.iter().map(|line| body_line(line, theme)));
    rows.push(Vec::new());
    for (i, link) in view.links.iter().enumerate() {
        let style = if selected_link == Some(i) {
            Style::default()
                .bg(theme.selection)
                .fg(theme.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.blue)
        };
        rows.push(vec![
            Span::styled(format!("[{}] ", i + 1), Style::default().fg(theme.text_muted)),
            Span::styled(format!(" {} → ", link.label), style),
        ]);
    }

    *scroll = (*scroll).min(rows.len().saturating_sub(1));

    let gutter = Style::default().fg(theme.text_muted);
    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(n, mut spans)| {
            let number = format!("{:>width$} ", n + 1, width = GUTTER_WIDTH);
            spans.insert(0, Span::styled(number, gutter));
            Line::from(spans)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((*scroll as u16, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{self, WELCOME};
    use crate::workspace::FileKind;

    #[test]
    fn test_link_rows_follow_body() {
        let about = content::view(FileKind::About);
        let inner = Rect::new(0, 1, 80, 30);
        let first = inner.y + first_link_row(about) as u16;

        assert_eq!(link_at(about, inner, 0, first), Some(0));
        assert_eq!(link_at(about, inner, 0, first + 2), Some(2));
        assert_eq!(link_at(about, inner, 0, first + 3), None);
        assert_eq!(link_at(about, inner, 0, first - 1), None);
        assert_eq!(link_at(about, inner, 1, first - 1), Some(0));
    }

    #[test]
    fn test_content_height() {
        assert_eq!(content_height(&WELCOME), WELCOME.lines.len() + 3 + 1);
        let home = content::view(FileKind::Home);
        assert_eq!(content_height(home), home.lines.len() + 3);
    }
}
