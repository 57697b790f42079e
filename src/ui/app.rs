//! Main TUI application state and event handling
//!
//! [`App`] wraps an [`EditorShell`] with the purely presentational state
//! (focus, cursors, scroll offsets, last drawn geometry) and turns key and
//! mouse events into shell calls.

use super::panes::{
    self, editor, settings as settings_pane, sidebar as sidebar_pane, ActivityItem,
    SidebarRenderData, StatusRenderData, ACTIVITY_BAR_WIDTH,
};
use super::theme::UiTheme;
use crate::error::Result;
use crate::shell::resize::DragTarget;
use crate::shell::sidebar::SidebarView;
use crate::shell::EditorShell;
use crate::workspace::explorer::ExplorerRow;
use crate::workspace::files::GITHUB;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Sidebar,
    Editor,
    Terminal,
}

impl FocusedPane {
    const ORDER: [FocusedPane; 3] = [
        FocusedPane::Sidebar,
        FocusedPane::Editor,
        FocusedPane::Terminal,
    ];

    fn step(self, delta: isize, shown: impl Fn(FocusedPane) -> bool) -> Self {
        let n = Self::ORDER.len() as isize;
        let mut index = Self::ORDER.iter().position(|p| *p == self).unwrap_or(1) as isize;
        for _ in 0..n {
            index = (index + delta).rem_euclid(n);
            let pane = Self::ORDER[index as usize];
            if shown(pane) {
                return pane;
            }
        }
        FocusedPane::Editor
    }

    /// Next visible pane (sidebar -> editor -> terminal)
    pub fn next(self, shown: impl Fn(FocusedPane) -> bool) -> Self {
        self.step(1, shown)
    }

    /// Previous visible pane
    pub fn prev(self, shown: impl Fn(FocusedPane) -> bool) -> Self {
        self.step(-1, shown)
    }
}

/// Screen regions from the last layout pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Areas {
    pub screen: Rect,
    pub activity: Rect,
    pub sidebar: Option<Rect>,
    pub tabs: Rect,
    pub editor: Rect,
    pub terminal: Option<Rect>,
    pub status: Rect,
}

/// Split `area` the way the editor chrome is drawn
pub fn layout_areas(area: Rect, shell: &EditorShell) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let sidebar_open = shell.sidebar().open;
    let sidebar_cols = shell.layout().columns(shell.sidebar().width);
    let mut columns = vec![Constraint::Length(ACTIVITY_BAR_WIDTH)];
    if sidebar_open {
        columns.push(Constraint::Length(sidebar_cols));
    }
    columns.push(Constraint::Min(0));
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(rows[0]);

    let main = columns[columns.len() - 1];
    let terminal_open = shell.terminal().is_open();
    let terminal_rows = shell.layout().rows(shell.terminal().height);
    let mut stack = vec![Constraint::Length(1), Constraint::Min(0)];
    if terminal_open {
        stack.push(Constraint::Length(terminal_rows));
    }
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints(stack)
        .split(main);

    Areas {
        screen: area,
        activity: columns[0],
        sidebar: sidebar_open.then(|| columns[1]),
        tabs: stack[0],
        editor: stack[1],
        terminal: terminal_open.then(|| stack[2]),
        status: rows[1],
    }
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// The main application state
pub struct App {
    pub shell: EditorShell,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Highlighted item in the sidebar's current view
    pub sidebar_cursor: usize,
    sidebar_scroll: u16,

    /// Per-pane scroll offsets
    pub editor_scroll: usize,
    pub terminal_scroll: usize,

    /// Highlighted link in the editor
    pub link_cursor: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    areas: Areas,
    last_active: Option<String>,
    last_title: Option<&'static str>,
}

impl App {
    pub fn new(shell: EditorShell) -> Self {
        let last_active = shell.active_tab().map(str::to_string);
        App {
            shell,
            focused_pane: FocusedPane::Editor,
            sidebar_cursor: 0,
            sidebar_scroll: 0,
            editor_scroll: 0,
            terminal_scroll: 0,
            link_cursor: None,
            should_quit: false,
            status_message: String::from("Ready"),
            areas: Areas::default(),
            last_active,
            last_title: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            if self.shell.tick(Instant::now()) > 0 {
                self.terminal_scroll = usize::MAX;
            }

            terminal.draw(|f| self.render(f))?;

            let title = self.shell.window_title();
            if self.last_title != Some(title) {
                crossterm::execute!(io::stdout(), crossterm::terminal::SetTitle(title))?;
                self.last_title = Some(title);
            }

            if self.should_quit {
                break;
            }

            // Wake early when queued terminal output comes due
            if event::poll(self.poll_timeout(Instant::now()))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key)
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// How long the loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.shell.next_due() {
            Some(due) => due.saturating_duration_since(now).min(POLL_INTERVAL),
            None => POLL_INTERVAL,
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.sync();
        let theme = UiTheme::from_palette(self.shell.theme().palette());
        self.areas = layout_areas(frame.area(), &self.shell);
        let areas = self.areas;

        panes::render_activity_bar(
            frame,
            areas.activity,
            self.shell.sidebar(),
            self.shell.terminal().is_open(),
            &theme,
        );

        if let Some(area) = areas.sidebar {
            let view = self.shell.sidebar().view;
            let results = self.shell.search_results();
            let count = sidebar_pane::item_count(view, self.shell.explorer(), &results);
            self.sidebar_cursor = self.sidebar_cursor.min(count.saturating_sub(1));
            let inner = sidebar_pane::inner_area(area);
            self.sidebar_scroll = sidebar_pane::scroll_for(view, self.sidebar_cursor, inner);

            panes::render_sidebar_pane(
                frame,
                area,
                SidebarRenderData {
                    view,
                    explorer: self.shell.explorer(),
                    active_file: self.shell.active_tab(),
                    query: self.shell.search_query(),
                    results: &results,
                    cursor: self.sidebar_cursor,
                    is_focused: self.focused_pane == FocusedPane::Sidebar,
                },
                &theme,
            );
        }

        panes::render_tab_bar(
            frame,
            areas.tabs,
            self.shell.tabs(),
            self.shell.active_tab_index(),
            &theme,
        );

        panes::render_editor_pane(
            frame,
            areas.editor,
            self.shell.active_view(),
            self.link_cursor,
            &theme,
            self.focused_pane == FocusedPane::Editor,
            &mut self.editor_scroll,
        );

        if let (Some(area), Some(session)) = (areas.terminal, self.shell.terminal().session()) {
            panes::render_terminal_pane(
                frame,
                area,
                session,
                &theme,
                self.focused_pane == FocusedPane::Terminal,
                &mut self.terminal_scroll,
            );
        }

        panes::render_status_bar(frame, areas.status, self.status_data(), &theme);

        if self.shell.settings().open {
            panes::render_settings_popup(frame, areas.screen, self.shell.settings(), &theme);
        }
    }

    fn status_data(&self) -> StatusRenderData<'_> {
        StatusRenderData {
            message: &self.status_message,
            language: self.shell.active_file().map(|f| f.language()),
            theme_name: self.shell.theme().palette().name,
            terminal_open: self.shell.terminal().is_open(),
        }
    }

    fn is_shown(&self, pane: FocusedPane) -> bool {
        match pane {
            FocusedPane::Sidebar => self.shell.sidebar().open,
            FocusedPane::Editor => true,
            FocusedPane::Terminal => self.shell.terminal().is_open(),
        }
    }

    /// Keep focus on a visible pane and reset per-file state when the
    /// active tab changes
    fn sync(&mut self) {
        if !self.is_shown(self.focused_pane) {
            self.focused_pane = FocusedPane::Editor;
        }
        if self.shell.active_tab() != self.last_active.as_deref() {
            self.last_active = self.shell.active_tab().map(str::to_string);
            self.editor_scroll = 0;
            self.link_cursor = None;
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.shell.settings().open {
            self.handle_settings_key(key);
        } else if key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_global_key(key);
        } else {
            match key.code {
                KeyCode::Tab => {
                    self.focused_pane = self.focused_pane.next(|p| self.is_shown(p));
                }
                KeyCode::BackTab => {
                    self.focused_pane = self.focused_pane.prev(|p| self.is_shown(p));
                }
                _ => match self.focused_pane {
                    FocusedPane::Sidebar => self.handle_sidebar_key(key),
                    FocusedPane::Editor => self.handle_editor_key(key),
                    FocusedPane::Terminal => self.handle_terminal_key(key),
                },
            }
        }
        self.sync();
    }

    fn handle_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.toggle_terminal(),
            KeyCode::Char('b') => self.shell.toggle_sidebar(),
            KeyCode::Char('e') => self.select_view(SidebarView::Explorer),
            KeyCode::Char('f') => self.select_view(SidebarView::Search),
            KeyCode::Char('x') => self.select_view(SidebarView::Extensions),
            KeyCode::Char('w') => self.shell.close_active_tab(),
            KeyCode::Char('g') => self.shell.open_file(GITHUB.id, GITHUB.name),
            KeyCode::Char('k') => self.shell.open_settings(),
            KeyCode::Char('l') => {
                if let Some(session) = self.shell.terminal_session_mut() {
                    session.clear();
                    self.terminal_scroll = 0;
                }
            }
            KeyCode::PageUp => self.shell.prev_tab(),
            KeyCode::PageDown => self.shell.next_tab(),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.step_theme(-1),
            KeyCode::Down | KeyCode::Char('j') => self.step_theme(1),
            KeyCode::Enter | KeyCode::Esc => self.shell.close_settings(),
            _ => {}
        }
    }

    fn step_theme(&mut self, delta: isize) {
        self.shell.step_settings(delta);
        self.status_message = format!("Theme: {}", self.shell.theme().palette().name);
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let view = self.shell.sidebar().view;
        match key.code {
            KeyCode::Up => self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1),
            KeyCode::Down => {
                let results = self.shell.search_results();
                let count = sidebar_pane::item_count(view, self.shell.explorer(), &results);
                if self.sidebar_cursor + 1 < count {
                    self.sidebar_cursor += 1;
                }
            }
            KeyCode::Enter => self.activate_sidebar_item(self.sidebar_cursor),
            KeyCode::Esc => self.focused_pane = FocusedPane::Editor,
            KeyCode::Backspace if view == SidebarView::Search => {
                self.shell.pop_search_char();
                self.sidebar_cursor = 0;
            }
            KeyCode::Char(c) if view == SidebarView::Search => {
                self.shell.push_search_char(c);
                self.sidebar_cursor = 0;
            }
            _ => {}
        }
    }

    fn activate_sidebar_item(&mut self, index: usize) {
        match self.shell.sidebar().view {
            SidebarView::Explorer => match self.shell.explorer().rows().get(index).copied() {
                Some(ExplorerRow::Folder { folder, .. }) => self.shell.toggle_folder(folder),
                Some(ExplorerRow::File { file, .. }) => self.shell.open_file(file.id, file.name),
                None => {}
            },
            SidebarView::Search => {
                if self.shell.open_search_result(index) {
                    self.sidebar_cursor = 0;
                }
            }
            SidebarView::Extensions => {
                if let Some(ext) = crate::content::EXTENSIONS.get(index) {
                    self.status_message = if ext.installed {
                        format!("{} is installed", ext.name)
                    } else {
                        format!("{} is not installed", ext.name)
                    };
                }
            }
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let links = self.shell.active_view().links.len();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.editor_scroll = self.editor_scroll.saturating_sub(1),
            KeyCode::Down => self.editor_scroll = self.editor_scroll.saturating_add(1),
            KeyCode::PageUp => self.editor_scroll = self.editor_scroll.saturating_sub(10),
            KeyCode::PageDown => self.editor_scroll = self.editor_scroll.saturating_add(10),
            KeyCode::Right if links > 0 => {
                self.link_cursor = Some(self.link_cursor.map_or(0, |i| (i + 1) % links));
            }
            KeyCode::Left if links > 0 => {
                self.link_cursor =
                    Some(self.link_cursor.map_or(links - 1, |i| (i + links - 1) % links));
            }
            KeyCode::Enter => {
                if let Some(index) = self.link_cursor {
                    self.follow_link(index);
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(n) = c.to_digit(10) {
                    self.follow_link(n as usize - 1);
                }
            }
            KeyCode::Char('[') => self.shell.prev_tab(),
            KeyCode::Char(']') => self.shell.next_tab(),
            _ => {}
        }
    }

    fn follow_link(&mut self, index: usize) {
        if let Some(link) = self.shell.active_view().links.get(index) {
            self.shell.follow_link(link);
        }
    }

    fn handle_terminal_key(&mut self, key: KeyEvent) {
        let Some(session) = self.shell.terminal_session_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => session.insert_char(c),
            KeyCode::Backspace => session.backspace(),
            KeyCode::Delete => session.delete(),
            KeyCode::Left => session.move_left(),
            KeyCode::Right => session.move_right(),
            KeyCode::Home => session.move_home(),
            KeyCode::End => session.move_end(),
            KeyCode::Up => session.history_prev(),
            KeyCode::Down => session.history_next(),
            KeyCode::Enter => {
                self.shell.submit_terminal(Instant::now());
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::PageUp => self.terminal_scroll = self.terminal_scroll.saturating_sub(5),
            KeyCode::PageDown => self.terminal_scroll = self.terminal_scroll.saturating_add(5),
            KeyCode::Esc => self.focused_pane = FocusedPane::Editor,
            _ => {}
        }
    }

    fn toggle_terminal(&mut self) {
        self.shell.toggle_terminal();
        if self.shell.terminal().is_open() {
            self.focused_pane = FocusedPane::Terminal;
            self.terminal_scroll = usize::MAX;
        }
    }

    fn select_view(&mut self, view: SidebarView) {
        let previous = self.shell.sidebar().view;
        self.shell.select_sidebar_view(view);
        if self.shell.sidebar().open {
            if previous != view {
                self.sidebar_cursor = 0;
            }
            self.focused_pane = FocusedPane::Sidebar;
        }
    }

    /// Pointer position on a drag axis, in layout units
    fn pointer(&self, target: DragTarget, column: u16, row: u16) -> i32 {
        let layout = self.shell.layout();
        match target {
            DragTarget::SidebarWidth => (column as u32 * layout.units_per_column) as i32,
            DragTarget::TerminalHeight => (row as u32 * layout.units_per_row) as i32,
        }
    }

    /// Handle mouse events against the last drawn layout
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(column, row),
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(target) = self.shell.dragging() {
                    let pointer = self.pointer(target, column, row);
                    self.shell.drag_to(pointer);
                }
            }
            MouseEventKind::Up(_) => self.shell.end_drag(),
            MouseEventKind::ScrollUp => self.scroll_at(column, row, -3),
            MouseEventKind::ScrollDown => self.scroll_at(column, row, 3),
            _ => {}
        }
        self.sync();
    }

    fn scroll_at(&mut self, column: u16, row: u16, delta: isize) {
        if hit(self.areas.editor, column, row) {
            self.editor_scroll = self.editor_scroll.saturating_add_signed(delta);
        } else if self.areas.terminal.is_some_and(|area| hit(area, column, row)) {
            if self.terminal_scroll == usize::MAX && delta < 0 {
                // pinned to the bottom; the next render clamps it
                self.terminal_scroll = usize::MAX / 2;
            }
            self.terminal_scroll = self.terminal_scroll.saturating_add_signed(delta);
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let areas = self.areas;

        if self.shell.settings().open {
            let popup = settings_pane::popup_area(areas.screen);
            if !hit(popup, column, row) {
                self.shell.close_settings();
            } else if let Some(offset) = row.checked_sub(popup.y + 2) {
                let delta = offset as isize - self.shell.settings().selected as isize;
                if (offset as usize) < crate::theme::ThemeId::ALL.len() && delta != 0 {
                    self.step_theme(delta);
                }
            }
            return;
        }

        if let Some(sidebar) = areas.sidebar {
            if column + 1 == sidebar.right() && hit(sidebar, column, row) {
                let pointer = self.pointer(DragTarget::SidebarWidth, column, row);
                self.shell.begin_drag(DragTarget::SidebarWidth, pointer);
                return;
            }
        }
        if let Some(terminal) = areas.terminal {
            let (clear, close) = panes::header_controls(terminal);
            if hit(clear, column, row) {
                if let Some(session) = self.shell.terminal_session_mut() {
                    session.clear();
                }
                self.terminal_scroll = 0;
                return;
            }
            if hit(close, column, row) {
                self.shell.close_terminal();
                return;
            }
            if row == terminal.y && hit(terminal, column, row) {
                let pointer = self.pointer(DragTarget::TerminalHeight, column, row);
                self.shell.begin_drag(DragTarget::TerminalHeight, pointer);
                return;
            }
        }

        if hit(areas.activity, column, row) {
            let clicked = panes::activity_hitboxes(areas.activity)
                .into_iter()
                .find(|(_, rect)| hit(*rect, column, row));
            match clicked {
                Some((ActivityItem::View(view), _)) => self.select_view(view),
                Some((ActivityItem::Terminal, _)) => self.toggle_terminal(),
                Some((ActivityItem::GitHub, _)) => self.shell.open_file(GITHUB.id, GITHUB.name),
                Some((ActivityItem::Settings, _)) => self.shell.open_settings(),
                None => {}
            }
            return;
        }

        if hit(areas.status, column, row) {
            let button = panes::terminal_button(areas.status, &self.status_data());
            if button.is_some_and(|rect| hit(rect, column, row)) {
                self.toggle_terminal();
            }
            return;
        }

        if hit(areas.tabs, column, row) {
            let clicked = panes::tab_hitboxes(self.shell.tabs(), areas.tabs)
                .into_iter()
                .find(|b| hit(b.tab, column, row));
            if let Some(hitbox) = clicked {
                let id = self.shell.tabs()[hitbox.index].id.clone();
                if hit(hitbox.close, column, row) {
                    self.shell.close_tab(&id);
                } else {
                    self.shell.activate_tab(&id);
                }
            }
            self.focused_pane = FocusedPane::Editor;
            return;
        }

        if let Some(sidebar) = areas.sidebar.filter(|area| hit(*area, column, row)) {
            self.focused_pane = FocusedPane::Sidebar;
            let view = self.shell.sidebar().view;
            let results = self.shell.search_results();
            let count = sidebar_pane::item_count(view, self.shell.explorer(), &results);
            let inner = sidebar_pane::inner_area(sidebar);
            if let Some(index) = sidebar_pane::item_at(view, inner, row, self.sidebar_scroll, count)
            {
                self.sidebar_cursor = index;
                self.activate_sidebar_item(index);
            }
            return;
        }

        if hit(areas.editor, column, row) {
            self.focused_pane = FocusedPane::Editor;
            let view = self.shell.active_view();
            let inner = editor::inner_area(areas.editor);
            if let Some(index) = editor::link_at(view, inner, self.editor_scroll, row) {
                self.link_cursor = Some(index);
                self.follow_link(index);
            }
            return;
        }

        if areas.terminal.is_some_and(|area| hit(area, column, row)) {
            self.focused_pane = FocusedPane::Terminal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_skips_hidden_panes() {
        let only_editor = |p: FocusedPane| p == FocusedPane::Editor;
        assert_eq!(FocusedPane::Editor.next(only_editor), FocusedPane::Editor);

        let all = |_: FocusedPane| true;
        assert_eq!(FocusedPane::Terminal.next(all), FocusedPane::Sidebar);
        assert_eq!(FocusedPane::Sidebar.prev(all), FocusedPane::Terminal);

        let no_sidebar = |p: FocusedPane| p != FocusedPane::Sidebar;
        assert_eq!(FocusedPane::Terminal.next(no_sidebar), FocusedPane::Editor);
    }
}
