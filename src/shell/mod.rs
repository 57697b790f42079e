//! Editor shell: the root state machine
//!
//! [`EditorShell`] owns every piece of interactive state: open tabs,
//! sidebar, explorer folders, search query, terminal panel, theme and the
//! settings overlay. Everything that wants to change what is on screen goes
//! through one of its methods; the UI layer only translates key and mouse
//! events into those calls.
//!
//! - [`sidebar`]: sidebar open/view state
//! - [`resize`]: drag-resize gestures for the sidebar and terminal
//! - [`settings`]: theme picker overlay

pub mod resize;
pub mod settings;
pub mod sidebar;

use crate::config::LayoutConfig;
use crate::content::{self, ContentView, Link};
use crate::error::Result;
use crate::terminal::{Effect, EvalContext, TerminalSession};
use crate::theme::{ThemeContext, ThemeId};
use crate::workspace::explorer::{Explorer, Folder};
use crate::workspace::files::{self, VirtualFile, HOME};
use crate::workspace::{Tab, TabSet};
use resize::{Drag, DragTarget};
use settings::SettingsState;
use sidebar::{SidebarState, SidebarView};
use std::time::Instant;

/// The terminal panel. The session exists only while the panel is open.
#[derive(Debug)]
pub struct TerminalPanel {
    /// Height in layout units
    pub height: u32,
    session: Option<TerminalSession>,
}

impl TerminalPanel {
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&TerminalSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut TerminalSession> {
        self.session.as_mut()
    }
}

/// Root coordinator of the editor chrome
pub struct EditorShell {
    tabs: TabSet,
    sidebar: SidebarState,
    explorer: Explorer,
    search_query: String,
    terminal: TerminalPanel,
    theme: ThemeContext,
    settings: SettingsState,
    drag: Option<Drag>,
    layout: LayoutConfig,
}

impl EditorShell {
    pub fn new(theme: ThemeContext, layout: LayoutConfig) -> Self {
        EditorShell {
            tabs: TabSet::with_tab(HOME.id, HOME.name),
            sidebar: SidebarState::new(layout.sidebar_width),
            explorer: Explorer::default(),
            search_query: String::new(),
            terminal: TerminalPanel {
                height: layout.terminal_height,
                session: None,
            },
            theme,
            settings: SettingsState::default(),
            drag: None,
            layout,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    // --- tabs ---

    pub fn tabs(&self) -> &[Tab] {
        self.tabs.tabs()
    }

    pub fn active_tab(&self) -> Option<&str> {
        self.tabs.active()
    }

    pub fn active_tab_index(&self) -> Option<usize> {
        self.tabs.active_index()
    }

    /// Open `id` in a tab (creating it if needed) and focus it.
    ///
    /// This is the one navigation entry point handed to content views and
    /// the terminal.
    pub fn open_file(&mut self, id: &str, name: &str) {
        let created = self.tabs.open(id, name);
        tracing::debug!(id, created, "open file");
    }

    pub fn close_tab(&mut self, id: &str) {
        if self.tabs.close(id) {
            tracing::debug!(
                id,
                remaining = self.tabs.len(),
                active = ?self.tabs.active(),
                "closed tab"
            );
        }
    }

    pub fn close_active_tab(&mut self) {
        if let Some(id) = self.tabs.active().map(str::to_string) {
            self.close_tab(&id);
        }
    }

    pub fn activate_tab(&mut self, id: &str) {
        self.tabs.activate(id);
    }

    pub fn next_tab(&mut self) {
        self.tabs.next();
    }

    pub fn prev_tab(&mut self) {
        self.tabs.prev();
    }

    /// Catalog entry of the active tab, if it names a known file
    pub fn active_file(&self) -> Option<&'static VirtualFile> {
        self.tabs.active().and_then(files::lookup)
    }

    /// Content shown in the editor area
    pub fn active_view(&self) -> &'static ContentView {
        match (self.tabs.active(), self.active_file()) {
            (None, _) => &content::WELCOME,
            (Some(_), Some(file)) => content::view(file.kind),
            (Some(_), None) => &content::MISSING,
        }
    }

    /// Follow a link offered by the active view
    pub fn follow_link(&mut self, link: &Link) {
        self.open_file(link.id, link.name);
    }

    pub fn window_title(&self) -> &'static str {
        files::window_title(self.tabs.active())
    }

    // --- sidebar ---

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn select_sidebar_view(&mut self, view: SidebarView) {
        self.sidebar.select(view);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn toggle_folder(&mut self, folder: Folder) {
        self.explorer.toggle(folder);
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }

    pub fn search_results(&self) -> Vec<&'static VirtualFile> {
        files::search(&self.search_query)
    }

    /// Open a search hit and clear the query
    pub fn open_search_result(&mut self, index: usize) -> bool {
        let Some(file) = self.search_results().get(index).copied() else {
            return false;
        };
        self.open_file(file.id, file.name);
        self.search_query.clear();
        true
    }

    // --- terminal ---

    pub fn terminal(&self) -> &TerminalPanel {
        &self.terminal
    }

    pub fn terminal_session_mut(&mut self) -> Option<&mut TerminalSession> {
        self.terminal.session_mut()
    }

    pub fn open_terminal(&mut self) {
        if self.terminal.session.is_none() {
            self.terminal.session = Some(TerminalSession::new());
            tracing::debug!("terminal opened");
        }
    }

    /// Close (or minimise) the terminal panel, discarding its session and
    /// anything it still had queued
    pub fn close_terminal(&mut self) {
        if let Some(mut session) = self.terminal.session.take() {
            session.cancel_pending();
            tracing::debug!("terminal closed");
        }
    }

    pub fn toggle_terminal(&mut self) {
        if self.terminal.is_open() {
            self.close_terminal();
        } else {
            self.open_terminal();
        }
    }

    /// Submit the terminal's input line with the current wall-clock time
    pub fn submit_terminal(&mut self, now: Instant) {
        self.submit_terminal_with(&EvalContext::now(), now);
    }

    /// Submit the terminal's input line and carry out whatever it asks for
    pub fn submit_terminal_with(&mut self, ctx: &EvalContext, now: Instant) {
        let Some(session) = self.terminal.session.as_mut() else {
            return;
        };
        let effects = session.submit(ctx);
        for effect in effects {
            match effect {
                Effect::OpenFile { id, name } => self.open_file(id, name),
                Effect::Delayed { after, lines } => {
                    if let Some(session) = self.terminal.session.as_mut() {
                        session.schedule(now, after, lines);
                    }
                }
            }
        }
    }

    /// Deadline of the earliest queued terminal output
    pub fn next_due(&self) -> Option<Instant> {
        self.terminal
            .session
            .as_ref()
            .and_then(TerminalSession::next_due)
    }

    /// Deliver queued terminal output that has come due
    pub fn tick(&mut self, now: Instant) -> usize {
        self.terminal
            .session
            .as_mut()
            .map_or(0, |session| session.tick(now))
    }

    // --- resizing ---

    /// Start a drag; `pointer` is on the target's axis, in layout units
    pub fn begin_drag(&mut self, target: DragTarget, pointer: i32) {
        let (size, bounds) = match target {
            DragTarget::SidebarWidth => (self.sidebar.width, self.layout.sidebar_bounds),
            DragTarget::TerminalHeight => (self.terminal.height, self.layout.terminal_bounds),
        };
        self.drag = Some(Drag::begin(target, pointer, size, bounds));
    }

    /// Pointer moved while a button is held; no-op without an active drag
    pub fn drag_to(&mut self, pointer: i32) {
        let Some(drag) = self.drag else {
            return;
        };
        let size = drag.size_at(pointer);
        match drag.target() {
            DragTarget::SidebarWidth => self.sidebar.width = size,
            DragTarget::TerminalHeight => self.terminal.height = size,
        }
    }

    /// Any button release ends the drag, wherever it happens
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            tracing::trace!(resize = ?drag.target(), "drag ended");
        }
    }

    pub fn dragging(&self) -> Option<DragTarget> {
        self.drag.map(|d| d.target())
    }

    // --- theme ---

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    pub fn apply_theme(&mut self, id: ThemeId) {
        self.theme.apply(id);
    }

    /// Select a theme by id; unknown ids leave everything as it was
    pub fn select_theme(&mut self, id: &str) -> Result<ThemeId> {
        self.theme.select(id)
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn open_settings(&mut self) {
        self.settings.open(self.theme.current());
    }

    pub fn close_settings(&mut self) {
        self.settings.close();
    }

    /// Move the picker highlight and apply the highlighted theme
    pub fn step_settings(&mut self, delta: isize) {
        if !self.settings.open {
            return;
        }
        let id = self.settings.step(delta);
        self.theme.apply(id);
    }
}
