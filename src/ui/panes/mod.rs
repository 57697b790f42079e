//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function plus whatever geometry
//! helpers the event loop needs to hit-test mouse clicks against what was
//! drawn.
//!
//! # Pane Modules
//!
//! - [`activity`]: icon strip switching sidebar views
//! - [`sidebar`]: explorer tree, search and extensions
//! - [`tabs`]: open-file tabs with close controls
//! - [`editor`]: content of the active file and its links
//! - [`terminal`]: the simulated shell
//! - [`status`]: status bar
//! - [`settings`]: theme picker popup

pub mod activity;
pub mod editor;
pub mod settings;
pub mod sidebar;
pub mod status;
pub mod tabs;
pub mod terminal;

pub use activity::{activity_hitboxes, render_activity_bar, ActivityItem, ACTIVITY_BAR_WIDTH};
pub use editor::render_editor_pane;
pub use settings::render_settings_popup;
pub use sidebar::{render_sidebar_pane, SidebarRenderData};
pub use status::{render_status_bar, terminal_button, StatusRenderData};
pub use tabs::{render_tab_bar, tab_hitboxes, TabHitbox};
pub use terminal::{header_controls, render_terminal_pane};
