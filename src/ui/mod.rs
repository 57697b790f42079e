//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: focus, cursors, scroll offsets and the key/mouse event loop
//! - **[`panes`]**: stateless render functions for each region of the editor
//!   chrome, plus the geometry the event loop hit-tests against
//! - **[`theme`]**: ratatui colours derived from the active palette
//!
//! Construct an [`App`] from an [`EditorShell`] and call [`App::run`].
//!
//! [`EditorShell`]: crate::shell::EditorShell
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
