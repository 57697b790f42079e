//! # Introduction
//!
//! termfolio is a personal portfolio presented as a code-editor workspace in
//! the terminal. Portfolio sections are virtual files opened in tabs from an
//! explorer tree, a search box or a simulated shell, and the whole chrome
//! can be re-skinned with one of seven colour themes.
//!
//! ## Layers
//!
//! ```text
//! workspace (files, tabs, explorer) ─┐
//! terminal (interpreter, session)  ──┼─> shell::EditorShell ─> ui::App
//! theme (palettes, store, context) ──┘
//! ```
//!
//! 1. [`workspace`]: the fixed virtual file catalog, tab set and explorer
//!    tree.
//! 2. [`terminal`]: a pure command interpreter returning transcript changes
//!    and effects, plus the interactive session that owns input, history
//!    and delayed output.
//! 3. [`theme`]: palette registry, derived style variables and the
//!    persisted preference behind the [`theme::ThemeStore`] trait.
//! 4. [`shell`]: the root state machine every interaction goes through.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod shell;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod workspace;
