//! Virtual files and the tabs that reference them
//!
//! - [`files`]: the static catalog of openable files and the window-title
//!   table
//! - [`tabs`]: the ordered open-tab sequence with its active pointer
//! - [`explorer`]: the folder tree shown in the explorer sidebar

pub mod explorer;
pub mod files;
pub mod tabs;

pub use files::{lookup, window_title, FileKind, VirtualFile, FILES};
pub use tabs::{Tab, TabSet};
