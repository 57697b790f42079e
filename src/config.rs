//! Command-line options and derived runtime configuration

use crate::shell::resize::Bounds;
use clap::Parser;
use std::path::PathBuf;

/// Application directory name under the platform config/state dirs
const APP_DIR: &str = "termfolio";

/// Command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "termfolio", version, about = "Portfolio in an editor-styled terminal UI")]
pub struct Cli {
    /// Theme to start with (also remembered for next time)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Where the theme preference is stored
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Log file; the terminal itself is never written to
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// List theme ids and exit
    #[arg(long)]
    pub list_themes: bool,
}

/// Initial sizes and drag limits, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub sidebar_width: u32,
    pub sidebar_bounds: Bounds,
    pub terminal_height: u32,
    pub terminal_bounds: Bounds,
    /// Layout units per terminal cell column
    pub units_per_column: u32,
    /// Layout units per terminal cell row
    pub units_per_row: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            sidebar_width: 280,
            sidebar_bounds: Bounds::new(200, 600),
            terminal_height: 256,
            terminal_bounds: Bounds::new(200, 600),
            units_per_column: 10,
            units_per_row: 16,
        }
    }
}

impl LayoutConfig {
    pub fn columns(&self, units: u32) -> u16 {
        (units / self.units_per_column.max(1)).min(u16::MAX as u32) as u16
    }

    pub fn rows(&self, units: u32) -> u16 {
        (units / self.units_per_row.max(1)).min(u16::MAX as u32) as u16
    }
}

/// Everything the binary needs to start
#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Option<String>,
    /// `None` keeps the preference in memory
    pub state_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub layout: LayoutConfig,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let state_file = if cli.no_persist {
            None
        } else {
            cli.state_file.or_else(default_state_file)
        };
        Config {
            theme: cli.theme,
            state_file,
            log_file: cli.log_file.or_else(default_log_file),
            layout: LayoutConfig::default(),
        }
    }
}

/// `<config_dir>/termfolio/state.json`
pub fn default_state_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("state.json"))
}

/// `<state_dir>/termfolio/termfolio.log`, falling back to the cache dir on
/// platforms without a state dir
pub fn default_log_file() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join(APP_DIR).join("termfolio.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_persist_drops_state_file() {
        let cli = Cli::parse_from(["termfolio", "--no-persist", "--state-file", "/tmp/x.json"]);
        let config = Config::from_cli(cli);
        assert_eq!(config.state_file, None);
    }

    #[test]
    fn test_explicit_paths_win() {
        let cli = Cli::parse_from([
            "termfolio",
            "--theme",
            "dracula",
            "--state-file",
            "/tmp/state.json",
            "--log-file",
            "/tmp/folio.log",
        ]);
        let config = Config::from_cli(cli);
        assert_eq!(config.theme.as_deref(), Some("dracula"));
        assert_eq!(config.state_file, Some(PathBuf::from("/tmp/state.json")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/folio.log")));
    }

    #[test]
    fn test_layout_unit_conversion() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.columns(280), 28);
        assert_eq!(layout.rows(256), 16);
    }
}
