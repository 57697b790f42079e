// termfolio: portfolio workspace in an editor-styled terminal UI

use std::io;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use termfolio::config::{Cli, Config};
use termfolio::logging;
use termfolio::shell::EditorShell;
use termfolio::theme::{FileStore, MemoryStore, ThemeContext, ThemeId, ThemeStore};
use termfolio::ui::App;

fn open_store(config: &Config) -> Box<dyn ThemeStore> {
    let Some(path) = &config.state_file else {
        return Box::new(MemoryStore::new());
    };
    match FileStore::open(path) {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "theme store");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "state file unusable, theme will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for id in ThemeId::ALL {
            println!("{:<20} {}", id.as_str(), id.palette().name);
        }
        return Ok(());
    }

    let config = Config::from_cli(cli);

    if let Some(path) = &config.log_file {
        // Logging is best effort; the UI works without it
        if let Err(e) = logging::init_global(path) {
            eprintln!("Warning: logging disabled: {e}");
        }
    }

    let mut theme = ThemeContext::new(open_store(&config));
    if let Some(id) = &config.theme {
        theme
            .select(id)
            .with_context(|| format!("try one of: {}", theme_ids()))?;
    }
    tracing::info!(theme = %theme.current(), "starting");

    let shell = EditorShell::new(theme, config.layout);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(shell);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn theme_ids() -> String {
    ThemeId::ALL
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
