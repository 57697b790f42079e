// Integration tests for theme selection and persistence

use termfolio::config::LayoutConfig;
use termfolio::error::FolioError;
use termfolio::shell::EditorShell;
use termfolio::theme::{FileStore, ThemeContext, ThemeId, ThemeStore, THEME_STORAGE_KEY};

#[test]
fn test_selection_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    {
        let store = FileStore::open(&path).unwrap();
        let theme = ThemeContext::new(Box::new(store));
        let mut shell = EditorShell::new(theme, LayoutConfig::default());
        assert_eq!(shell.theme().current(), ThemeId::DarkDefault);
        shell.select_theme("dracula").unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dracula"));

    let theme = ThemeContext::new(Box::new(store));
    assert_eq!(theme.current(), ThemeId::Dracula);
    assert_eq!(theme.style_var("--color-vscode-bg"), Some("#282a36"));
}

#[test]
fn test_unknown_theme_is_rejected_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut theme = ThemeContext::new(Box::new(FileStore::open(&path).unwrap()));
    theme.select("monokai").unwrap();

    let err = theme.select("solarized").unwrap_err();
    assert!(matches!(err, FolioError::UnknownTheme(ref id) if id == "solarized"));
    assert_eq!(theme.current(), ThemeId::Monokai);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(THEME_STORAGE_KEY).as_deref(), Some("monokai"));
}

#[test]
fn test_garbage_stored_value_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"vscode-theme": "no-such-theme"}"#).unwrap();

    let theme = ThemeContext::new(Box::new(FileStore::open(&path).unwrap()));
    assert_eq!(theme.current(), ThemeId::DarkDefault);
}

#[test]
fn test_malformed_state_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(FileStore::open(&path), Err(FolioError::Json { .. })));
}

#[test]
fn test_settings_picker_applies_live() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let store = FileStore::open(&path).unwrap();
    let mut shell = EditorShell::new(ThemeContext::new(Box::new(store)), LayoutConfig::default());

    shell.open_settings();
    shell.step_settings(1);
    assert_eq!(shell.theme().current(), ThemeId::Monokai);
    shell.step_settings(-2);
    assert_eq!(shell.theme().current(), ThemeId::OneDarkPro);
    shell.close_settings();

    // Closed picker ignores steps
    shell.step_settings(1);
    assert_eq!(shell.theme().current(), ThemeId::OneDarkPro);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(THEME_STORAGE_KEY).as_deref(), Some("one-dark-pro"));
}

#[test]
fn test_every_theme_defines_every_variable() {
    let mut theme = ThemeContext::new(Box::new(termfolio::theme::MemoryStore::new()));
    for id in ThemeId::ALL {
        theme.apply(id);
        assert_eq!(theme.style_vars().len(), 17, "{id}");
        assert!(theme
            .style_vars()
            .iter()
            .all(|(k, v)| k.starts_with("--color-vscode-") && v.starts_with('#')));
    }
}
