//! The active theme and its derived style variables

use super::storage::ThemeStore;
use super::{css_var_name, Palette, ThemeId, THEME_STORAGE_KEY};
use crate::error::Result;
use rustc_hash::FxHashMap;

/// Read the persisted theme id, falling back to the default when the key is
/// missing or names a theme that no longer exists.
pub fn stored_theme(store: &dyn ThemeStore) -> ThemeId {
    match store.get(THEME_STORAGE_KEY) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %value, "ignoring unrecognised stored theme");
            ThemeId::default()
        }),
        None => ThemeId::default(),
    }
}

/// Owns the active theme, the style variables derived from it, and the
/// store the selection is persisted to.
pub struct ThemeContext {
    current: ThemeId,
    vars: FxHashMap<String, String>,
    store: Box<dyn ThemeStore>,
}

impl ThemeContext {
    /// Load the stored preference and apply it
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        let current = stored_theme(store.as_ref());
        let mut ctx = ThemeContext {
            current,
            vars: FxHashMap::default(),
            store,
        };
        ctx.apply(current);
        ctx
    }

    pub fn current(&self) -> ThemeId {
        self.current
    }

    pub fn palette(&self) -> &'static Palette {
        self.current.palette()
    }

    /// Make `id` the active theme: re-derive every style variable and
    /// persist the id.
    ///
    /// A failed write is logged and otherwise ignored; the theme still
    /// applies for this session.
    pub fn apply(&mut self, id: ThemeId) {
        let palette = id.palette();
        self.vars.clear();
        for (role, _) in palette.roles() {
            self.vars.insert(css_var_name(role.key()), palette.hex(role));
        }
        self.current = id;

        if let Err(e) = self.store.set(THEME_STORAGE_KEY, id.as_str()) {
            tracing::warn!(theme = %id, error = %e, "failed to persist theme");
        }
        tracing::info!(theme = %id, "applied theme");
    }

    /// Apply a theme by its string id.
    ///
    /// Unknown ids are rejected without touching the active theme or the
    /// persisted value.
    pub fn select(&mut self, id: &str) -> Result<ThemeId> {
        let id: ThemeId = id.parse()?;
        self.apply(id);
        Ok(id)
    }

    /// Value of a derived style variable, e.g. `--color-vscode-text-muted`
    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn style_vars(&self) -> &FxHashMap<String, String> {
        &self.vars
    }

    /// What a fresh context would load from the same store
    pub fn stored(&self) -> ThemeId {
        stored_theme(self.store.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::storage::MemoryStore;
    use crate::theme::ColorRole;

    #[test]
    fn test_defaults_when_nothing_stored() {
        let ctx = ThemeContext::new(Box::new(MemoryStore::new()));
        assert_eq!(ctx.current(), ThemeId::DarkDefault);
        assert_eq!(ctx.style_var("--color-vscode-bg"), Some("#1e1e1e"));
        assert_eq!(ctx.style_vars().len(), ColorRole::COUNT);
    }

    #[test]
    fn test_loads_stored_preference() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "night-owl").unwrap();
        let ctx = ThemeContext::new(Box::new(store));
        assert_eq!(ctx.current(), ThemeId::NightOwl);
        assert_eq!(ctx.style_var("--color-vscode-text-muted"), Some("#637777"));
    }

    #[test]
    fn test_unrecognised_stored_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "solarized").unwrap();
        assert_eq!(stored_theme(&store), ThemeId::DarkDefault);
    }

    #[test]
    fn test_select_rederives_variables() {
        let mut ctx = ThemeContext::new(Box::new(MemoryStore::new()));
        ctx.select("monokai").unwrap();
        assert_eq!(ctx.style_var("--color-vscode-activity-bar-badge"), Some("#f92672"));
        assert_eq!(ctx.stored(), ThemeId::Monokai);
    }
}
