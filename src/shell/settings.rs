//! Theme picker overlay
//!
//! Moving the selection applies the highlighted theme immediately; closing
//! the picker just hides it.

use crate::theme::ThemeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsState {
    pub open: bool,
    pub selected: usize,
}

impl SettingsState {
    /// Show the picker with the active theme highlighted
    pub fn open(&mut self, current: ThemeId) {
        self.open = true;
        self.selected = current.index();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn selected_theme(&self) -> ThemeId {
        ThemeId::ALL[self.selected % ThemeId::ALL.len()]
    }

    /// Step the highlight by `delta`, wrapping, and return the theme now
    /// highlighted
    pub fn step(&mut self, delta: isize) -> ThemeId {
        let n = ThemeId::ALL.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(n) as usize;
        self.selected_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps_both_ways() {
        let mut settings = SettingsState::default();
        settings.open(ThemeId::DarkDefault);
        assert_eq!(settings.step(-1), ThemeId::OneDarkPro);
        assert_eq!(settings.step(1), ThemeId::DarkDefault);
        assert_eq!(settings.step(1), ThemeId::Monokai);
    }

    #[test]
    fn test_open_highlights_current() {
        let mut settings = SettingsState::default();
        settings.open(ThemeId::Dracula);
        assert!(settings.open);
        assert_eq!(settings.selected_theme(), ThemeId::Dracula);
        settings.close();
        assert!(!settings.open);
    }
}
