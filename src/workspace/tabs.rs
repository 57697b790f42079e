//! Ordered open-tab sequence and active-tab pointer

/// An open, closable reference to a virtual file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub name: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Tab {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Open tabs in display order.
///
/// Ids are unique. When the sequence is non-empty `active` names one of its
/// members; when it is empty `active` is `None`.
#[derive(Debug, Clone, Default)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: Option<String>,
}

impl TabSet {
    /// A single active tab
    pub fn with_tab(id: &str, name: &str) -> Self {
        TabSet {
            tabs: vec![Tab::new(id, name)],
            active: Some(id.to_string()),
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_index(&self) -> Option<usize> {
        let active = self.active.as_deref()?;
        self.position(active)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Append a tab for `id` unless one is already open, then focus it.
    /// Returns `true` when a tab was created.
    pub fn open(&mut self, id: &str, name: &str) -> bool {
        let created = !self.contains(id);
        if created {
            self.tabs.push(Tab::new(id, name));
        }
        self.active = Some(id.to_string());
        created
    }

    /// Remove the tab for `id`. Closing the active tab moves focus to the
    /// first remaining tab, or to nothing when none remain.
    /// Returns `true` when a tab was removed.
    pub fn close(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tabs.remove(index);
        if self.active.as_deref() == Some(id) {
            self.active = self.tabs.first().map(|t| t.id.clone());
        }
        true
    }

    /// Focus an already-open tab; unknown ids are ignored
    pub fn activate(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.active = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Focus the tab after the active one, wrapping
    pub fn next(&mut self) {
        self.cycle(1);
    }

    /// Focus the tab before the active one, wrapping
    pub fn prev(&mut self) {
        self.cycle(self.tabs.len().saturating_sub(1));
    }

    fn cycle(&mut self, step: usize) {
        if self.tabs.is_empty() {
            return;
        }
        let current = self.active_index().unwrap_or(0);
        let next = (current + step) % self.tabs.len();
        self.active = Some(self.tabs[next].id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &TabSet) -> Vec<&str> {
        set.tabs().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_open_appends_once_and_focuses() {
        let mut set = TabSet::with_tab("home.jsx", "home.jsx");
        assert!(set.open("about.html", "about.html"));
        assert!(set.open("contact.css", "contact.css"));
        assert!(!set.open("about.html", "about.html"));

        assert_eq!(ids(&set), vec!["home.jsx", "about.html", "contact.css"]);
        assert_eq!(set.active(), Some("about.html"));
    }

    #[test]
    fn test_close_active_moves_to_first() {
        let mut set = TabSet::with_tab("home.jsx", "home.jsx");
        set.open("about.html", "about.html");
        set.open("projects.json", "projects.json");

        assert!(set.close("projects.json"));
        assert_eq!(set.active(), Some("home.jsx"));
        assert_eq!(ids(&set), vec!["home.jsx", "about.html"]);
    }

    #[test]
    fn test_close_inactive_keeps_focus_and_order() {
        let mut set = TabSet::with_tab("home.jsx", "home.jsx");
        set.open("about.html", "about.html");
        set.open("projects.json", "projects.json");

        assert!(set.close("about.html"));
        assert_eq!(set.active(), Some("projects.json"));
        assert_eq!(ids(&set), vec!["home.jsx", "projects.json"]);
        assert!(!set.close("about.html"));
    }

    #[test]
    fn test_close_last_clears_pointer() {
        let mut set = TabSet::with_tab("home.jsx", "home.jsx");
        set.close("home.jsx");
        assert!(set.is_empty());
        assert_eq!(set.active(), None);
        assert_eq!(set.active_index(), None);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut set = TabSet::with_tab("a", "a");
        set.open("b", "b");
        set.open("c", "c");
        set.next();
        assert_eq!(set.active(), Some("a"));
        set.prev();
        assert_eq!(set.active(), Some("c"));
        set.prev();
        assert_eq!(set.active(), Some("b"));
    }
}
