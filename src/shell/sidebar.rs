//! Sidebar visibility and view selection

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarView {
    #[default]
    Explorer,
    Search,
    Extensions,
}

impl SidebarView {
    pub const ALL: [SidebarView; 3] = [
        SidebarView::Explorer,
        SidebarView::Search,
        SidebarView::Extensions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SidebarView::Explorer => "EXPLORER",
            SidebarView::Search => "SEARCH",
            SidebarView::Extensions => "EXTENSIONS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    pub view: SidebarView,
    /// Width in layout units
    pub width: u32,
}

impl SidebarState {
    pub fn new(width: u32) -> Self {
        SidebarState {
            open: true,
            view: SidebarView::Explorer,
            width,
        }
    }

    /// Activity-bar click: the shown view closes the sidebar, anything else
    /// opens it on that view.
    pub fn select(&mut self, view: SidebarView) {
        if self.open && self.view == view {
            self.open = false;
        } else {
            self.view = view;
            self.open = true;
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_same_view_closes() {
        let mut sidebar = SidebarState::new(280);
        sidebar.select(SidebarView::Explorer);
        assert!(!sidebar.open);
        sidebar.select(SidebarView::Explorer);
        assert!(sidebar.open);
        assert_eq!(sidebar.view, SidebarView::Explorer);
    }

    #[test]
    fn test_select_other_view_switches() {
        let mut sidebar = SidebarState::new(280);
        sidebar.select(SidebarView::Search);
        assert!(sidebar.open);
        assert_eq!(sidebar.view, SidebarView::Search);

        sidebar.toggle();
        sidebar.select(SidebarView::Extensions);
        assert!(sidebar.open);
        assert_eq!(sidebar.view, SidebarView::Extensions);
    }
}
