//! Static catalog of virtual files

/// Title used when no tab is active or the active id has no entry
pub const FALLBACK_TITLE: &str = "Bhavesh Nankani | Portfolio";

/// Which content view renders a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Home,
    About,
    Projects,
    Contact,
    Resume,
    GitHub,
}

/// A named, non-persistent content unit that can be opened as a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualFile {
    pub id: &'static str,
    /// Label shown on the tab; may differ from `id`
    pub name: &'static str,
    /// Explorer path, empty for files that only open from the activity bar
    pub path: &'static str,
    pub kind: FileKind,
    pub title: &'static str,
}

impl VirtualFile {
    /// Whether the search view lists this file
    pub fn is_searchable(&self) -> bool {
        !matches!(self.kind, FileKind::Resume | FileKind::GitHub)
    }

    /// Language label shown in the status bar
    pub fn language(&self) -> &'static str {
        match self.kind {
            FileKind::Home => "JavaScript JSX",
            FileKind::About => "HTML",
            FileKind::Projects => "JSON",
            FileKind::Contact => "CSS",
            FileKind::Resume => "PDF",
            FileKind::GitHub => "Markdown",
        }
    }
}

pub const HOME: VirtualFile = VirtualFile {
    id: "home.jsx",
    name: "home.jsx",
    path: "src/home.jsx",
    kind: FileKind::Home,
    title: "Home | Bhavesh Nankani",
};

pub const ABOUT: VirtualFile = VirtualFile {
    id: "about.html",
    name: "about.html",
    path: "src/components/about.html",
    kind: FileKind::About,
    title: "About | Bhavesh Nankani",
};

pub const PROJECTS: VirtualFile = VirtualFile {
    id: "projects.json",
    name: "projects.json",
    path: "src/components/projects.json",
    kind: FileKind::Projects,
    title: "Projects | Bhavesh Nankani",
};

pub const CONTACT: VirtualFile = VirtualFile {
    id: "contact.css",
    name: "contact.css",
    path: "src/components/contact.css",
    kind: FileKind::Contact,
    title: "Contact | Bhavesh Nankani",
};

pub const RESUME: VirtualFile = VirtualFile {
    id: "resume.pdf",
    name: "Bhavesh_Nankani_resume.pdf",
    path: "src/components/resume.pdf",
    kind: FileKind::Resume,
    title: "Resume | Bhavesh Nankani",
};

pub const GITHUB: VirtualFile = VirtualFile {
    id: "github",
    name: "github.profile",
    path: "",
    kind: FileKind::GitHub,
    title: "GitHub | Bhavesh Nankani",
};

/// Every openable file, in explorer order
pub static FILES: [VirtualFile; 6] = [HOME, ABOUT, PROJECTS, CONTACT, RESUME, GITHUB];

pub fn lookup(id: &str) -> Option<&'static VirtualFile> {
    FILES.iter().find(|f| f.id == id)
}

/// Window title for the active tab
pub fn window_title(active: Option<&str>) -> &'static str {
    active
        .and_then(lookup)
        .map(|f| f.title)
        .unwrap_or(FALLBACK_TITLE)
}

/// Searchable files whose display name contains `query`, ignoring case.
/// An empty query matches nothing.
pub fn search(query: &str) -> Vec<&'static VirtualFile> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    FILES
        .iter()
        .filter(|f| f.is_searchable() && f.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(window_title(Some("about.html")), "About | Bhavesh Nankani");
        assert_eq!(window_title(Some("github")), "GitHub | Bhavesh Nankani");
        assert_eq!(window_title(Some("notes.txt")), FALLBACK_TITLE);
        assert_eq!(window_title(None), FALLBACK_TITLE);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits: Vec<_> = search("JSON").iter().map(|f| f.id).collect();
        assert_eq!(hits, vec!["projects.json"]);

        let hits: Vec<_> = search(".").iter().map(|f| f.id).collect();
        assert_eq!(
            hits,
            vec!["home.jsx", "about.html", "projects.json", "contact.css"]
        );
        assert!(search("").is_empty());
        assert!(search("resume").is_empty());
    }
}
