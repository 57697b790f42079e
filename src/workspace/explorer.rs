//! Explorer folder tree
//!
//! The tree is fixed; only the expanded/collapsed flag of each folder
//! changes. [`Explorer::rows`] flattens whatever is currently visible into
//! the rows the sidebar draws and the cursor moves over.

use super::files::{VirtualFile, ABOUT, CONTACT, HOME, PROJECTS, RESUME};

/// Collapsible folders in the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    Portfolio,
    Src,
    Components,
}

impl Folder {
    pub fn label(self) -> &'static str {
        match self {
            Folder::Portfolio => "PORTFOLIO-V1",
            Folder::Src => "src",
            Folder::Components => "components",
        }
    }
}

/// One visible line of the explorer tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerRow {
    Folder {
        folder: Folder,
        depth: usize,
        expanded: bool,
    },
    File {
        file: &'static VirtualFile,
        depth: usize,
    },
}

impl ExplorerRow {
    pub fn depth(&self) -> usize {
        match self {
            ExplorerRow::Folder { depth, .. } | ExplorerRow::File { depth, .. } => *depth,
        }
    }
}

/// Expanded flags for each folder; all start expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explorer {
    pub portfolio: bool,
    pub src: bool,
    pub components: bool,
}

impl Default for Explorer {
    fn default() -> Self {
        Explorer {
            portfolio: true,
            src: true,
            components: true,
        }
    }
}

impl Explorer {
    pub fn is_expanded(&self, folder: Folder) -> bool {
        match folder {
            Folder::Portfolio => self.portfolio,
            Folder::Src => self.src,
            Folder::Components => self.components,
        }
    }

    pub fn toggle(&mut self, folder: Folder) {
        let flag = match folder {
            Folder::Portfolio => &mut self.portfolio,
            Folder::Src => &mut self.src,
            Folder::Components => &mut self.components,
        };
        *flag = !*flag;
    }

    /// Visible rows, top to bottom
    pub fn rows(&self) -> Vec<ExplorerRow> {
        const COMPONENT_FILES: [&VirtualFile; 4] = [&ABOUT, &PROJECTS, &CONTACT, &RESUME];

        let mut rows = vec![ExplorerRow::Folder {
            folder: Folder::Portfolio,
            depth: 0,
            expanded: self.portfolio,
        }];
        if !self.portfolio {
            return rows;
        }

        rows.push(ExplorerRow::Folder {
            folder: Folder::Src,
            depth: 1,
            expanded: self.src,
        });
        if !self.src {
            return rows;
        }

        rows.push(ExplorerRow::File {
            file: &HOME,
            depth: 2,
        });
        rows.push(ExplorerRow::Folder {
            folder: Folder::Components,
            depth: 2,
            expanded: self.components,
        });
        if self.components {
            rows.extend(
                COMPONENT_FILES
                    .into_iter()
                    .map(|file| ExplorerRow::File { file, depth: 3 }),
            );
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_expanded_tree() {
        let rows = Explorer::default().rows();
        assert_eq!(rows.len(), 8);
        assert!(matches!(
            rows[2],
            ExplorerRow::File { file, depth: 2 } if file.id == "home.jsx"
        ));
        assert!(matches!(
            rows[7],
            ExplorerRow::File { file, depth: 3 } if file.id == "resume.pdf"
        ));
    }

    #[test]
    fn test_collapsing_hides_children() {
        let mut explorer = Explorer::default();
        explorer.toggle(Folder::Components);
        assert_eq!(explorer.rows().len(), 4);

        explorer.toggle(Folder::Portfolio);
        assert_eq!(explorer.rows().len(), 1);
        assert!(!explorer.is_expanded(Folder::Portfolio));
        // inner folders keep their own state
        assert!(explorer.is_expanded(Folder::Src));
        assert!(!explorer.is_expanded(Folder::Components));
    }
}
