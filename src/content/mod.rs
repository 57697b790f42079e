//! Static page content for each virtual file
//!
//! Views are plain text plus a list of [`Link`]s. A link is the only way a
//! view can affect the shell: activating one asks the shell to open a file.

use crate::workspace::FileKind;

/// A navigation request a view offers to the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub id: &'static str,
    pub name: &'static str,
}

/// Rendered body of one virtual file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    pub heading: &'static str,
    pub lines: &'static [&'static str],
    pub links: &'static [Link],
}

/// Body of a file that is not in the catalog
pub const MISSING: ContentView = ContentView {
    heading: "File not found",
    lines: &["This file could not be opened."],
    links: &[],
};

/// Shown when every tab has been closed
pub const WELCOME: ContentView = ContentView {
    heading: "No open editors",
    lines: &[
        "Open a file from the explorer, or press Ctrl+T for the terminal",
        "and type 'help'.",
    ],
    links: &[
        Link {
            label: "Open home.jsx",
            id: "home.jsx",
            name: "home.jsx",
        },
    ],
};

const HOME: ContentView = ContentView {
    heading: "home.jsx",
    lines: &[
        "const bhavesh = {",
        "  role: \"Full-Stack Software Engineer\",",
        "  location: \"Philadelphia, PA\",",
        "  education: \"Arcadia University\",",
        "  status: \"Available for internships!\",",
        "};",
        "",
        "export default bhavesh;",
    ],
    links: &[],
};

const ABOUT: ContentView = ContentView {
    heading: "About",
    lines: &[
        "Full-Stack Software Engineer",
        "",
        "Computer Science student focused on developing strong foundations in",
        "algorithms, data structures, and software engineering principles.",
        "Aspiring software engineer passionate about turning complex ideas into",
        "practical, well-designed applications.",
        "",
        "📍 Philadelphia, PA    🎓 Arcadia University",
        "",
        "🏆 First Class Honours   15+ Technologies   3 Certifications   ✓ CI/CD Pipelines",
    ],
    links: &[
        Link {
            label: "View Projects",
            id: "projects.json",
            name: "projects.json",
        },
        Link {
            label: "Resume",
            id: "resume.pdf",
            name: "Bhavesh_Nankani_resume.pdf",
        },
        Link {
            label: "Contact Me",
            id: "contact.css",
            name: "contact.css",
        },
    ],
};

const PROJECTS: ContentView = ContentView {
    heading: "Projects",
    lines: &[
        "GrowAhead: Micro-Investment Fintech Platform",
        "  Next.js 15, TypeScript, Node.js, PostgreSQL, AWS Elastic Beanstalk, AWS RDS, Vercel",
        "  demo   https://growahead-beta.vercel.app",
        "  source https://github.com/BhaveshNank/GrowAhead",
        "",
        "VisionTech: AI-Powered E-Commerce Platform",
        "  Python, Flask, Google Gemini AI, MongoDB, React.js, Vercel, Render",
        "  demo   https://vision-tech-beta.vercel.app",
        "  source https://github.com/BhaveshNank/VisionTech",
        "",
        "JavaChatApp: Multi-threaded Java Chat Server",
        "  Java, Swing, Sockets, Multi-threading, Azure DevOps",
        "  source https://github.com/BhaveshNank/JavaChatApp",
    ],
    links: &[],
};

const CONTACT: ContentView = ContentView {
    heading: "Get In Touch",
    lines: &[
        "email     bhaveshnankani@outlook.com",
        "phone     +44 7398 235749",
        "linkedin  linkedin.com/in/ab-nankani",
        "github    github.com/BhaveshNank",
    ],
    links: &[Link {
        label: "Resume",
        id: "resume.pdf",
        name: "Bhavesh_Nankani_resume.pdf",
    }],
};

const RESUME: ContentView = ContentView {
    heading: "Bhavesh_Nankani_resume.pdf",
    lines: &[
        "PDF preview is not available in the terminal.",
        "The resume is published alongside the portfolio as resume.pdf.",
    ],
    links: &[],
};

const GITHUB: ContentView = ContentView {
    heading: "github.profile",
    lines: &[
        "github.com/BhaveshNank",
        "",
        "Pinned: GrowAhead, VisionTech, JavaChatApp",
    ],
    links: &[],
};

pub fn view(kind: FileKind) -> &'static ContentView {
    match kind {
        FileKind::Home => &HOME,
        FileKind::About => &ABOUT,
        FileKind::Projects => &PROJECTS,
        FileKind::Contact => &CONTACT,
        FileKind::Resume => &RESUME,
        FileKind::GitHub => &GITHUB,
    }
}

/// An entry in the extensions sidebar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extension {
    pub name: &'static str,
    pub publisher: &'static str,
    pub description: &'static str,
    pub downloads: &'static str,
    pub rating: f32,
    pub installed: bool,
}

const fn ext(
    name: &'static str,
    publisher: &'static str,
    description: &'static str,
    downloads: &'static str,
    rating: f32,
    installed: bool,
) -> Extension {
    Extension {
        name,
        publisher,
        description,
        downloads,
        rating,
        installed,
    }
}

pub const EXTENSIONS: [Extension; 14] = [
    ext("Python", "ms-python", "IntelliSense, linting, debugging support", "84.2M", 4.5, true),
    ext("Java Extension Pack", "vscjava", "Popular Java extensions", "15.8M", 4.3, true),
    ext("TypeScript", "microsoft", "TypeScript language support", "45.1M", 4.7, true),
    ext("JavaScript (ES6)", "xabikos", "Code snippets for JavaScript", "12.5M", 4.4, true),
    ext("ES7+ React/Redux", "dsznajder", "React/Redux snippets", "9.8M", 4.6, true),
    ext("Next.js", "pulkitgangwar", "Next.js snippets and utilities", "234K", 4.2, true),
    ext("Node.js", "ms-vscode", "Node.js development tools", "18.7M", 4.5, true),
    ext("Flask Snippets", "cstrap", "Flask code snippets", "156K", 4.1, true),
    ext("PostgreSQL", "ckolkman", "PostgreSQL syntax support", "2.1M", 4.3, true),
    ext("MongoDB", "mongodb", "MongoDB for VS Code", "3.4M", 4.4, true),
    ext("AWS Toolkit", "amazonwebservices", "AWS development toolkit", "5.2M", 4.2, true),
    ext("GitLens", "eamodio", "Git supercharged", "28.5M", 4.8, true),
    ext("Docker", "ms-azuretools", "Docker container management", "19.3M", 4.6, false),
    ext(
        "Tailwind CSS IntelliSense",
        "bradlc",
        "Intelligent Tailwind CSS tooling",
        "11.2M",
        4.7,
        true,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::lookup;

    #[test]
    fn test_links_point_at_catalog_files() {
        for kind in [
            FileKind::Home,
            FileKind::About,
            FileKind::Projects,
            FileKind::Contact,
            FileKind::Resume,
            FileKind::GitHub,
        ] {
            for link in view(kind).links {
                let file = lookup(link.id).expect("link target missing from catalog");
                assert_eq!(file.name, link.name);
            }
        }
    }
}
