//! Theme registry
//!
//! Seven built-in palettes, each a fixed table of seventeen colour roles.
//! The registry itself is static; the mutable part (which theme is active,
//! and where that choice is remembered) lives in [`context::ThemeContext`]
//! and [`storage`].
//!
//! - [`ThemeId`]: the enumerated set of theme identifiers
//! - [`ColorRole`]: semantic colour roles shared by every palette
//! - [`Palette`]: one theme's display name and colour table
//! - [`css_var_name`]: the role-name → style-variable transform

pub mod context;
pub mod storage;

use crate::error::FolioError;
use std::fmt;
use std::str::FromStr;

pub use context::ThemeContext;
pub use storage::{FileStore, MemoryStore, ThemeStore};

/// Key under which the selected theme id is persisted
pub const THEME_STORAGE_KEY: &str = "vscode-theme";

/// Namespace prefix for every derived style variable
pub const STYLE_VAR_PREFIX: &str = "--color-vscode-";

/// Identifier of a built-in theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    DarkDefault,
    Monokai,
    GithubDark,
    GithubDarkDimmed,
    Dracula,
    NightOwl,
    OneDarkPro,
}

impl ThemeId {
    /// All themes in picker order
    pub const ALL: [ThemeId; 7] = [
        ThemeId::DarkDefault,
        ThemeId::Monokai,
        ThemeId::GithubDark,
        ThemeId::GithubDarkDimmed,
        ThemeId::Dracula,
        ThemeId::NightOwl,
        ThemeId::OneDarkPro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::DarkDefault => "dark-default",
            ThemeId::Monokai => "monokai",
            ThemeId::GithubDark => "github-dark",
            ThemeId::GithubDarkDimmed => "github-dark-dimmed",
            ThemeId::Dracula => "dracula",
            ThemeId::NightOwl => "night-owl",
            ThemeId::OneDarkPro => "one-dark-pro",
        }
    }

    /// Position of this theme in [`ThemeId::ALL`]
    pub fn index(self) -> usize {
        ThemeId::ALL
            .iter()
            .position(|id| *id == self)
            .unwrap_or_default()
    }

    pub fn palette(self) -> &'static Palette {
        &PALETTES[self.index()]
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FolioError::UnknownTheme(s.to_string()))
    }
}

/// Semantic colour role, named the way palettes name their keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Bg,
    Sidebar,
    ActivityBar,
    TabBorder,
    TabInactive,
    Hover,
    Selection,
    Border,
    Text,
    TextMuted,
    StatusBar,
    ActivityBarBadge,
    SyntaxBlue,
    SyntaxGreen,
    SyntaxOrange,
    SyntaxPurple,
    SyntaxYellow,
}

impl ColorRole {
    pub const COUNT: usize = 17;

    /// Roles in palette table order
    pub const ALL: [ColorRole; ColorRole::COUNT] = [
        ColorRole::Bg,
        ColorRole::Sidebar,
        ColorRole::ActivityBar,
        ColorRole::TabBorder,
        ColorRole::TabInactive,
        ColorRole::Hover,
        ColorRole::Selection,
        ColorRole::Border,
        ColorRole::Text,
        ColorRole::TextMuted,
        ColorRole::StatusBar,
        ColorRole::ActivityBarBadge,
        ColorRole::SyntaxBlue,
        ColorRole::SyntaxGreen,
        ColorRole::SyntaxOrange,
        ColorRole::SyntaxPurple,
        ColorRole::SyntaxYellow,
    ];

    /// camelCase role name as it appears in palette tables
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::Bg => "bg",
            ColorRole::Sidebar => "sidebar",
            ColorRole::ActivityBar => "activityBar",
            ColorRole::TabBorder => "tabBorder",
            ColorRole::TabInactive => "tabInactive",
            ColorRole::Hover => "hover",
            ColorRole::Selection => "selection",
            ColorRole::Border => "border",
            ColorRole::Text => "text",
            ColorRole::TextMuted => "textMuted",
            ColorRole::StatusBar => "statusBar",
            ColorRole::ActivityBarBadge => "activityBarBadge",
            ColorRole::SyntaxBlue => "syntaxBlue",
            ColorRole::SyntaxGreen => "syntaxGreen",
            ColorRole::SyntaxOrange => "syntaxOrange",
            ColorRole::SyntaxPurple => "syntaxPurple",
            ColorRole::SyntaxYellow => "syntaxYellow",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Derive the style-variable name for a role key.
///
/// Every uppercase letter starts a new hyphen-separated word; the result is
/// lower-cased and prefixed with [`STYLE_VAR_PREFIX`].
pub fn css_var_name(role_key: &str) -> String {
    let mut name = String::with_capacity(STYLE_VAR_PREFIX.len() + role_key.len() + 4);
    name.push_str(STYLE_VAR_PREFIX);
    for c in role_key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// One theme's display name and colour table.
///
/// Colours are stored as `0xRRGGBB` and indexed by [`ColorRole`] order.
#[derive(Debug)]
pub struct Palette {
    pub name: &'static str,
    colors: [u32; ColorRole::COUNT],
}

impl Palette {
    /// Raw `0xRRGGBB` value for a role
    pub fn color(&self, role: ColorRole) -> u32 {
        self.colors[role.slot()]
    }

    pub fn rgb(&self, role: ColorRole) -> (u8, u8, u8) {
        let c = self.color(role);
        ((c >> 16) as u8, (c >> 8) as u8, c as u8)
    }

    /// Colour formatted as a lowercase `#rrggbb` string
    pub fn hex(&self, role: ColorRole) -> String {
        format!("#{:06x}", self.color(role))
    }

    pub fn roles(&self) -> impl Iterator<Item = (ColorRole, u32)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.color(role)))
    }
}

#[rustfmt::skip]
static PALETTES: [Palette; 7] = [
    Palette {
        name: "Dark+ (default)",
        colors: [
            0x1e1e1e, 0x252526, 0x333333, 0x2d2d2d, 0x2d2d2d, 0x2a2d2e, 0x094771, 0x3e3e3e,
            0xcccccc, 0x858585, 0x007acc, 0x007acc,
            0x4fc1ff, 0x6a9955, 0xce9178, 0xc586c0, 0xdcdcaa,
        ],
    },
    Palette {
        name: "Monokai",
        colors: [
            0x272822, 0x2e2e2e, 0x1e1e1e, 0x1e1e1e, 0x34352f, 0x3e3d32, 0x49483e, 0x3e3d32,
            0xf8f8f2, 0x75715e, 0x414339, 0xf92672,
            0x66d9ef, 0xa6e22e, 0xfd971f, 0xae81ff, 0xe6db74,
        ],
    },
    Palette {
        name: "GitHub Dark",
        colors: [
            0x0d1117, 0x161b22, 0x21262d, 0x161b22, 0x1c2128, 0x30363d, 0x1f6feb, 0x30363d,
            0xc9d1d9, 0x8b949e, 0x21262d, 0x007acc,
            0x79c0ff, 0x7ee787, 0xffa657, 0xd2a8ff, 0xf0d478,
        ],
    },
    Palette {
        name: "GitHub Dark Dimmed",
        colors: [
            0x22272e, 0x2d333b, 0x373e47, 0x2d333b, 0x2d333b, 0x3a4149, 0x539bf5, 0x444c56,
            0xadbac7, 0x768390, 0x373e47, 0x007acc,
            0x6cb6ff, 0x8ddb8c, 0xf69d50, 0xdcbdfb, 0xdaaa3f,
        ],
    },
    Palette {
        name: "Dracula",
        colors: [
            0x282a36, 0x21222c, 0x191a21, 0x191a21, 0x21222c, 0x44475a, 0x44475a, 0x44475a,
            0xf8f8f2, 0x6272a4, 0x191a21, 0xbd93f9,
            0x8be9fd, 0x50fa7b, 0xffb86c, 0xbd93f9, 0xf1fa8c,
        ],
    },
    Palette {
        name: "Night Owl",
        colors: [
            0x011627, 0x01111d, 0x000c18, 0x000c18, 0x01111d, 0x1d3b53, 0x1d3b53, 0x1d3b53,
            0xd6deeb, 0x637777, 0x000c18, 0xc792ea,
            0x82aaff, 0xaddb67, 0xf78c6c, 0xc792ea, 0xffcb8b,
        ],
    },
    Palette {
        name: "One Dark Pro",
        colors: [
            0x282c34, 0x21252b, 0x1a1d23, 0x181a1f, 0x21252b, 0x2c313c, 0x2c313c, 0x181a1f,
            0xabb2bf, 0x5c6370, 0x21252b, 0x61afef,
            0x61afef, 0x98c379, 0xd19a66, 0xc678dd, 0xe5c07b,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_var_name_splits_camel_case() {
        assert_eq!(css_var_name("bg"), "--color-vscode-bg");
        assert_eq!(css_var_name("textMuted"), "--color-vscode-text-muted");
        assert_eq!(
            css_var_name("activityBarBadge"),
            "--color-vscode-activity-bar-badge"
        );
    }

    #[test]
    fn test_theme_id_round_trips_through_str() {
        for id in ThemeId::ALL {
            assert_eq!(id.as_str().parse::<ThemeId>().unwrap(), id);
        }
        assert!(matches!(
            "solarized".parse::<ThemeId>(),
            Err(FolioError::UnknownTheme(name)) if name == "solarized"
        ));
    }

    #[test]
    fn test_palette_lookup() {
        let dracula = ThemeId::Dracula.palette();
        assert_eq!(dracula.name, "Dracula");
        assert_eq!(dracula.hex(ColorRole::Bg), "#282a36");
        assert_eq!(dracula.rgb(ColorRole::SyntaxGreen), (0x50, 0xfa, 0x7b));
        assert_eq!(ThemeId::DarkDefault.palette().hex(ColorRole::Selection), "#094771");
    }

    #[test]
    fn test_role_slots_follow_table_order() {
        for (i, role) in ColorRole::ALL.into_iter().enumerate() {
            assert_eq!(role.slot(), i);
        }
    }
}
