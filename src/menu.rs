//! The fixed destinations of the sidebar.

use crate::trending::hashtag_from_path;

pub const ACTIVE_STROKE: f32 = 2.5;
pub const INACTIVE_STROKE: f32 = 2.0;

pub const COPYRIGHT: &str = "© 2025 SphereMint";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Home,
    Compass,
    Globe,
    Users,
    MessageCircle,
    Bookmark,
    User,
    Settings,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "home",
            Icon::Compass => "compass",
            Icon::Globe => "globe",
            Icon::Users => "users",
            Icon::MessageCircle => "message-circle",
            Icon::Bookmark => "bookmark",
            Icon::User => "user",
            Icon::Settings => "settings",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub path: &'static str,
}

impl MenuEntry {
    pub fn is_active<S: AsRef<str>>(&self, current_path: S) -> bool {
        self.path == current_path.as_ref()
    }

    pub fn stroke_width(active: bool) -> f32 {
        if active {
            ACTIVE_STROKE
        } else {
            INACTIVE_STROKE
        }
    }
}

pub const MENU_ENTRIES: [MenuEntry; 8] = [
    MenuEntry { icon: Icon::Home, label: "Home", path: "/" },
    MenuEntry { icon: Icon::Compass, label: "Explore", path: "/explore" },
    MenuEntry { icon: Icon::Globe, label: "Sphere", path: "/sphere" },
    MenuEntry { icon: Icon::Users, label: "Rooms", path: "/rooms" },
    MenuEntry { icon: Icon::MessageCircle, label: "Messages", path: "/messages" },
    MenuEntry { icon: Icon::Bookmark, label: "Saved", path: "/saved" },
    MenuEntry { icon: Icon::User, label: "Profile", path: "/profile" },
    MenuEntry { icon: Icon::Settings, label: "Settings", path: "/settings" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const FOOTER_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Privacy", path: "/privacy" },
    FooterLink { label: "Terms", path: "/terms" },
    FooterLink { label: "About", path: "/about" },
    FooterLink { label: "Contact", path: "/contact" },
];

pub fn active_entry<S: AsRef<str>>(current_path: S) -> Option<&'static MenuEntry> {
    MENU_ENTRIES
        .iter()
        .find(|entry| entry.is_active(current_path.as_ref()))
}

/// Page title for a destination the client knows about, `None` for anything else.
pub fn destination_title<S: AsRef<str>>(path: S) -> Option<String> {
    let path = path.as_ref();
    if let Some(entry) = active_entry(path) {
        return Some(entry.label.to_string());
    }
    if let Some(link) = FOOTER_LINKS.iter().find(|link| link.path == path) {
        return Some(link.label.to_string());
    }
    hashtag_from_path(path).map(|tag| format!("#{tag}"))
}
