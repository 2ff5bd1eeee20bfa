use {
    crate::{
        menu::{MenuEntry, COPYRIGHT, FOOTER_LINKS, MENU_ENTRIES},
        trending::TrendingTag,
    },
    dioxus::prelude::*,
};

pub const QUIET_PLACEHOLDER: &str = "Quiet today...";

/// The sidebar shown beside every page: destinations, trending hashtags and footer links.
///
/// Every row is a plain link, so following one is a navigation request to the
/// server. The entry whose path equals `current_path` is rendered active.
#[component]
pub fn Sidebar(current_path: String, tags: Vec<TrendingTag>) -> Element {
    rsx! {
        aside {
            class: "sidebar",
            nav {
                class: "sidebar-menu",
                for entry in MENU_ENTRIES {
                    MenuRow {
                        key: "{entry.path}",
                        entry: entry,
                        active: entry.is_active(&current_path),
                    }
                }
            }
            TrendingList { tags: tags }
            SidebarFooter {}
        }
    }
}

#[component]
fn MenuRow(entry: MenuEntry, active: bool) -> Element {
    let class = if active { "nav-item active" } else { "nav-item" };
    let stroke = MenuEntry::stroke_width(active);
    rsx! {
        a {
            class: "{class}",
            href: entry.path,
            span {
                class: "icon",
                "data-icon": entry.icon.glyph(),
                "data-stroke": "{stroke}",
            }
            span { class: "label", "{entry.label}" }
        }
    }
}

#[component]
fn TrendingList(tags: Vec<TrendingTag>) -> Element {
    rsx! {
        section {
            class: "trending",
            h3 { "Trending" }
            if tags.is_empty() {
                p { class: "trending-empty", "{QUIET_PLACEHOLDER}" }
            } else {
                ul {
                    // no dedup, so the position is the only stable key
                    for (index, tag) in tags.iter().enumerate() {
                        {
                            let href = tag.href();
                            let name = tag.name().to_string();
                            rsx! {
                                li {
                                    key: "{index}",
                                    a { class: "trending-tag", href: "{href}", "{name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarFooter() -> Element {
    rsx! {
        footer {
            class: "sidebar-footer",
            nav {
                for link in FOOTER_LINKS {
                    a { key: "{link.path}", href: link.path, "{link.label}" }
                }
            }
            small { "{COPYRIGHT}" }
        }
    }
}
