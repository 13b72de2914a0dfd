// Built-in pages registered at startup.

use crate::modules::navigation::{Navigator, ShellSurface};
use crate::modules::registry::static_renderer;

pub struct BuiltinPage {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub content: Option<&'static str>,
}

impl BuiltinPage {
    pub fn register_with<S: ShellSurface>(&self, navigator: &mut Navigator<S>) -> bool {
        navigator.register(
            self.id,
            self.label,
            Some(self.icon.to_string()),
            self.content.map(static_renderer),
        )
    }
}

pub const DEFAULT_PAGES: &[BuiltinPage] = &[
    BuiltinPage {
        id: "home",
        label: "Home",
        icon: "fas fa-home",
        content: Some(include_str!("assets/home.html")),
    },
    BuiltinPage {
        id: "projects",
        label: "Projects",
        icon: "fas fa-folder-open",
        content: Some(include_str!("assets/projects.html")),
    },
    BuiltinPage {
        id: "about",
        label: "About",
        icon: "fas fa-user",
        content: Some(include_str!("assets/about.html")),
    },
    BuiltinPage {
        id: "contact",
        label: "Contact",
        icon: "fas fa-envelope",
        content: Some(include_str!("assets/contact.html")),
    },
];

pub fn register_default_pages<S: ShellSurface>(navigator: &mut Navigator<S>) {
    for page in DEFAULT_PAGES {
        page.register_with(navigator);
    }
}
