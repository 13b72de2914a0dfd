// Demo pages, registered after startup the way any content extension would.

use crate::modules::navigation::{Navigator, ShellSurface};
use crate::modules::pages::BuiltinPage;

pub const DEMO_PAGES: &[BuiltinPage] = &[
    // No content: shows the placeholder renderer
    BuiltinPage {
        id: "blog",
        label: "Blog",
        icon: "fas fa-blog",
        content: None,
    },
    BuiltinPage {
        id: "services",
        label: "Services",
        icon: "fas fa-cogs",
        content: Some(include_str!("assets/services.html")),
    },
    BuiltinPage {
        id: "skills",
        label: "Skills",
        icon: "fas fa-chart-bar",
        content: Some(include_str!("assets/skills.html")),
    },
    BuiltinPage {
        id: "demo",
        label: "Demo",
        icon: "fas fa-flask",
        content: Some(include_str!("assets/demo.html")),
    },
];

pub fn register_demo_pages<S: ShellSurface>(navigator: &mut Navigator<S>) {
    for page in DEMO_PAGES {
        page.register_with(navigator);
    }
    log::info!("Demo pages added: {}", DEMO_PAGES.len());
}
