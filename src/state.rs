// Shared state managed by Tauri.
// Commands lock the navigator for the whole of one event, which keeps click
// and history navigation from interleaving.

use serde::Serialize;
use std::sync::Mutex;

use crate::modules::navigation::{Navigator, ShellSurface};
use crate::modules::registry::MenuItem;
use crate::settings::Settings;
use crate::shell::WebviewShell;

pub struct AppState {
    pub navigator: Mutex<Navigator<WebviewShell>>,
    pub settings: Settings,
}

impl AppState {
    pub fn new(navigator: Navigator<WebviewShell>, settings: Settings) -> Self {
        Self {
            navigator: Mutex::new(navigator),
            settings,
        }
    }
}

/// What the webview needs to know after attaching.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShellSnapshot {
    pub active_page: Option<String>,
    pub fragment: Option<String>,
    pub sidebar_open: bool,
    pub pages: Vec<MenuItem>,
}

impl ShellSnapshot {
    pub fn of<S: ShellSurface>(navigator: &Navigator<S>) -> Self {
        Self {
            active_page: navigator.active_page().map(str::to_string),
            fragment: navigator.fragment().map(str::to_string),
            sidebar_open: navigator.sidebar_open(),
            pages: navigator.menu_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::navigation::testing::navigator;
    use crate::modules::pages::register_default_pages;

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut nav = navigator();
        register_default_pages(&mut nav);
        nav.resolve_initial("#about");

        let json = serde_json::to_value(ShellSnapshot::of(&nav)).unwrap();
        assert_eq!(json["activePage"], "about");
        assert_eq!(json["fragment"], "about");
        assert_eq!(json["sidebarOpen"], false);
        assert_eq!(json["pages"][0]["id"], "home");
        assert_eq!(json["pages"][0]["icon"], "fas fa-home");
    }

    #[test]
    fn test_snapshot_before_startup() {
        let nav = navigator();
        let snapshot = ShellSnapshot::of(&nav);
        assert_eq!(snapshot.active_page, None);
        assert!(snapshot.pages.is_empty());
    }
}
