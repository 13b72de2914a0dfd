// Webview implementation of the shell surface.
// Every call becomes an event that ui/shell.js applies to the DOM.

use serde::Serialize;
use tauri::{AppHandle, Emitter};

use crate::modules::navigation::ShellSurface;
use crate::modules::registry::MenuItem;

pub const MENU_EVENT: &str = "shell://menu";
pub const ACTIVE_EVENT: &str = "shell://active";
pub const CONTENT_EVENT: &str = "shell://content";
pub const FRAGMENT_EVENT: &str = "shell://fragment";
pub const SIDEBAR_EVENT: &str = "shell://sidebar";

pub struct WebviewShell {
    app: AppHandle,
}

impl WebviewShell {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn emit<T: Serialize + Clone>(&self, event: &str, payload: T) {
        if let Err(e) = self.app.emit(event, payload) {
            log::warn!("[Shell] Failed to emit {}: {}", event, e);
        }
    }
}

impl ShellSurface for WebviewShell {
    fn render_menu(&mut self, items: &[MenuItem]) {
        self.emit(MENU_EVENT, items.to_vec());
    }

    fn set_active_styling(&mut self, id: &str) {
        self.emit(ACTIVE_EVENT, serde_json::json!({ "id": id }));
    }

    fn set_content(&mut self, payload: &str) {
        self.emit(CONTENT_EVENT, serde_json::json!({ "html": payload }));
    }

    fn set_fragment(&mut self, token: &str) {
        self.emit(FRAGMENT_EVENT, serde_json::json!({ "token": token }));
    }

    fn set_sidebar_open(&mut self, open: bool) {
        self.emit(SIDEBAR_EVENT, serde_json::json!({ "open": open }));
    }
}
