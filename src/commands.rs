// Tauri commands invoked by ui/shell.js.

use tauri::{AppHandle, Manager, State};
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::modules::demo::register_demo_pages;
use crate::modules::fragment::share_link;
use crate::modules::registry::{static_renderer, MenuItem};
use crate::state::{AppState, ShellSnapshot};

/// The webview has installed its listeners. Replays current state, resolves
/// the startup page once, then adds the demo pages.
#[tauri::command]
pub fn shell_ready(
    state: State<AppState>,
    hash: String,
    viewport_width: u32,
) -> Result<ShellSnapshot, String> {
    let mut navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    navigator.on_viewport_resize(viewport_width);
    navigator.sync_surface();

    if !navigator.is_initialized() {
        navigator.resolve_initial(&hash);
        if state.settings.demo_pages {
            register_demo_pages(&mut *navigator);
        }
    }

    Ok(ShellSnapshot::of(&*navigator))
}

#[tauri::command]
pub fn navigate(state: State<AppState>, id: String) -> Result<bool, String> {
    let mut navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    Ok(navigator.navigate(&id))
}

#[tauri::command]
pub fn hash_changed(state: State<AppState>, hash: String) -> Result<bool, String> {
    let mut navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    Ok(navigator.on_external_navigation(&hash))
}

#[tauri::command]
pub fn register_page(
    state: State<AppState>,
    id: String,
    label: String,
    icon: Option<String>,
    content: Option<String>,
) -> Result<bool, String> {
    let mut navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    Ok(navigator.register(id, label, icon, content.map(static_renderer)))
}

#[tauri::command]
pub fn list_pages(state: State<AppState>) -> Result<Vec<MenuItem>, String> {
    let navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    Ok(navigator.menu_items())
}

#[tauri::command]
pub fn toggle_sidebar(state: State<AppState>) -> Result<bool, String> {
    let mut navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    Ok(navigator.toggle_sidebar())
}

#[tauri::command]
pub fn close_sidebar(state: State<AppState>) -> Result<(), String> {
    let mut navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    navigator.close_sidebar();
    Ok(())
}

#[tauri::command]
pub fn viewport_resized(state: State<AppState>, width: u32) -> Result<(), String> {
    let mut navigator = state.navigator.lock().map_err(|e| e.to_string())?;
    navigator.on_viewport_resize(width);
    Ok(())
}

/// Copies a link to the active page (current URL with its fragment replaced).
#[tauri::command]
pub fn copy_page_link(app: AppHandle, state: State<AppState>) -> Result<String, String> {
    let active = {
        let navigator = state.navigator.lock().map_err(|e| e.to_string())?;
        navigator
            .active_page()
            .map(str::to_string)
            .ok_or_else(|| "no active page".to_string())?
    };

    let webview = app
        .get_webview_window("main")
        .ok_or_else(|| "main window not found".to_string())?;
    let current = webview.url().map_err(|e| e.to_string())?;

    let link = share_link(current.as_str(), &active).map_err(|e| e.to_string())?;
    app.clipboard()
        .write_text(link.clone())
        .map_err(|e| e.to_string())?;
    log::info!("Copied page link: {}", link);
    Ok(link)
}
