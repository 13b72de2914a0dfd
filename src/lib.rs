// Portfolio Shell Library Entry Point
// This file exposes all modules so they can be imported by main.rs
// and tested independently.

use tauri::Manager;

// Host modules (Tauri)
pub mod commands;
pub mod settings;
pub mod shell;
pub mod state;

// Pure logic modules (no Tauri imports)
pub mod modules;

use modules::navigation::Navigator;
use modules::pages::register_default_pages;
use settings::Settings;
use shell::WebviewShell;
use state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let loaded = Settings::load(app.handle());
            let settings = loaded.clone().unwrap_or_default();
            app.handle().plugin(
                tauri_plugin_log::Builder::default()
                    .level(settings.log_level())
                    .build(),
            )?;
            if let Err(e) = loaded {
                log::warn!("[Settings] {}, returning defaults", e);
            }

            let mut navigator = Navigator::new(
                WebviewShell::new(app.handle().clone()),
                settings.navigator_config(),
            );
            register_default_pages(&mut navigator);
            log::info!("Portfolio shell initialized with {} pages", navigator.registry().len());

            app.manage(AppState::new(navigator, settings));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::shell_ready,
            commands::navigate,
            commands::hash_changed,
            commands::register_page,
            commands::list_pages,
            commands::toggle_sidebar,
            commands::close_sidebar,
            commands::viewport_resized,
            commands::copy_page_link,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
