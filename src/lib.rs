//! Red Flag Detector — library root.
//!
//! Wires the domains together; business logic lives in the modules:
//!   - input/      — upload filter, screenshot encoding, chat log decoding
//!   - llm/        — prompts, request shapes, inference client
//!   - verdict.rs  — keyword classification of the result
//!   - session.rs  — per-session chat log store
//!   - pipeline.rs — the image / chat-log dispatcher
//!   - config.rs   — startup configuration (API key, models, endpoint)
//!
//! Two front ends sit on top: the `red-flag` CLI (src/main.rs) and, with the
//! `desktop` feature, a single-window Tauri shell (commands.rs).

pub mod config;
pub mod input;
pub mod llm;
pub mod pipeline;
pub mod session;
pub mod verdict;

#[cfg(feature = "desktop")]
mod commands;

/// Project root: the directory holding Cargo.toml.
pub fn project_root() -> &'static std::path::Path {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Load `.env.local` / `.env` and start the logger. Call once at startup.
pub fn init_logging_and_env() {
    // dotenv first so a RUST_LOG set there reaches env_logger.
    let loaded = config::load_dotenv(project_root());
    let _ = env_logger::try_init();
    match loaded {
        Ok(Some(path)) => log::info!("[STARTUP] Loaded {}", path.display()),
        Ok(None) => log::debug!("[STARTUP] No .env.local or .env found"),
        Err(e) => log::warn!("[STARTUP] Failed to load dotenv file: {}", e),
    }
}

/// Desktop entry point — called by the Tauri runtime.
///
/// Refuses to start without an API key.
#[cfg(feature = "desktop")]
pub fn run() {
    use tauri::Manager;

    init_logging_and_env();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[STARTUP] {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(llm::InferenceClient::new(config))
        .manage(session::SessionStore::new())
        .invoke_handler(tauri::generate_handler![
            commands::list_modes,
            commands::scan_image,
            commands::upload_chat_log,
            commands::analyze_chat_log,
            commands::end_session,
            commands::save_api_key,
            commands::delete_api_key,
        ])
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::Destroyed = event {
                let sessions = window.state::<session::SessionStore>();
                let id = session::SessionId::new(window.label());
                if let Err(e) = sessions.end_session(&id) {
                    log::warn!("[SESSION] Failed to clear {}: {}", id, e);
                }
            }
        })
        .setup(|_app| {
            log::info!("Red Flag Detector starting up");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error running Red Flag Detector");
}
