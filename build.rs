//! Build script for Red Flag Detector.
//!
//! Only the `desktop` feature needs a build step: Tauri generates its
//! context from tauri.conf.json. The CLI and library build without it.

fn main() {
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
