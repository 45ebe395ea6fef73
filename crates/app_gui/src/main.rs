#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]
//! Entry point for the Casegen egui desktop application.

mod app;
mod client;
mod export;
mod settings_store;

use app::UiApp;
use eframe::{NativeOptions, egui};
use egui::viewport::ViewportBuilder;

/// Bootstraps the egui application and installs tracing.
fn main() {
    #[cfg(debug_assertions)]
    tracing_subscriber::fmt::init();

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Casegen")
            .with_inner_size([1024.0, 760.0]),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        "Casegen",
        options,
        Box::new(|_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::default()))
        }),
    ) {
        eprintln!("Application stopped with an error: {err}");
    }
}
