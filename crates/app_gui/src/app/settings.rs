//! Settings panel: backend address, page size, and the backend status check.

use super::UiApp;
use crate::client::BackendClient;
use crate::settings_store::save_settings;
use casegen_core::BackendStatus;
use eframe::egui;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

impl UiApp {
    /// Renders the settings screen.
    pub(super) fn render_settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.add_space(8.0);
        egui::Grid::new("settings-grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Backend URL");
                ui.text_edit_singleline(&mut self.backend_url_input);
                ui.end_row();

                ui.label("Test cases per page");
                ui.add(
                    egui::DragValue::new(&mut self.items_per_page_input)
                        .range(1..=100)
                        .speed(1),
                );
                ui.end_row();

                ui.label("Default operation");
                ui.text_edit_singleline(&mut self.settings.operation);
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                self.apply_settings();
            }
            let checking = self.backend_status_rx.is_some();
            if ui
                .add_enabled(!checking, egui::Button::new("Check backend"))
                .clicked()
            {
                self.request_backend_status();
            }
            if checking {
                ui.spinner();
            }
        });

        if let Some(status) = &self.backend_status {
            ui.add_space(8.0);
            ui.label(status);
        }
    }

    /// Stores the edited settings and applies the new page size.
    pub(super) fn apply_settings(&mut self) {
        let url = self.backend_url_input.trim();
        if url.is_empty() {
            self.status = "Backend URL cannot be empty.".to_string();
            return;
        }
        self.settings.backend_url = url.to_string();
        self.settings.items_per_page = self.items_per_page_input.max(1);
        self.session
            .set_items_per_page(self.settings.items_per_page, &mut self.results);
        self.status = match save_settings(&self.settings) {
            Ok(()) => "Settings saved.".to_string(),
            Err(err) => {
                tracing::warn!("saving settings failed: {err:#}");
                format!("Settings applied but not saved: {err:#}")
            }
        };
    }

    /// Asks the backend which generation method it will use.
    fn request_backend_status(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.backend_status_rx = Some(rx);
        self.backend_status = None;
        let base_url = self.settings.backend_url.clone();
        thread::spawn(move || {
            let result = BackendClient::new(&base_url)
                .and_then(|client| client.status())
                .map_err(|err| format!("{err:#}"));
            let _ = tx.send(result);
        });
    }

    /// Picks up the answer of a pending backend status check.
    pub(super) fn poll_backend_status(&mut self) {
        let Some(rx) = &self.backend_status_rx else {
            return;
        };
        let result: Result<BackendStatus, String> = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err("status check stopped unexpectedly".to_string()),
        };
        self.backend_status_rx = None;
        self.backend_status = Some(match result {
            Ok(status) => status.summary(),
            Err(err) => {
                tracing::warn!("backend status check failed: {err}");
                format!("Unable to check backend status: {err}")
            }
        });
    }
}
