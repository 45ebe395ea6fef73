//! Navigation and frame orchestration helpers.

use super::{GenerateMsg, GenerationInfo, Panel, UiApp};
use chrono::Local;
use eframe::egui;
use std::time::Duration;

impl UiApp {
    /// Processes background channels and keeps long-running tasks responsive.
    pub(super) fn refresh_background_state(&mut self, ctx: &egui::Context) {
        self.drain_generate_channel();
        self.poll_backend_status();
        if self.generating || self.backend_status_rx.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    /// Renders the navigation bar that switches between panels.
    pub(super) fn render_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add(
                        egui::Button::new("Requirement")
                            .selected(self.panel == Panel::Requirement),
                    )
                    .clicked()
                {
                    self.panel = Panel::Requirement;
                }
                let can_view_results = self.results.page.is_some() || self.generating;
                if ui
                    .add_enabled(
                        can_view_results,
                        egui::Button::new("Test cases").selected(self.panel == Panel::Results),
                    )
                    .clicked()
                {
                    self.panel = Panel::Results;
                }
                if ui
                    .add(egui::Button::new("Settings").selected(self.panel == Panel::Settings))
                    .clicked()
                {
                    self.panel = Panel::Settings;
                }
            });
        });
    }

    /// Draws whichever central panel is currently active.
    pub(super) fn render_active_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.panel {
            Panel::Requirement => {
                egui::ScrollArea::vertical().show(ui, |ui| self.render_requirement_panel(ui));
            }
            Panel::Results => self.render_results_panel(ui),
            Panel::Settings => {
                egui::ScrollArea::vertical().show(ui, |ui| self.render_settings_panel(ui));
            }
        });
    }

    /// Displays the persistent status bar at the bottom.
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_message());
                if let Some(info) = &self.last_generation {
                    ui.separator();
                    let (text, color) = if info.success {
                        ("Success", egui::Color32::from_rgb(40, 160, 70))
                    } else {
                        ("Failed", egui::Color32::from_rgb(200, 60, 60))
                    };
                    ui.colored_label(color, text);
                    ui.label(format!("{:.2}s", info.elapsed_ms as f64 / 1000.0));
                    ui.label(info.finished_at.format("%Y-%m-%d %H:%M:%S").to_string());
                }
            });
        });
    }

    /// Applies a message from the generation worker.
    pub(super) fn handle_generate_msg(&mut self, msg: GenerateMsg) {
        self.generating = false;
        let (elapsed_ms, success) = match msg {
            GenerateMsg::Done(output, elapsed_ms) => {
                let count = self.session.install(output, &mut self.results);
                self.status = format!("Generated {count} test cases.");
                self.panel = Panel::Results;
                (elapsed_ms, true)
            }
            GenerateMsg::Error(message, elapsed_ms) => {
                self.status = format!("Error: {message}");
                (elapsed_ms, false)
            }
        };
        self.last_generation = Some(GenerationInfo {
            elapsed_ms,
            finished_at: Local::now(),
            success,
        });
    }

    /// Summarizes the current status string or returns a default.
    fn status_message(&self) -> String {
        if !self.status.is_empty() {
            return self.status.clone();
        }
        if self.generating {
            "Generating test cases...".to_string()
        } else {
            "Ready.".to_string()
        }
    }

    /// Pulls the answer of the generation worker once it arrives.
    fn drain_generate_channel(&mut self) {
        let Some(rx) = self.rx.take() else {
            return;
        };
        match rx.try_recv() {
            Ok(msg) => self.handle_generate_msg(msg),
            Err(std::sync::mpsc::TryRecvError::Empty) => self.rx = Some(rx),
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.generating = false;
                self.status = "Error: generation worker stopped unexpectedly".to_string();
            }
        }
    }
}
