//! Rendering of the paged test cases and the actions around them.

use super::UiApp;
use casegen_core::{ExportFile, ExportFormat, PageView, Renderer};
use eframe::egui;

/// What the session last pushed for display.
#[derive(Default)]
pub(crate) struct ResultsView {
    pub(crate) page: Option<PageView>,
    pub(crate) pending_save: Option<ExportFile>,
}

impl Renderer for ResultsView {
    fn render_page(&mut self, view: &PageView) {
        self.page = Some(view.clone());
    }

    fn render_export_ready(&mut self, file: &ExportFile) {
        self.pending_save = Some(file.clone());
    }

    fn render_cleared(&mut self) {
        self.page = None;
        self.pending_save = None;
    }
}

enum PageCommand {
    Previous,
    Next,
}

impl UiApp {
    /// Renders the panel that shows the generated test cases.
    pub(super) fn render_results_panel(&mut self, ui: &mut egui::Ui) {
        if self.generating {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating test cases...");
            });
            return;
        }
        let Some(view) = self.results.page.clone() else {
            ui.label("No test cases generated yet.");
            return;
        };

        self.render_result_actions(ui, &view);
        ui.separator();

        if view.visible_test_cases.is_empty() {
            ui.label("The backend returned no test cases.");
            return;
        }

        let mut command = self.render_page_controls(ui, &view);
        ui.add_space(4.0);
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height((ui.available_height() - 36.0).max(80.0))
            .show(ui, |ui| {
                for (offset, case) in view.visible_test_cases.iter().enumerate() {
                    if offset > 0 {
                        ui.separator();
                    }
                    ui.monospace(case);
                }
            });
        ui.add_space(4.0);
        command = command.or(self.render_page_controls(ui, &view));

        match command {
            Some(PageCommand::Previous) => {
                self.session.prev_page(&mut self.results);
            }
            Some(PageCommand::Next) => {
                self.session.next_page(&mut self.results);
            }
            None => {}
        }
    }

    /// Discards the generated results and the last generation summary.
    pub(super) fn clear_response(&mut self) {
        self.session.clear(&mut self.results);
        self.last_generation = None;
        self.status = "Results cleared.".to_string();
    }

    fn render_result_actions(&mut self, ui: &mut egui::Ui, view: &PageView) {
        ui.horizontal_wrapped(|ui| {
            ui.strong(format!("{} test cases", view.total_items));
            ui.separator();
            let has_cases = view.total_items > 0;
            if ui
                .add_enabled(has_cases, egui::Button::new("Copy page"))
                .clicked()
            {
                self.copy_current_page();
            }
            if ui
                .add_enabled(has_cases, egui::Button::new("Copy all"))
                .clicked()
            {
                self.copy_all_test_cases();
            }
            ui.separator();
            for format in ExportFormat::ALL {
                if ui
                    .button(format!("Download {}", format.label()))
                    .clicked()
                {
                    self.request_download(format);
                }
            }
            ui.separator();
            if ui.button("Clear response").clicked() {
                self.clear_response();
            }
        });
    }

    fn render_page_controls(&self, ui: &mut egui::Ui, view: &PageView) -> Option<PageCommand> {
        if !view.controls_needed() {
            return None;
        }
        let mut command = None;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.has_prev, egui::Button::new("< Previous"))
                .clicked()
            {
                command = Some(PageCommand::Previous);
            }
            ui.label(format!(
                "Page {} of {} ({} test cases)",
                view.current_page, view.total_pages, view.total_items
            ));
            if ui
                .add_enabled(view.has_next, egui::Button::new("Next >"))
                .clicked()
            {
                command = Some(PageCommand::Next);
            }
        });
        command
    }
}
