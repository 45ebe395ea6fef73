//! Requirement form and the background generation job.

use super::{GenerateMsg, InputMode, Panel, UiApp};
use crate::client::BackendClient;
use casegen_core::{ApiMethod, GenerateRequest, RequirementSource};
use eframe::egui;
use rfd::FileDialog;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Instant;

const REQUIREMENT_EXTENSIONS: [&str; 4] = ["txt", "doc", "docx", "pdf"];

impl UiApp {
    /// Displays the requirement form and the generate button.
    pub(super) fn render_requirement_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Requirement");
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.input_mode, InputMode::Text, "Text input");
            ui.radio_value(&mut self.input_mode, InputMode::File, "File upload");
        });
        ui.add_space(4.0);
        match self.input_mode {
            InputMode::Text => {
                ui.add(
                    egui::TextEdit::multiline(&mut self.requirement_text)
                        .hint_text("Describe the requirement to generate test cases for")
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
            }
            InputMode::File => {
                ui.horizontal(|ui| {
                    if ui.button("Choose file...").clicked()
                        && let Some(path) = FileDialog::new()
                            .add_filter("Requirement", &REQUIREMENT_EXTENSIONS)
                            .pick_file()
                    {
                        self.requirement_file = Some(path);
                    }
                    match &self.requirement_file {
                        Some(path) => ui.label(path.display().to_string()),
                        None => ui.label("No file selected."),
                    };
                });
            }
        }

        ui.add_space(12.0);
        egui::Grid::new("api-fields")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Operation");
                ui.text_edit_singleline(&mut self.operation);
                ui.end_row();

                ui.label("API endpoint");
                ui.text_edit_singleline(&mut self.api_endpoint);
                ui.end_row();

                ui.label("Method");
                egui::ComboBox::from_id_salt("api-method")
                    .selected_text(self.api_method.as_str())
                    .show_ui(ui, |ui| {
                        for method in ApiMethod::ALL {
                            ui.selectable_value(&mut self.api_method, method, method.as_str());
                        }
                    });
                ui.end_row();

                if self.api_method.needs_payload() {
                    ui.label("Payload");
                    ui.add(
                        egui::TextEdit::multiline(&mut self.payload)
                            .code_editor()
                            .desired_rows(4),
                    );
                    ui.end_row();
                }
                if self.api_method.needs_resource_id() {
                    ui.label("Resource ID");
                    ui.text_edit_singleline(&mut self.resource_id);
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.generating, egui::Button::new("Generate test cases"))
                .clicked()
            {
                self.start_generation();
            }
            if ui.button("Clear inputs").clicked() {
                self.clear_inputs();
            }
            if self.generating {
                ui.spinner();
            }
        });
    }

    /// Builds the request from the form fields.
    fn build_request(&self) -> GenerateRequest {
        let source = match self.input_mode {
            InputMode::Text => RequirementSource::Text(self.requirement_text.clone()),
            InputMode::File => {
                RequirementSource::File(self.requirement_file.clone().unwrap_or_default())
            }
        };
        GenerateRequest {
            source,
            operation: self.operation.clone(),
            api_endpoint: self.api_endpoint.clone(),
            api_method: self.api_method,
            payload: self.payload.clone(),
            resource_id: self.resource_id.clone(),
        }
    }

    /// Validates the form and kicks off a generation request in the background.
    pub(super) fn start_generation(&mut self) {
        let request = self.build_request();
        if let Err(err) = request.validate() {
            self.status = err.to_string();
            return;
        }

        self.generating = true;
        self.status = "Generating test cases...".to_string();
        self.panel = Panel::Results;
        let (tx, rx): (Sender<GenerateMsg>, Receiver<GenerateMsg>) = mpsc::channel();
        // Replacing the receiver drops any answer still in flight.
        self.rx = Some(rx);
        let base_url = self.settings.backend_url.clone();
        thread::spawn(move || {
            let t0 = Instant::now();
            let result = BackendClient::new(&base_url).and_then(|client| client.generate(&request));
            let elapsed_ms = t0.elapsed().as_millis();
            let msg = match result {
                Ok(output) => GenerateMsg::Done(output, elapsed_ms),
                Err(err) => {
                    tracing::warn!("generation failed: {err:#}");
                    GenerateMsg::Error(format!("{err:#}"), elapsed_ms)
                }
            };
            let _ = tx.send(msg);
        });
    }

    /// Resets the form to its initial state.
    pub(super) fn clear_inputs(&mut self) {
        self.input_mode = InputMode::Text;
        self.requirement_text.clear();
        self.requirement_file = None;
        self.operation = self.settings.operation.clone();
        self.api_endpoint.clear();
        self.api_method = ApiMethod::Get;
        self.payload.clear();
        self.resource_id.clear();
        self.status = "All inputs cleared!".to_string();
    }
}
