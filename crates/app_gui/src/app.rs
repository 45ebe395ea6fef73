use crate::settings_store::{AppSettings, load_settings};
use casegen_core::{ApiMethod, BackendStatus, Session};
use chrono::{DateTime, Local};
use eframe::{App, Frame, egui};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

mod frame;
mod requirement;
mod results;
mod settings;

pub(crate) use self::results::ResultsView;

/// Identifies the panel that is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Requirement,
    Results,
    Settings,
}

/// How the requirement is supplied.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    #[default]
    Text,
    File,
}

/// Outcome of the last generation request, shown in the status bar.
#[derive(Clone)]
pub(crate) struct GenerationInfo {
    pub(crate) elapsed_ms: u128,
    pub(crate) finished_at: DateTime<Local>,
    pub(crate) success: bool,
}

/// Messages that flow back from the background generation thread.
pub(crate) enum GenerateMsg {
    Done(String, u128),
    Error(String, u128),
}

/// Root egui application state that wires together all modules.
pub struct UiApp {
    pub(crate) panel: Panel,
    pub(crate) input_mode: InputMode,
    pub(crate) requirement_text: String,
    pub(crate) requirement_file: Option<PathBuf>,
    pub(crate) operation: String,
    pub(crate) api_endpoint: String,
    pub(crate) api_method: ApiMethod,
    pub(crate) payload: String,
    pub(crate) resource_id: String,
    pub(crate) session: Session,
    pub(crate) results: ResultsView,
    pub(crate) generating: bool,
    pub(crate) rx: Option<Receiver<GenerateMsg>>,
    pub(crate) last_generation: Option<GenerationInfo>,
    pub(crate) status: String,
    pub(crate) settings: AppSettings,
    pub(crate) backend_url_input: String,
    pub(crate) items_per_page_input: usize,
    pub(crate) backend_status: Option<String>,
    pub(crate) backend_status_rx: Option<Receiver<Result<BackendStatus, String>>>,
}

impl UiApp {
    pub(crate) fn new() -> Self {
        Self::with_settings(load_settings())
    }

    fn with_settings(settings: AppSettings) -> Self {
        Self {
            panel: Panel::Requirement,
            input_mode: InputMode::Text,
            requirement_text: String::new(),
            requirement_file: None,
            operation: settings.operation.clone(),
            api_endpoint: String::new(),
            api_method: ApiMethod::Get,
            payload: String::new(),
            resource_id: String::new(),
            session: Session::new(settings.items_per_page),
            results: ResultsView::default(),
            generating: false,
            rx: None,
            last_generation: None,
            status: String::new(),
            backend_url_input: settings.backend_url.clone(),
            items_per_page_input: settings.items_per_page,
            settings,
            backend_status: None,
            backend_status_rx: None,
        }
    }
}

impl Default for UiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.refresh_background_state(ctx);
        self.render_navigation(ctx);
        self.render_status_bar(ctx);
        self.render_active_panel(ctx);
        self.save_pending_export();
    }
}
