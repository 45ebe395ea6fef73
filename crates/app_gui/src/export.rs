//! Saving downloads to disk and copying results to the clipboard.

use crate::app::UiApp;
use anyhow::Context;
use arboard::Clipboard;
use casegen_core::{ExportFile, ExportFormat};
use chrono::Local;
use rfd::FileDialog;
use std::fs;
use std::path::Path;

impl UiApp {
    /// Encodes all test cases; the save dialog opens on the next frame.
    pub(crate) fn request_download(&mut self, format: ExportFormat) {
        if self
            .session
            .export(format, &mut self.results)
            .is_none()
        {
            self.status = "Nothing to download yet.".to_string();
        }
    }

    /// Asks for a destination and writes a download that is waiting to be saved.
    pub(crate) fn save_pending_export(&mut self) {
        let Some(file) = self.results.pending_save.take() else {
            return;
        };
        let file_name = file.format.default_file_name(Local::now().date_naive());
        let Some(path) = FileDialog::new()
            .set_file_name(&file_name)
            .add_filter(file.format.label(), &[file.extension()])
            .save_file()
        else {
            self.status = "Download cancelled.".to_string();
            return;
        };

        match write_export(&path, &file) {
            Ok(()) => {
                tracing::info!("saved {} bytes to {}", file.content.len(), path.display());
                self.status = format!(
                    "Test cases downloaded as {}!",
                    file.extension().to_uppercase()
                );
            }
            Err(err) => {
                self.status = format!("Download failed: {err:#}");
            }
        }
    }

    /// Copies the visible page to the clipboard.
    pub(crate) fn copy_current_page(&mut self) {
        let text = self.session.current_page_text();
        self.status = match copy_text(text) {
            Ok(()) => "Current page copied to clipboard!".to_string(),
            Err(err) => format!("Failed to copy to clipboard: {err:#}"),
        };
    }

    /// Copies every test case to the clipboard.
    pub(crate) fn copy_all_test_cases(&mut self) {
        let text = self.session.all_text();
        self.status = match copy_text(text) {
            Ok(()) => "All test cases copied to clipboard!".to_string(),
            Err(err) => format!("Failed to copy to clipboard: {err:#}"),
        };
    }
}

fn copy_text(text: String) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("clipboard rejected the text")?;
    Ok(())
}

/// Writes the encoded download to `path`.
pub(crate) fn write_export(path: &Path, file: &ExportFile) -> anyhow::Result<()> {
    fs::write(path, file.content.as_bytes())
        .with_context(|| format!("Could not write {}", path.display()))
}
