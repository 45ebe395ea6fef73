//! The controller that owns the current test cases and page position.

use crate::export::{ExportFile, ExportFormat, export};
use crate::pager::{DEFAULT_ITEMS_PER_PAGE, PageState, PageView, paginate};
use crate::splitter::split_test_cases;

/// Presentation capability the session pushes its state through.
///
/// Implementations own whatever surface displays the results; the session
/// never touches it directly.
pub trait Renderer {
    /// Called whenever the visible page changes.
    fn render_page(&mut self, view: &PageView);

    /// Called when an export has been encoded and is ready to be saved.
    fn render_export_ready(&mut self, file: &ExportFile);

    /// Called after the results were discarded.
    fn render_cleared(&mut self) {}
}

/// Test cases of the last successful generation plus paging state.
#[derive(Debug, Clone)]
pub struct Session {
    test_cases: Vec<String>,
    raw_output: Option<String>,
    page: PageState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Session {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            test_cases: Vec::new(),
            raw_output: None,
            page: PageState::new(items_per_page, 0),
        }
    }

    /// Replaces the current results with the cases found in `raw`.
    ///
    /// Returns the number of cases installed; the view always restarts on
    /// page 1.
    pub fn install(&mut self, raw: String, renderer: &mut dyn Renderer) -> usize {
        self.test_cases = split_test_cases(&raw);
        self.raw_output = Some(raw);
        self.page.reset(self.test_cases.len());
        tracing::info!(
            "installed {} test cases across {} pages",
            self.test_cases.len(),
            self.page.total_pages()
        );
        renderer.render_page(&self.view());
        self.test_cases.len()
    }

    /// Discards the results.
    pub fn clear(&mut self, renderer: &mut dyn Renderer) {
        self.test_cases.clear();
        self.raw_output = None;
        self.page.reset(0);
        renderer.render_cleared();
    }

    /// Advances one page and re-renders. Returns false on the last page.
    pub fn next_page(&mut self, renderer: &mut dyn Renderer) -> bool {
        let moved = self.page.next_page();
        if moved {
            renderer.render_page(&self.view());
        }
        moved
    }

    /// Goes back one page and re-renders. Returns false on page 1.
    pub fn prev_page(&mut self, renderer: &mut dyn Renderer) -> bool {
        let moved = self.page.prev_page();
        if moved {
            renderer.render_page(&self.view());
        }
        moved
    }

    /// Changes the page size and re-renders when results are present.
    pub fn set_items_per_page(&mut self, items_per_page: usize, renderer: &mut dyn Renderer) {
        if items_per_page.max(1) == self.page.items_per_page() {
            return;
        }
        self.page.set_items_per_page(items_per_page);
        if self.has_results() {
            renderer.render_page(&self.view());
        }
    }

    /// Encodes every test case for download.
    ///
    /// Returns `None` when no generation output has been installed yet.
    pub fn export(
        &self,
        format: ExportFormat,
        renderer: &mut dyn Renderer,
    ) -> Option<ExportFile> {
        if self.raw_output.is_none() {
            return None;
        }
        let file = ExportFile {
            format,
            content: export(&self.test_cases, format),
        };
        tracing::debug!(
            "encoded {} test cases as {}",
            self.test_cases.len(),
            format.extension()
        );
        renderer.render_export_ready(&file);
        Some(file)
    }

    pub fn view(&self) -> PageView {
        paginate(&self.test_cases, &self.page)
    }

    pub fn test_cases(&self) -> &[String] {
        &self.test_cases
    }

    pub fn raw_output(&self) -> Option<&str> {
        self.raw_output.as_deref()
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn has_results(&self) -> bool {
        !self.test_cases.is_empty()
    }

    /// Text of the visible page, for copying to the clipboard.
    pub fn current_page_text(&self) -> String {
        self.view().text()
    }

    /// Every test case separated by a blank line.
    pub fn all_text(&self) -> String {
        self.test_cases.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        pages: Vec<PageView>,
        exports: Vec<ExportFile>,
        cleared: usize,
    }

    impl Renderer for Recorder {
        fn render_page(&mut self, view: &PageView) {
            self.pages.push(view.clone());
        }

        fn render_export_ready(&mut self, file: &ExportFile) {
            self.exports.push(file.clone());
        }

        fn render_cleared(&mut self) {
            self.cleared += 1;
        }
    }

    fn scenarios(n: usize) -> String {
        (1..=n)
            .map(|i| format!("Scenario: case {i}\n  Given step {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn install_renders_first_page() {
        let mut session = Session::default();
        let mut renderer = Recorder::default();
        assert_eq!(session.install(scenarios(25), &mut renderer), 25);

        let view = renderer.pages.last().unwrap();
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.total_items, 25);
        assert_eq!(view.visible_test_cases.len(), 10);
        assert_eq!(view.visible_test_cases[0], "Scenario: case 1\n  Given step 1");
    }

    #[test]
    fn new_output_resets_to_page_one() {
        let mut session = Session::default();
        let mut renderer = Recorder::default();
        session.install(scenarios(25), &mut renderer);
        assert!(session.next_page(&mut renderer));
        assert!(session.next_page(&mut renderer));
        assert_eq!(session.page_state().current_page(), 3);

        session.install(scenarios(12), &mut renderer);
        assert_eq!(session.page_state().current_page(), 1);
        assert_eq!(session.test_cases().len(), 12);
    }

    #[test]
    fn navigation_past_the_ends_does_not_render() {
        let mut session = Session::default();
        let mut renderer = Recorder::default();
        session.install(scenarios(15), &mut renderer);
        assert_eq!(renderer.pages.len(), 1);

        assert!(!session.prev_page(&mut renderer));
        assert_eq!(renderer.pages.len(), 1);
        assert!(session.next_page(&mut renderer));
        assert!(!session.next_page(&mut renderer));
        assert_eq!(renderer.pages.len(), 2);
        assert!(renderer.pages[1].has_prev);
        assert!(!renderer.pages[1].has_next);
    }

    #[test]
    fn clear_empties_everything() {
        let mut session = Session::default();
        let mut renderer = Recorder::default();
        session.install(scenarios(3), &mut renderer);
        session.clear(&mut renderer);

        assert_eq!(renderer.cleared, 1);
        assert!(!session.has_results());
        assert!(session.raw_output().is_none());
        assert_eq!(session.page_state().current_page(), 1);
        assert_eq!(session.view().total_pages, 0);
        assert!(session.export(ExportFormat::Text, &mut renderer).is_none());
    }

    #[test]
    fn export_requires_installed_output() {
        let session = Session::default();
        let mut renderer = Recorder::default();
        assert!(session.export(ExportFormat::Csv, &mut renderer).is_none());
        assert!(renderer.exports.is_empty());
    }

    #[test]
    fn export_covers_all_pages() {
        let mut session = Session::new(2);
        let mut renderer = Recorder::default();
        session.install(scenarios(5), &mut renderer);

        let file = session.export(ExportFormat::Excel, &mut renderer).unwrap();
        assert_eq!(file.extension(), "xls");
        assert_eq!(file.content.lines().count(), 6);
        assert_eq!(renderer.exports, vec![file]);
    }

    #[test]
    fn blank_output_installs_an_empty_list() {
        let mut session = Session::default();
        let mut renderer = Recorder::default();
        assert_eq!(session.install("  \n ".into(), &mut renderer), 0);
        let view = renderer.pages.last().unwrap();
        assert!(view.visible_test_cases.is_empty());
        assert!(!view.controls_needed());
        let file = session.export(ExportFormat::Text, &mut renderer).unwrap();
        assert_eq!(file.content, "");
    }

    #[test]
    fn copy_texts() {
        let mut session = Session::new(1);
        let mut renderer = Recorder::default();
        session.install("Scenario: A\nx\nScenario: B".into(), &mut renderer);
        assert_eq!(session.current_page_text(), "Scenario: A\nx");
        assert_eq!(session.all_text(), "Scenario: A\nx\n\nScenario: B");
    }

    #[test]
    fn page_size_change_clamps_current_page() {
        let mut session = Session::new(5);
        let mut renderer = Recorder::default();
        session.install(scenarios(12), &mut renderer);
        session.next_page(&mut renderer);
        session.next_page(&mut renderer);
        assert_eq!(session.page_state().current_page(), 3);

        session.set_items_per_page(10, &mut renderer);
        let view = renderer.pages.last().unwrap();
        assert_eq!(view.current_page, 2);
        assert_eq!(view.visible_test_cases.len(), 2);
    }
}
