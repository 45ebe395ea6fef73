//! # casegen_core
//!
//! `casegen_core` turns the text returned by the test-case generation backend
//! into a list of test cases, pages through that list, and encodes it for
//! download. The crate is kept UI-free so the desktop client and any future
//! CLI can share the same pipeline.
//!
//! ## Examples
//!
//! ```
//! use casegen_core::{ExportFormat, PageView, Renderer, Session, ExportFile};
//!
//! struct Stdout;
//!
//! impl Renderer for Stdout {
//!     fn render_page(&mut self, view: &PageView) {
//!         println!("page {}/{}", view.current_page, view.total_pages);
//!     }
//!     fn render_export_ready(&mut self, file: &ExportFile) {
//!         println!("{} bytes of {}", file.content.len(), file.extension());
//!     }
//! }
//!
//! let mut session = Session::default();
//! let count = session.install("Scenario: A\nGiven x\nScenario: B".to_string(), &mut Stdout);
//! assert_eq!(count, 2);
//! let file = session.export(ExportFormat::Csv, &mut Stdout).unwrap();
//! assert!(file.content.starts_with("Test Case ID,"));
//! ```

pub mod api;
pub mod export;
pub mod pager;
pub mod session;
pub mod splitter;

pub use api::{ApiMethod, BackendStatus, GenerateRequest, GenerateResponse, RequirementSource};
pub use export::{ExportFile, ExportFormat, export};
pub use pager::{DEFAULT_ITEMS_PER_PAGE, PageState, PageView, paginate};
pub use session::{Renderer, Session};
pub use splitter::{is_marker, split_test_cases};
