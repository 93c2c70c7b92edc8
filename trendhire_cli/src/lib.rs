//! TrendHire terminal dashboard: session, page router, screens and reports

pub mod components;
pub mod keymap;
pub mod report;
pub mod router;
pub mod screens;
pub mod session;
pub mod theme;
pub mod ui;

pub use report::{write_report, ReportFormat};
pub use router::{render_pass, Page, PageContext, PageView, RenderPass};
pub use session::Session;
