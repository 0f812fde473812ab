//! QA report engine
//!
//! Three-phase pattern:
//! 1. Fetch - scan closed PRs back to the last release (effectful)
//! 2. Classify and render - bucket PRs by QA label, build the text (pure)
//! 3. Execute - post the report (effectful)

mod classify;
mod execute;
mod fetch;
mod render;

pub use classify::{classify, classify_all};
pub use execute::{ReportOptions, run_report};
pub use fetch::{fetch_since_release, is_release_title, scan_since_release};
pub use render::{NO_RELEASE_PLACEHOLDER, SEPARATOR, escape_text, render_report};
