//! CLI command handlers, one per file.

mod completions;
mod man;
mod scan;
mod site;

pub use completions::run_completions;
pub use man::run_man;
pub use scan::run_scan;
pub use site::run_site;
