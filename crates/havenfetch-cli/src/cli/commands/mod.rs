//! CLI command handlers, one file per command.

mod fetch;
mod scan;

pub use fetch::run_fetch;
pub use scan::run_scan;
