//! Command handlers.
//!
//! Each handler returns the desired process exit code; `main` performs
//! the actual `std::process::exit` so handlers stay testable.

mod diff;
mod list;

pub use diff::{run_diff, DiffOptions};
pub use list::{run_list, ListOptions};

/// Process exit codes shared by the command handlers.
pub mod exit_codes {
    /// Successful run
    pub const SUCCESS: i32 = 0;
    /// Differences found while `--fail-on-change` is set
    pub const CHANGES_DETECTED: i32 = 1;
    /// Any error surfaced to the process boundary
    pub const ERROR: i32 = 2;
}
