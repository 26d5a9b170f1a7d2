//! CLI layer - Command-line interface
//!
//! Contains argument parsing, diagnostics output, and the runners
//! used by both binaries.

pub mod app;
pub mod args;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_console_notifier, run_message_box, EXIT_SUCCESS};
pub use args::{DialogArgs, Program};
pub use presenter::Presenter;
