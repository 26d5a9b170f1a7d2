//! Application layer - Use cases and port interfaces
//!
//! Contains the two output strategies and the trait for the
//! platform's modal dialog.

pub mod console_report;
pub mod message_box;
pub mod ports;

// Re-export use cases
pub use console_report::{ConsoleReportUseCase, PROCESSING_STEPS};
pub use message_box::MessageBoxUseCase;
