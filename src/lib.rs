//! bundled-dialog - Dialog helpers shipped inside desktop app bundles
//!
//! Two small executables share this crate:
//!
//! - `dialog-tool` prints a fixed status report, including the build
//!   timestamp, for the host application to capture.
//! - `message-box` shows a modal message box and prints the code of the
//!   button that closed it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Dialog request, build timestamp, result codes, and errors
//! - **Application**: The two output strategies and the modal dialog port
//! - **Infrastructure**: Win32 message box and the console fallback
//! - **CLI**: Argument parsing, diagnostics, and the runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
