//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces.

pub mod modal;

// Re-export adapters
pub use modal::{create_modal_dialog, has_native_dialog, ConsoleModal};
#[cfg(windows)]
pub use modal::Win32MessageBox;
