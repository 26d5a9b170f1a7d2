//! Modal dialog infrastructure module
//!
//! Provides the native message box on Windows and a console
//! fallback everywhere else.

mod console;
#[cfg(windows)]
mod win32;

pub use console::ConsoleModal;
#[cfg(windows)]
pub use win32::Win32MessageBox;

use crate::application::ports::ModalDialog;

/// Whether this platform shows a real window
pub const fn has_native_dialog() -> bool {
    cfg!(windows)
}

/// Create the modal dialog for the current platform
#[cfg(windows)]
pub fn create_modal_dialog() -> Box<dyn ModalDialog> {
    Box::new(Win32MessageBox::new())
}

/// Create the modal dialog for the current platform
#[cfg(not(windows))]
pub fn create_modal_dialog() -> Box<dyn ModalDialog> {
    Box::new(ConsoleModal::new())
}
