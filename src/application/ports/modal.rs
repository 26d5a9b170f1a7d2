//! Modal dialog port interface

use crate::domain::ResultCode;

/// Port for the platform's modal message box.
///
/// Implementations show an "OK" box with an information icon and block the
/// calling thread until the user dismisses it.
pub trait ModalDialog {
    /// Show a modal message box.
    ///
    /// # Arguments
    /// * `message` - The body text
    /// * `title` - The window title
    ///
    /// # Returns
    /// The raw code the platform reported. Failures are not errors here; they
    /// come back as whatever code the platform gives (usually 0).
    fn show_modal(&self, message: &str, title: &str) -> ResultCode;
}

/// Blanket implementation for boxed modal dialog types
impl ModalDialog for Box<dyn ModalDialog> {
    fn show_modal(&self, message: &str, title: &str) -> ResultCode {
        self.as_ref().show_modal(message, title)
    }
}
