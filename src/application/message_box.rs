//! Message-box notifier use case

use std::io::Write;

use crate::application::ports::ModalDialog;
use crate::domain::{DialogRequest, OutputError, ResultCode};

/// Message-box notifier: announces the dialog, blocks on it, reports the result
pub struct MessageBoxUseCase<D: ModalDialog> {
    dialog: D,
}

impl<D: ModalDialog> MessageBoxUseCase<D> {
    /// Create a use case backed by the given modal dialog
    pub fn new(dialog: D) -> Self {
        Self { dialog }
    }

    /// Show `request` and write the status lines to `out`.
    ///
    /// The announcement lines are flushed before the modal call so a parent
    /// process sees them while the dialog is open. The returned code is
    /// passed through untouched, including failure codes.
    pub fn execute<W: Write>(
        &self,
        request: &DialogRequest,
        out: &mut W,
    ) -> Result<ResultCode, OutputError> {
        writeln!(out, "Dialog shown with message: {}", request.message())?;
        writeln!(out, "Dialog title: {}", request.title())?;
        out.flush()?;

        let result = self.dialog.show_modal(request.message(), request.title());

        writeln!(out, "MessageBox result: {}", result)?;
        out.flush()?;
        Ok(result)
    }
}
