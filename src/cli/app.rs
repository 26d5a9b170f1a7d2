//! App runners for both dialog tools

use std::io;
use std::process::ExitCode;

use crate::application::{ConsoleReportUseCase, MessageBoxUseCase};
use crate::infrastructure::{create_modal_dialog, has_native_dialog};

use super::args::DialogArgs;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;

/// Run the console notifier.
///
/// Always exits with success; a failed stdout write is reported on stderr.
pub fn run_console_notifier(args: DialogArgs) -> ExitCode {
    let presenter = Presenter::new();
    let request = args.into_request();

    let use_case = ConsoleReportUseCase::default();
    if let Err(e) = use_case.execute(&request, &mut io::stdout().lock()) {
        presenter.error(&e.to_string());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the message-box notifier.
///
/// Blocks until the dialog is dismissed. The dialog's result code is only
/// printed, never turned into an exit status.
pub fn run_message_box(args: DialogArgs) -> ExitCode {
    let presenter = Presenter::new();
    let request = args.into_request();

    if !has_native_dialog() {
        presenter.warn("No native message box on this platform, using the console instead");
    }

    let use_case = MessageBoxUseCase::new(create_modal_dialog());
    if let Err(e) = use_case.execute(&request, &mut io::stdout().lock()) {
        presenter.error(&e.to_string());
    }

    ExitCode::from(EXIT_SUCCESS)
}
