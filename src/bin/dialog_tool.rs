//! Console notifier entry point

use std::process::ExitCode;

use bundled_dialog::cli::{run_console_notifier, DialogArgs, Program};

fn main() -> ExitCode {
    run_console_notifier(DialogArgs::parse_for(Program::DialogTool))
}
