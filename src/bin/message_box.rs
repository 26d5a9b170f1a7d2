//! Message-box notifier entry point

use std::process::ExitCode;

use bundled_dialog::cli::{run_message_box, DialogArgs, Program};

fn main() -> ExitCode {
    run_message_box(DialogArgs::parse_for(Program::MessageBox))
}
