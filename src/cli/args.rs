//! CLI argument definitions using Clap
//!
//! Both binaries share one definition. Every argument is plain text:
//! there are no flags, and `--` or `--help` are just words.

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::domain::DialogRequest;

/// Separator put in front of the user's arguments so clap never treats
/// any of them as a flag
const ESCAPE: &str = "--";

/// Positional arguments accepted by both dialog tools
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct DialogArgs {
    /// Message, then title; anything after the title is ignored
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub positional: Vec<OsString>,
}

/// Which dialog tool is being parsed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// Console notifier
    DialogTool,
    /// Message-box notifier
    MessageBox,
}

impl Program {
    /// Binary name used when argv is empty and in clap diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DialogTool => "dialog-tool",
            Self::MessageBox => "message-box",
        }
    }
}

impl DialogArgs {
    /// Parse the process arguments for `program`
    pub fn parse_for(program: Program) -> Self {
        Self::parse_for_from(program, std::env::args_os())
    }

    /// Parse an explicit argument list (first item is the binary name).
    ///
    /// Everything after the binary name is taken literally.
    pub fn parse_for_from<I, T>(program: Program, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from(program.name()));

        // clap consumes the first `--` and reads the rest as raw values,
        // including any later `--`
        let argv = std::iter::once(bin)
            .chain(std::iter::once(OsString::from(ESCAPE)))
            .chain(args);

        let matches = Self::command().name(program.name()).get_matches_from(argv);
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Turn the parsed arguments into a dialog request.
    ///
    /// Non-UTF-8 arguments are converted lossily rather than rejected.
    pub fn into_request(self) -> DialogRequest {
        DialogRequest::from_args(
            self.positional
                .into_iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }
}
