//! Dialog request value object

/// Message shown when no message argument is given
pub const DEFAULT_MESSAGE: &str = "Hello from bundled executable!";

/// Title shown when no title argument is given
pub const DEFAULT_TITLE: &str = "Tauri Bundled App";

/// The message and title a dialog tool was invoked with.
///
/// Built once from the positional arguments and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    message: String,
    title: String,
}

impl DialogRequest {
    /// Create a request from explicit values
    pub fn new(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: title.into(),
        }
    }

    /// Build a request from positional arguments (program name excluded).
    ///
    /// The first argument is the message and the second the title. Missing
    /// arguments fall back to the defaults; anything past the second is ignored.
    /// Empty strings are kept as given.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let message = args.next().unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        let title = args.next().unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self { message, title }
    }

    /// The dialog body text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The dialog title
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Default for DialogRequest {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE, DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let request = DialogRequest::from_args(Vec::<String>::new());
        assert_eq!(request.message(), DEFAULT_MESSAGE);
        assert_eq!(request.title(), DEFAULT_TITLE);
        assert_eq!(request, DialogRequest::default());
    }

    #[test]
    fn one_arg_overrides_message_only() {
        let request = DialogRequest::from_args(["Build complete"]);
        assert_eq!(request.message(), "Build complete");
        assert_eq!(request.title(), DEFAULT_TITLE);
    }

    #[test]
    fn two_args_override_both() {
        let request = DialogRequest::from_args(["Build complete", "CI Status"]);
        assert_eq!(request.message(), "Build complete");
        assert_eq!(request.title(), "CI Status");
    }

    #[test]
    fn extra_args_are_ignored() {
        let request = DialogRequest::from_args(["m", "t", "extra", "more"]);
        assert_eq!(request, DialogRequest::new("m", "t"));
    }

    #[test]
    fn empty_strings_are_kept() {
        let request = DialogRequest::from_args(["", ""]);
        assert_eq!(request.message(), "");
        assert_eq!(request.title(), "");
    }
}
