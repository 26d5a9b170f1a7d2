//! Console notifier use case
//!
//! Prints the fixed sequence of status lines for a dialog request.

use std::io::Write;

use crate::domain::{BuildTimestamp, DialogRequest, OutputError};

/// Number of simulated processing steps
pub const PROCESSING_STEPS: u32 = 3;

/// Console notifier: writes the status report and nothing else
pub struct ConsoleReportUseCase {
    timestamp: BuildTimestamp,
}

impl ConsoleReportUseCase {
    /// Create a use case reporting the given build timestamp
    pub fn new(timestamp: BuildTimestamp) -> Self {
        Self { timestamp }
    }

    /// Write the report for `request` to `out`
    pub fn execute<W: Write>(&self, request: &DialogRequest, out: &mut W) -> Result<(), OutputError> {
        writeln!(out, "Dialog executed successfully!")?;
        writeln!(out, "Message: {}", request.message())?;
        writeln!(out, "Title: {}", request.title())?;
        writeln!(out, "Timestamp: {}", self.timestamp)?;

        for step in 1..=PROCESSING_STEPS {
            writeln!(out, "Processing step {}/{}...", step, PROCESSING_STEPS)?;
        }

        writeln!(out, "Dialog tool completed successfully!")?;
        out.flush()?;
        Ok(())
    }
}

impl Default for ConsoleReportUseCase {
    fn default() -> Self {
        Self::new(BuildTimestamp::current())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn report(request: &DialogRequest) -> Vec<String> {
        let use_case = ConsoleReportUseCase::new(BuildTimestamp::new("Oct 18 2026", "12:00:00"));
        let mut out = Vec::new();
        use_case.execute(request, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn writes_lines_in_order() {
        let lines = report(&DialogRequest::new("Build complete", "CI Status"));
        assert_eq!(
            lines,
            vec![
                "Dialog executed successfully!",
                "Message: Build complete",
                "Title: CI Status",
                "Timestamp: Oct 18 2026 12:00:00",
                "Processing step 1/3...",
                "Processing step 2/3...",
                "Processing step 3/3...",
                "Dialog tool completed successfully!",
            ]
        );
    }

    #[test]
    fn defaults_appear_in_report() {
        let lines = report(&DialogRequest::default());
        assert_eq!(lines[1], "Message: Hello from bundled executable!");
        assert_eq!(lines[2], "Title: Tauri Bundled App");
    }

    #[test]
    fn empty_values_keep_prefix() {
        let lines = report(&DialogRequest::new("", ""));
        assert_eq!(lines[1], "Message: ");
        assert_eq!(lines[2], "Title: ");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let use_case = ConsoleReportUseCase::default();
        let err = use_case
            .execute(&DialogRequest::default(), &mut BrokenPipe)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write output"));
    }
}
