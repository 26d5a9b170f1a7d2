//! Build timestamp stamped by the build script

use std::fmt;

/// Date and time the binary was compiled.
///
/// Both parts are compile-time constants, so the value reflects the build,
/// never the moment the program runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTimestamp {
    date: &'static str,
    time: &'static str,
}

impl BuildTimestamp {
    /// Timestamp of the current build
    pub const fn current() -> Self {
        Self {
            date: env!("DIALOG_BUILD_DATE"),
            time: env!("DIALOG_BUILD_TIME"),
        }
    }

    /// Create a timestamp from fixed parts
    pub const fn new(date: &'static str, time: &'static str) -> Self {
        Self { date, time }
    }
}

impl fmt::Display for BuildTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
