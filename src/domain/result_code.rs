//! Modal dialog result codes

use std::fmt;

/// Raw value returned by the platform's message box primitive.
///
/// Printed as the bare integer. Zero means the call itself failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCode(i32);

impl ResultCode {
    /// Code reported when the dialog could not be shown
    pub const FAILED: Self = Self(0);

    /// `IDOK`, reported by an OK-only box for both the button and closing it
    pub const OK: Self = Self(1);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Whether the platform call reported failure
    pub const fn is_failure(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
