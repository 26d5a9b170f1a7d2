//! Native Windows message box adapter

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

use windows_sys::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONINFORMATION, MB_OK};

use crate::application::ports::ModalDialog;
use crate::domain::ResultCode;

/// Modal dialog backed by `MessageBoxW`
pub struct Win32MessageBox;

impl Win32MessageBox {
    /// Create a new Win32 message box adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32MessageBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalDialog for Win32MessageBox {
    fn show_modal(&self, message: &str, title: &str) -> ResultCode {
        let text = to_wide(message);
        let caption = to_wide(title);

        // SAFETY: text and caption are null-terminated UTF-16 buffers that
        // outlive the call. A null owner window is allowed.
        let code = unsafe {
            MessageBoxW(
                std::ptr::null_mut(),
                text.as_ptr(),
                caption.as_ptr(),
                MB_OK | MB_ICONINFORMATION,
            )
        };

        ResultCode::new(code)
    }
}

/// Encode as null-terminated UTF-16
fn to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s).encode_wide().chain(Some(0)).collect()
}
