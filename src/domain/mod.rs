//! Domain layer - Core value objects
//!
//! Contains the dialog request, build timestamp, result codes and errors.
//! This layer has no dependencies on external systems.

pub mod build_info;
pub mod error;
pub mod request;
pub mod result_code;

// Re-export common types
pub use build_info::BuildTimestamp;
pub use error::*;
pub use request::{DialogRequest, DEFAULT_MESSAGE, DEFAULT_TITLE};
pub use result_code::ResultCode;
