//! Error types for planar water passes
//!
//! Almost every failure in a pass is a silent skip (see `DispatchOutcome`).
//! The variants here cover what is left: the host refusing to allocate or
//! render, and requests that cannot be satisfied at all.

use std::fmt;

/// Result type for planar water operations
pub type Result<T> = std::result::Result<T, Error>;

/// Planar water errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Host render pipeline error (texture allocation, single-camera render, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (zero-sized texture, unknown camera handle, etc.)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR and build an `Error::BackendError` with the same message.
///
/// ```ignore
/// let tex = lookup(id).ok_or_else(|| water_err!("planar_water::Host", "Unknown texture {:?}", id))?;
/// ```
#[macro_export]
macro_rules! water_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::water_error!($source, "{}", message);
        $crate::error::Error::BackendError(message)
    }};
}

/// Log an ERROR and return early with an `Error::BackendError`.
#[macro_export]
macro_rules! water_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::water_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
