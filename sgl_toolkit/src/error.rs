//! Error types for the SGL toolkit
//!
//! Hard failures only. Shader compile and link failures are not errors:
//! they are reported as [`ShaderStatus`](crate::shader::ShaderStatus) values
//! together with the driver log.

use std::fmt;

/// Result type for toolkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Toolkit errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid argument at the call site (unknown stage enum, mixed stages, ...)
    InvalidArgument(String),

    /// A file could not be read
    Io(String),

    /// Invalid resource (unregistered camera key, ...)
    InvalidResource(String),

    /// The graphics API refused to create an object
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error (with file:line) and build an [`Error::BackendError`]
///
/// # Example
///
/// ```no_run
/// # use sgl_toolkit::toolkit_err;
/// let err = toolkit_err!("sglt::gl", "glCreateProgram failed: {}", "out of memory");
/// ```
#[macro_export]
macro_rules! toolkit_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::sglt::Toolkit::log_detailed(
            $crate::sglt::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::sglt::Error::BackendError(message)
    }};
}

/// Log an error and return early with an [`Error::BackendError`]
#[macro_export]
macro_rules! toolkit_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::toolkit_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
