//! Error types for the Orrery engine
//!
//! This module defines the error type used throughout the engine, together
//! with the `engine_err!` / `engine_bail!` macros that log an error at the
//! site where it is created.

use std::fmt;

/// Result type for Orrery engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Orrery engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (buffer upload, program link, ...)
    BackendError(String),

    /// Invalid resource (texture, geometry, dangling key, ...)
    InvalidResource(String),

    /// Initialization failed (configuration, renderer, subsystems)
    InitializationFailed(String),

    /// A shader attribute or uniform required by the scene program is missing
    MissingShaderInput(String),

    /// A draw precondition was violated (node without geometry, unknown light, ...)
    PreconditionFailed(String),

    /// Invalid scene wiring (unknown parent, duplicate name, cycle, ...)
    InvalidScene(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::MissingShaderInput(msg) => write!(f, "Missing shader input: {}", msg),
            Error::PreconditionFailed(msg) => write!(f, "Precondition failed: {}", msg),
            Error::InvalidScene(msg) => write!(f, "Invalid scene: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] and log it with file:line information.
///
/// The first form picks the variant explicitly, the second one defaults to
/// `Error::InvalidResource`.
///
/// ```ignore
/// let err = engine_err!(@InvalidScene, "orrery::SceneGraph", "Unknown parent '{}'", name);
/// let err = engine_err!("orrery::ResourceManager", "Texture '{}' not found", name);
/// ```
#[macro_export]
macro_rules! engine_err {
    (@$kind:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::orrery::Error::$kind(message)
    }};
    ($source:expr, $($arg:tt)*) => {
        $crate::engine_err!(@InvalidResource, $source, $($arg)*)
    };
}

/// Log an error and return it from the current function.
#[macro_export]
macro_rules! engine_bail {
    (@$kind:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!(@$kind, $source, $($arg)*))
    };
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
