//! Debug module - GL debug-output classification and sink.
//!
//! The driver callback itself is installed by the backend crate; this
//! module only interprets the raw enums and routes messages into the
//! toolkit logger.

mod debug_message;
mod debug_output;

pub use debug_message::{
    DebugMessage, DebugSource, DebugType, DebugSeverity,
    GL_DEBUG_SOURCE_API, GL_DEBUG_SOURCE_WINDOW_SYSTEM, GL_DEBUG_SOURCE_SHADER_COMPILER,
    GL_DEBUG_SOURCE_THIRD_PARTY, GL_DEBUG_SOURCE_APPLICATION, GL_DEBUG_SOURCE_OTHER,
    GL_DEBUG_TYPE_ERROR, GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR, GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR,
    GL_DEBUG_TYPE_PORTABILITY, GL_DEBUG_TYPE_PERFORMANCE, GL_DEBUG_TYPE_OTHER, GL_DEBUG_TYPE_MARKER,
    GL_DEBUG_SEVERITY_HIGH, GL_DEBUG_SEVERITY_MEDIUM, GL_DEBUG_SEVERITY_LOW,
    GL_DEBUG_SEVERITY_NOTIFICATION,
};
pub use debug_output::{
    DebugOutput, DebugOutputConfig, DebugSeverityFilter, DebugMessageFilter, DebugStats,
    log_severity, DEFAULT_MAX_TRACKED_MESSAGES, LOG_SOURCE,
};
