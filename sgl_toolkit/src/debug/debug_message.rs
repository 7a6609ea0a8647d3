/// GL debug-output message classification and formatting

use std::fmt;

// GL_KHR_debug enums
pub const GL_DEBUG_SOURCE_API: u32 = 0x8246;
pub const GL_DEBUG_SOURCE_WINDOW_SYSTEM: u32 = 0x8247;
pub const GL_DEBUG_SOURCE_SHADER_COMPILER: u32 = 0x8248;
pub const GL_DEBUG_SOURCE_THIRD_PARTY: u32 = 0x8249;
pub const GL_DEBUG_SOURCE_APPLICATION: u32 = 0x824A;
pub const GL_DEBUG_SOURCE_OTHER: u32 = 0x824B;

pub const GL_DEBUG_TYPE_ERROR: u32 = 0x824C;
pub const GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR: u32 = 0x824D;
pub const GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR: u32 = 0x824E;
pub const GL_DEBUG_TYPE_PORTABILITY: u32 = 0x824F;
pub const GL_DEBUG_TYPE_PERFORMANCE: u32 = 0x8250;
pub const GL_DEBUG_TYPE_OTHER: u32 = 0x8251;
pub const GL_DEBUG_TYPE_MARKER: u32 = 0x8268;

pub const GL_DEBUG_SEVERITY_HIGH: u32 = 0x9146;
pub const GL_DEBUG_SEVERITY_MEDIUM: u32 = 0x9147;
pub const GL_DEBUG_SEVERITY_LOW: u32 = 0x9148;
pub const GL_DEBUG_SEVERITY_NOTIFICATION: u32 = 0x826B;

/// Label used for any value outside the known enums
const UNKNOWN_LABEL: &str = "NULL";

// ===== SOURCE =====

/// Who generated the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
    /// Raw value not in the GL_DEBUG_SOURCE_* set
    Unknown(u32),
}

impl DebugSource {
    pub fn from_gl(value: u32) -> Self {
        match value {
            GL_DEBUG_SOURCE_API => DebugSource::Api,
            GL_DEBUG_SOURCE_WINDOW_SYSTEM => DebugSource::WindowSystem,
            GL_DEBUG_SOURCE_SHADER_COMPILER => DebugSource::ShaderCompiler,
            GL_DEBUG_SOURCE_THIRD_PARTY => DebugSource::ThirdParty,
            GL_DEBUG_SOURCE_APPLICATION => DebugSource::Application,
            GL_DEBUG_SOURCE_OTHER => DebugSource::Other,
            other => DebugSource::Unknown(other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebugSource::Api => "API",
            DebugSource::WindowSystem => "WINDOW SYSTEM",
            DebugSource::ShaderCompiler => "SHADER COMPILER",
            DebugSource::ThirdParty => "THIRD PARTY",
            DebugSource::Application => "APPLICATION",
            DebugSource::Other => "OTHER",
            DebugSource::Unknown(_) => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for DebugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== TYPE =====

/// What kind of event the message describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    Other,
    /// Raw value not in the GL_DEBUG_TYPE_* set (push/pop group included)
    Unknown(u32),
}

impl DebugType {
    pub fn from_gl(value: u32) -> Self {
        match value {
            GL_DEBUG_TYPE_ERROR => DebugType::Error,
            GL_DEBUG_TYPE_DEPRECATED_BEHAVIOR => DebugType::DeprecatedBehavior,
            GL_DEBUG_TYPE_UNDEFINED_BEHAVIOR => DebugType::UndefinedBehavior,
            GL_DEBUG_TYPE_PORTABILITY => DebugType::Portability,
            GL_DEBUG_TYPE_PERFORMANCE => DebugType::Performance,
            GL_DEBUG_TYPE_MARKER => DebugType::Marker,
            GL_DEBUG_TYPE_OTHER => DebugType::Other,
            other => DebugType::Unknown(other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebugType::Error => "ERROR",
            DebugType::DeprecatedBehavior => "DEPRECATED_BEHAVIOR",
            DebugType::UndefinedBehavior => "UNDEFINED_BEHAVIOR",
            DebugType::Portability => "PORTABILITY",
            DebugType::Performance => "PERFORMANCE",
            DebugType::Marker => "MARKER",
            DebugType::Other => "OTHER",
            DebugType::Unknown(_) => UNKNOWN_LABEL,
        }
    }

    /// Errors and GL conformance problems (deprecated, undefined,
    /// portability)
    pub fn is_conformance(self) -> bool {
        matches!(
            self,
            DebugType::Error
                | DebugType::DeprecatedBehavior
                | DebugType::UndefinedBehavior
                | DebugType::Portability
        )
    }
}

impl fmt::Display for DebugType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== SEVERITY =====

/// Driver-assigned importance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugSeverity {
    High,
    Medium,
    Low,
    Notification,
    /// Raw value not in the GL_DEBUG_SEVERITY_* set
    Unknown(u32),
}

impl DebugSeverity {
    pub fn from_gl(value: u32) -> Self {
        match value {
            GL_DEBUG_SEVERITY_HIGH => DebugSeverity::High,
            GL_DEBUG_SEVERITY_MEDIUM => DebugSeverity::Medium,
            GL_DEBUG_SEVERITY_LOW => DebugSeverity::Low,
            GL_DEBUG_SEVERITY_NOTIFICATION => DebugSeverity::Notification,
            other => DebugSeverity::Unknown(other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebugSeverity::High => "HIGH",
            DebugSeverity::Medium => "MEDIUM",
            DebugSeverity::Low => "LOW",
            DebugSeverity::Notification => "NOTIFICATION",
            DebugSeverity::Unknown(_) => UNKNOWN_LABEL,
        }
    }
}

impl fmt::Display for DebugSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== MESSAGE =====

/// One message delivered by the driver's debug callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMessage {
    pub source: DebugSource,
    pub kind: DebugType,
    pub id: u32,
    pub severity: DebugSeverity,
    pub message: String,
}

impl DebugMessage {
    /// Classify the raw callback arguments
    pub fn from_gl(source: u32, kind: u32, id: u32, severity: u32, message: &str) -> Self {
        Self {
            source: DebugSource::from_gl(source),
            kind: DebugType::from_gl(kind),
            id,
            severity: DebugSeverity::from_gl(severity),
            message: message.to_string(),
        }
    }
}

/// `SOURCE::TYPE::SEVERITY::id: ` followed by the message on its own line
impl fmt::Display for DebugMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}::{}: \n{}",
            self.source, self.kind, self.severity, self.id, self.message
        )
    }
}

#[cfg(test)]
#[path = "debug_message_tests.rs"]
mod tests;
