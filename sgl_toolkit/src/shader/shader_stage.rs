/// Shader stages, link status and GPU object handles

use std::fmt;
use std::num::NonZeroU32;
use crate::error::Error;

// GL shader type enums (GL 4.3 core)
pub const GL_VERTEX_SHADER: u32 = 0x8B31;
pub const GL_TESS_CONTROL_SHADER: u32 = 0x8E88;
pub const GL_TESS_EVALUATION_SHADER: u32 = 0x8E87;
pub const GL_GEOMETRY_SHADER: u32 = 0x8DD9;
pub const GL_FRAGMENT_SHADER: u32 = 0x8B30;
pub const GL_COMPUTE_SHADER: u32 = 0x91B9;

// ===== SHADER STAGE =====

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Tessellation control shader
    TessControl,
    /// Tessellation evaluation shader
    TessEvaluation,
    /// Geometry shader
    Geometry,
    /// Fragment/Pixel shader
    Fragment,
    /// Compute shader (never combined with the graphics stages)
    Compute,
}

impl ShaderStage {
    /// All stages, in pipeline (and compile) order
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::TessControl,
        ShaderStage::TessEvaluation,
        ShaderStage::Geometry,
        ShaderStage::Fragment,
        ShaderStage::Compute,
    ];

    /// Slot index, matches the position in [`ShaderStage::ALL`]
    pub fn index(self) -> usize {
        match self {
            ShaderStage::Vertex => 0,
            ShaderStage::TessControl => 1,
            ShaderStage::TessEvaluation => 2,
            ShaderStage::Geometry => 3,
            ShaderStage::Fragment => 4,
            ShaderStage::Compute => 5,
        }
    }

    pub fn is_compute(self) -> bool {
        self == ShaderStage::Compute
    }

    /// Raw GL shader type enum
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => GL_VERTEX_SHADER,
            ShaderStage::TessControl => GL_TESS_CONTROL_SHADER,
            ShaderStage::TessEvaluation => GL_TESS_EVALUATION_SHADER,
            ShaderStage::Geometry => GL_GEOMETRY_SHADER,
            ShaderStage::Fragment => GL_FRAGMENT_SHADER,
            ShaderStage::Compute => GL_COMPUTE_SHADER,
        }
    }

    /// Human-readable stage name, used in log messages
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::TessControl => "tessellation control",
            ShaderStage::TessEvaluation => "tessellation evaluation",
            ShaderStage::Geometry => "geometry",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        }
    }
}

impl TryFrom<u32> for ShaderStage {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            GL_VERTEX_SHADER => Ok(ShaderStage::Vertex),
            GL_TESS_CONTROL_SHADER => Ok(ShaderStage::TessControl),
            GL_TESS_EVALUATION_SHADER => Ok(ShaderStage::TessEvaluation),
            GL_GEOMETRY_SHADER => Ok(ShaderStage::Geometry),
            GL_FRAGMENT_SHADER => Ok(ShaderStage::Fragment),
            GL_COMPUTE_SHADER => Ok(ShaderStage::Compute),
            other => Err(Error::InvalidArgument(format!(
                "0x{:04X} is not a shader stage",
                other
            ))),
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===== SHADER STATUS =====

/// Outcome of [`ShaderProcessor::link`](super::ShaderProcessor::link).
///
/// Compile and link failures are reported here, not as errors: they are
/// expected during shader development and come with a driver log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStatus {
    /// Every present stage compiled and the program linked
    Ok,
    /// The given stage failed to compile; later stages were not compiled
    CompileFailed(ShaderStage),
    /// All stages compiled but the program failed to link
    LinkFailed,
}

impl ShaderStatus {
    /// Numeric status code: 200 for success, 401..=406 for a failed stage
    /// (pipeline order), 407 for a link failure.
    pub fn code(self) -> u32 {
        match self {
            ShaderStatus::Ok => 200,
            ShaderStatus::CompileFailed(stage) => 401 + stage.index() as u32,
            ShaderStatus::LinkFailed => 407,
        }
    }

    pub fn is_ok(self) -> bool {
        self == ShaderStatus::Ok
    }
}

impl fmt::Display for ShaderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStatus::Ok => write!(f, "OK"),
            ShaderStatus::CompileFailed(stage) => write!(f, "{} shader compilation failed", stage),
            ShaderStatus::LinkFailed => write!(f, "program link failed"),
        }
    }
}

// ===== HANDLES =====

/// Device shader object name (never 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(NonZeroU32);

impl ShaderHandle {
    /// Wrap a raw object name; `None` for 0
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn from_non_zero(raw: NonZeroU32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0.get()
    }

    pub fn non_zero(self) -> NonZeroU32 {
        self.0
    }
}

/// Device program object name (never 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(NonZeroU32);

impl ProgramHandle {
    /// Wrap a raw object name; `None` for 0
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn from_non_zero(raw: NonZeroU32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0.get()
    }

    pub fn non_zero(self) -> NonZeroU32 {
        self.0
    }
}

#[cfg(test)]
#[path = "shader_stage_tests.rs"]
mod tests;
