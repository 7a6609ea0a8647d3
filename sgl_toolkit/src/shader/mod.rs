//! Shader module - stage compilation and program linking.
//!
//! [`ShaderProcessor`] drives any [`ShaderDevice`]; the OpenGL device lives in
//! the `sgl_toolkit_gl` crate.

mod shader_stage;
mod shader_device;
mod shader_processor;
pub(crate) mod mock_shader_device;

pub use shader_stage::{
    ShaderStage, ShaderStatus, ShaderHandle, ProgramHandle,
    GL_VERTEX_SHADER, GL_TESS_CONTROL_SHADER, GL_TESS_EVALUATION_SHADER,
    GL_GEOMETRY_SHADER, GL_FRAGMENT_SHADER, GL_COMPUTE_SHADER,
};
pub use shader_device::ShaderDevice;
pub use shader_processor::ShaderProcessor;
