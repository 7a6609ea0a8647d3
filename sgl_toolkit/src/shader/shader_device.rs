/// ShaderDevice trait - the graphics API boundary for shader objects.
///
/// Implemented by backend crates (e.g. `sgl_toolkit_gl::GlShaderDevice`)
/// and by recording mocks in tests. Mirrors the GL shader/program object
/// model one call per method; status and log queries never fail, object
/// creation may.

use crate::error::Result;
use super::shader_stage::{ProgramHandle, ShaderHandle, ShaderStage};

pub trait ShaderDevice {
    // ===== SHADER OBJECTS =====

    /// Create an empty shader object for `stage`
    ///
    /// # Errors
    ///
    /// `BackendError` if the driver refuses to create the object.
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderHandle>;

    /// Replace the shader's source text
    fn shader_source(&mut self, shader: ShaderHandle, source: &str);

    fn compile_shader(&mut self, shader: ShaderHandle);

    /// Whether the last compilation succeeded
    fn shader_compile_status(&self, shader: ShaderHandle) -> bool;

    /// Driver compile log (may be empty)
    fn shader_info_log(&self, shader: ShaderHandle) -> String;

    fn delete_shader(&mut self, shader: ShaderHandle);

    // ===== PROGRAM OBJECTS =====

    /// Create an empty program object
    ///
    /// # Errors
    ///
    /// `BackendError` if the driver refuses to create the object.
    fn create_program(&mut self) -> Result<ProgramHandle>;

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);

    fn detach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);

    fn link_program(&mut self, program: ProgramHandle);

    /// Whether the last link succeeded
    fn program_link_status(&self, program: ProgramHandle) -> bool;

    /// Driver link log (may be empty)
    fn program_info_log(&self, program: ProgramHandle) -> String;

    fn delete_program(&mut self, program: ProgramHandle);

    /// Bind a program for rendering, or unbind with `None`
    fn use_program(&mut self, program: Option<ProgramHandle>);
}
