/// OpenGL implementation of ShaderDevice on top of glow
///
/// Borrows the glow context; the caller keeps ownership and must keep it
/// current on the calling thread for every call.

use glow::HasContext;
use sgl_toolkit::sglt::Result;
use sgl_toolkit::sglt::shader::{ProgramHandle, ShaderDevice, ShaderHandle, ShaderStage};
use sgl_toolkit::toolkit_err;

const LOG_SOURCE: &str = "sglt::gl";

pub(crate) fn native_shader(shader: ShaderHandle) -> glow::NativeShader {
    glow::NativeShader(shader.non_zero())
}

pub(crate) fn native_program(program: ProgramHandle) -> glow::NativeProgram {
    glow::NativeProgram(program.non_zero())
}

/// glow-backed shader device
pub struct GlShaderDevice<'gl> {
    gl: &'gl glow::Context,
}

impl<'gl> GlShaderDevice<'gl> {
    pub fn new(gl: &'gl glow::Context) -> Self {
        Self { gl }
    }

    /// Underlying context, e.g. for attribute binding in a pre-link hook
    pub fn context(&self) -> &'gl glow::Context {
        self.gl
    }
}

impl ShaderDevice for GlShaderDevice<'_> {
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderHandle> {
        let shader = unsafe { self.gl.create_shader(stage.gl_enum()) }.map_err(|e| {
            toolkit_err!(LOG_SOURCE, "glCreateShader({}) failed: {}", stage, e)
        })?;
        Ok(ShaderHandle::from_non_zero(shader.0))
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        unsafe { self.gl.shader_source(native_shader(shader), source) }
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        unsafe { self.gl.compile_shader(native_shader(shader)) }
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        unsafe { self.gl.get_shader_compile_status(native_shader(shader)) }
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        unsafe { self.gl.get_shader_info_log(native_shader(shader)) }
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        unsafe { self.gl.delete_shader(native_shader(shader)) }
    }

    fn create_program(&mut self) -> Result<ProgramHandle> {
        let program = unsafe { self.gl.create_program() }
            .map_err(|e| toolkit_err!(LOG_SOURCE, "glCreateProgram failed: {}", e))?;
        Ok(ProgramHandle::from_non_zero(program.0))
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe { self.gl.attach_shader(native_program(program), native_shader(shader)) }
    }

    fn detach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe { self.gl.detach_shader(native_program(program), native_shader(shader)) }
    }

    fn link_program(&mut self, program: ProgramHandle) {
        unsafe { self.gl.link_program(native_program(program)) }
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        unsafe { self.gl.get_program_link_status(native_program(program)) }
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        unsafe { self.gl.get_program_info_log(native_program(program)) }
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        unsafe { self.gl.delete_program(native_program(program)) }
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) {
        unsafe { self.gl.use_program(program.map(native_program)) }
    }
}

#[cfg(test)]
#[path = "gl_shader_device_tests.rs"]
mod tests;
