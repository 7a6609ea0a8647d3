//! Shared helpers for integration tests (no GPU required)

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use sgl_toolkit::sglt::{Error, Result};
use sgl_toolkit::sglt::shader::{ProgramHandle, ShaderDevice, ShaderHandle, ShaderStage};

/// Shader device that records calls and fails any source containing `#error`
#[derive(Default)]
pub struct RecordingDevice {
    pub calls: Vec<String>,
    pub fail_link: bool,
    next_id: u32,
    sources: HashMap<u32, String>,
    compiled: HashMap<u32, bool>,
    linked: HashMap<u32, bool>,
    pub live_shaders: usize,
    pub live_programs: usize,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn calls_named(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| c.split(' ').next() == Some(name)).count()
    }
}

impl ShaderDevice for RecordingDevice {
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderHandle> {
        let id = self.allocate();
        self.calls.push(format!("create_shader {}", stage));
        self.live_shaders += 1;
        ShaderHandle::new(id).ok_or_else(|| Error::BackendError("zero shader id".to_string()))
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        self.calls.push(format!("shader_source {}", shader.raw()));
        self.sources.insert(shader.raw(), source.to_string());
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        self.calls.push(format!("compile_shader {}", shader.raw()));
        let ok = self.sources.get(&shader.raw()).map_or(false, |s| !s.contains("#error"));
        self.compiled.insert(shader.raw(), ok);
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.compiled.get(&shader.raw()).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, _shader: ShaderHandle) -> String {
        "0(2) : error C0000: syntax error, unexpected '#error'".to_string()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.calls.push(format!("delete_shader {}", shader.raw()));
        self.live_shaders -= 1;
    }

    fn create_program(&mut self) -> Result<ProgramHandle> {
        let id = self.allocate();
        self.calls.push(format!("create_program {}", id));
        self.live_programs += 1;
        ProgramHandle::new(id).ok_or_else(|| Error::BackendError("zero program id".to_string()))
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.calls.push(format!("attach_shader {} {}", program.raw(), shader.raw()));
    }

    fn detach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.calls.push(format!("detach_shader {} {}", program.raw(), shader.raw()));
    }

    fn link_program(&mut self, program: ProgramHandle) {
        self.calls.push(format!("link_program {}", program.raw()));
        self.linked.insert(program.raw(), !self.fail_link);
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.linked.get(&program.raw()).copied().unwrap_or(false)
    }

    fn program_info_log(&self, _program: ProgramHandle) -> String {
        "Fragment info\n-------------\n0(3) : error C5052: gl_FragColor is not writable".to_string()
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.calls.push(format!("delete_program {}", program.raw()));
        self.live_programs -= 1;
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) {
        self.calls.push(format!("use_program {}", program.map_or(0, |p| p.raw())));
    }
}

/// Write a shader file under the system temp directory
pub fn write_temp_shader(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sglt_it_{}_{}", std::process::id(), name));
    std::fs::write(&path, source).unwrap();
    path
}

pub const VERTEX_SRC: &str = "#version 330 core\nlayout(location = 0) in vec3 aPos;\nvoid main() { gl_Position = vec4(aPos, 1.0); }\n";
pub const FRAGMENT_SRC: &str = "#version 330 core\nout vec4 FragColor;\nvoid main() { FragColor = vec4(1.0); }\n";
pub const GEOMETRY_SRC: &str = "#version 330 core\nlayout(triangles) in;\nlayout(triangle_strip, max_vertices = 3) out;\nvoid main() {}\n";
pub const COMPUTE_SRC: &str = "#version 430 core\nlayout(local_size_x = 8) in;\nvoid main() {}\n";
pub const BROKEN_SRC: &str = "#version 330 core\n#error unfinished\n";
