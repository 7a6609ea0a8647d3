/// Mock shader device for unit tests (no GPU required)
///
/// Records every call as a string in `commands`. A source containing
/// `#error` fails to compile; `fail_link` makes every link fail and
/// `fail_create` makes object creation fail.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::toolkit_bail;
#[cfg(test)]
use super::shader_device::ShaderDevice;
#[cfg(test)]
use super::shader_stage::{ProgramHandle, ShaderHandle, ShaderStage};

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockShaderDevice {
    pub commands: Vec<String>,
    pub fail_link: bool,
    pub fail_create: bool,
    next_id: u32,
    sources: HashMap<u32, String>,
    compiled: HashMap<u32, bool>,
    linked: HashMap<u32, bool>,
}

#[cfg(test)]
impl MockShaderDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Recorded commands starting with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands.iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn has(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c == command)
    }

    pub fn source(&self, shader: ShaderHandle) -> Option<&str> {
        self.sources.get(&shader.raw()).map(String::as_str)
    }
}

#[cfg(test)]
impl ShaderDevice for MockShaderDevice {
    fn create_shader(&mut self, stage: ShaderStage) -> Result<ShaderHandle> {
        if self.fail_create {
            toolkit_bail!("sglt::MockShaderDevice", "create_shader({}) refused", stage);
        }
        let id = self.next_id();
        self.commands.push(format!("create_shader {} {}", stage, id));
        match ShaderHandle::new(id) {
            Some(handle) => Ok(handle),
            None => toolkit_bail!("sglt::MockShaderDevice", "shader id overflow"),
        }
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &str) {
        self.commands.push(format!("shader_source {}", shader.raw()));
        self.sources.insert(shader.raw(), source.to_string());
    }

    fn compile_shader(&mut self, shader: ShaderHandle) {
        self.commands.push(format!("compile_shader {}", shader.raw()));
        let ok = self
            .sources
            .get(&shader.raw())
            .map_or(false, |source| !source.contains("#error"));
        self.compiled.insert(shader.raw(), ok);
    }

    fn shader_compile_status(&self, shader: ShaderHandle) -> bool {
        self.compiled.get(&shader.raw()).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            format!("ERROR: 0:1: '#error' : shader {} rejected\n", shader.raw())
        }
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.commands.push(format!("delete_shader {}", shader.raw()));
        self.sources.remove(&shader.raw());
        self.compiled.remove(&shader.raw());
    }

    fn create_program(&mut self) -> Result<ProgramHandle> {
        if self.fail_create {
            toolkit_bail!("sglt::MockShaderDevice", "create_program refused");
        }
        let id = self.next_id();
        self.commands.push(format!("create_program {}", id));
        match ProgramHandle::new(id) {
            Some(handle) => Ok(handle),
            None => toolkit_bail!("sglt::MockShaderDevice", "program id overflow"),
        }
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.commands.push(format!("attach_shader {} {}", program.raw(), shader.raw()));
    }

    fn detach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.commands.push(format!("detach_shader {} {}", program.raw(), shader.raw()));
    }

    fn link_program(&mut self, program: ProgramHandle) {
        self.commands.push(format!("link_program {}", program.raw()));
        self.linked.insert(program.raw(), !self.fail_link);
    }

    fn program_link_status(&self, program: ProgramHandle) -> bool {
        self.linked.get(&program.raw()).copied().unwrap_or(false)
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: undefined reference to `main'".to_string()
        }
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.commands.push(format!("delete_program {}", program.raw()));
        self.linked.remove(&program.raw());
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) {
        match program {
            Some(program) => self.commands.push(format!("use_program {}", program.raw())),
            None => self.commands.push("use_program 0".to_string()),
        }
    }
}
