/// ShaderProcessor - builds one program from up to six shader stages.
///
/// Typical cycle: add each stage from a file (or source text), then
/// [`link`](ShaderProcessor::link) once. Compilation runs in pipeline order
/// and stops at the first failing stage, so a broken vertex shader never
/// compiles or attaches the fragment shader. Compile and link failures come
/// back as [`ShaderStatus`] values together with the driver log; only
/// misuse, I/O and driver refusals are errors.
///
/// The processor does not keep the device: every call that touches GPU
/// objects takes it as a parameter, and [`delete`](ShaderProcessor::delete)
/// must be called explicitly to release them.

use std::fs;
use std::path::Path;
use crate::error::{Error, Result};
use super::shader_device::ShaderDevice;
use super::shader_stage::{ProgramHandle, ShaderHandle, ShaderStage, ShaderStatus};

const LOG_SOURCE: &str = "sglt::ShaderProcessor";

/// One occupied stage: the shader object and whether it is attached to the
/// program yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StageSlot {
    shader: ShaderHandle,
    attached: bool,
}

#[derive(Debug, Default)]
pub struct ShaderProcessor {
    program: Option<ProgramHandle>,
    stages: [Option<StageSlot>; 6],
}

impl ShaderProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== ADDING STAGES =====

    /// Read `path` and add it as `stage`.
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read (nothing is created)
    /// - see [`add_shader_source`](Self::add_shader_source)
    pub fn add_shader(
        &mut self,
        device: &mut dyn ShaderDevice,
        stage: ShaderStage,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let source = Self::read_source(path)?;
        self.add_shader_source(device, stage, &source)
    }

    /// Add a stage from a raw GL shader type enum.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `gl_stage` is not a shader type.
    pub fn add_shader_raw(
        &mut self,
        device: &mut dyn ShaderDevice,
        gl_stage: u32,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let stage = ShaderStage::try_from(gl_stage).map_err(|e| {
            crate::toolkit_error!(LOG_SOURCE, "Rejected shader stage: {}", e);
            e
        })?;
        self.add_shader(device, stage, path)
    }

    /// Create a shader object for `stage` holding `source`.
    ///
    /// Replaces any shader already in that stage; the old object is detached
    /// (if attached) and deleted.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when mixing compute with graphics stages
    /// - `BackendError` if the device cannot create the shader
    pub fn add_shader_source(
        &mut self,
        device: &mut dyn ShaderDevice,
        stage: ShaderStage,
        source: &str,
    ) -> Result<()> {
        self.check_compatible(stage)?;

        let shader = device.create_shader(stage)?;
        device.shader_source(shader, source);

        let previous = self.stages[stage.index()].replace(StageSlot {
            shader,
            attached: false,
        });
        if let Some(old) = previous {
            self.release_slot(device, old);
        }

        crate::toolkit_debug!(LOG_SOURCE, "Added {} shader ({} bytes)", stage, source.len());
        Ok(())
    }

    /// A compute shader lives alone in its program.
    fn check_compatible(&self, stage: ShaderStage) -> Result<()> {
        let conflict = ShaderStage::ALL
            .iter()
            .filter(|other| other.is_compute() != stage.is_compute())
            .find(|other| self.has_stage(**other));

        match conflict {
            Some(other) => {
                crate::toolkit_error!(
                    LOG_SOURCE,
                    "Cannot add a {} shader to a program that has a {} shader",
                    stage,
                    other
                );
                Err(Error::InvalidArgument(format!(
                    "{} and {} shaders cannot share a program",
                    stage, other
                )))
            }
            None => Ok(()),
        }
    }

    fn release_slot(&self, device: &mut dyn ShaderDevice, slot: StageSlot) {
        if slot.attached {
            if let Some(program) = self.program {
                device.detach_shader(program, slot.shader);
            }
        }
        device.delete_shader(slot.shader);
    }

    // ===== LINKING =====

    /// Compile every stage and link the program.
    ///
    /// `log` receives the driver log of the failing step (at most
    /// `log_capacity` bytes) and is cleared on success.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if no stage was added
    /// - `BackendError` if the device cannot create the program
    pub fn link(
        &mut self,
        device: &mut dyn ShaderDevice,
        log: &mut String,
        log_capacity: usize,
    ) -> Result<ShaderStatus> {
        self.link_with(device, log, log_capacity, |_| {})
    }

    /// Same as [`link`](Self::link), calling `pre_link` with the program
    /// right before linking (after all stages are attached). Use it to bind
    /// attribute or fragment output locations.
    pub fn link_with(
        &mut self,
        device: &mut dyn ShaderDevice,
        log: &mut String,
        log_capacity: usize,
        pre_link: impl FnOnce(ProgramHandle),
    ) -> Result<ShaderStatus> {
        if self.stages.iter().all(Option::is_none) {
            crate::toolkit_error!(LOG_SOURCE, "Link requested with no shader stage");
            return Err(Error::InvalidResource("no shader stage to link".to_string()));
        }

        let program = match self.program {
            Some(program) => program,
            None => {
                let program = device.create_program()?;
                self.program = Some(program);
                program
            }
        };

        for stage in ShaderStage::ALL {
            let Some(slot) = self.stages[stage.index()].as_mut() else {
                continue;
            };

            device.compile_shader(slot.shader);
            if !device.shader_compile_status(slot.shader) {
                let info = device.shader_info_log(slot.shader);
                write_log(log, &info, log_capacity);
                crate::toolkit_warn!(
                    LOG_SOURCE,
                    "{} shader compilation failed: {}",
                    stage,
                    info.trim_end()
                );
                return Ok(ShaderStatus::CompileFailed(stage));
            }

            if !slot.attached {
                device.attach_shader(program, slot.shader);
                slot.attached = true;
            }
        }

        pre_link(program);
        device.link_program(program);

        if !device.program_link_status(program) {
            let info = device.program_info_log(program);
            write_log(log, &info, log_capacity);
            crate::toolkit_warn!(LOG_SOURCE, "Program link failed: {}", info.trim_end());
            return Ok(ShaderStatus::LinkFailed);
        }

        log.clear();
        crate::toolkit_debug!(LOG_SOURCE, "Program {} linked", program.raw());
        Ok(ShaderStatus::Ok)
    }

    // ===== RELEASE =====

    /// Unbind the program, detach and delete every stage, delete the program.
    ///
    /// The processor is empty afterwards and can be reused.
    pub fn delete(&mut self, device: &mut dyn ShaderDevice) {
        if self.program.is_some() {
            device.use_program(None);
        }

        for index in 0..self.stages.len() {
            if let Some(slot) = self.stages[index].take() {
                self.release_slot(device, slot);
            }
        }

        if let Some(program) = self.program.take() {
            device.delete_program(program);
        }
    }

    // ===== ACCESSORS =====

    pub fn program(&self) -> Option<ProgramHandle> {
        self.program
    }

    pub fn shader(&self, stage: ShaderStage) -> Option<ShaderHandle> {
        self.stages[stage.index()].map(|slot| slot.shader)
    }

    pub fn vertex(&self) -> Option<ShaderHandle> {
        self.shader(ShaderStage::Vertex)
    }

    pub fn tess_control(&self) -> Option<ShaderHandle> {
        self.shader(ShaderStage::TessControl)
    }

    pub fn tess_evaluation(&self) -> Option<ShaderHandle> {
        self.shader(ShaderStage::TessEvaluation)
    }

    pub fn geometry(&self) -> Option<ShaderHandle> {
        self.shader(ShaderStage::Geometry)
    }

    pub fn fragment(&self) -> Option<ShaderHandle> {
        self.shader(ShaderStage::Fragment)
    }

    pub fn compute(&self) -> Option<ShaderHandle> {
        self.shader(ShaderStage::Compute)
    }

    pub fn has_stage(&self, stage: ShaderStage) -> bool {
        self.stages[stage.index()].is_some()
    }

    /// Whether the stage's shader is attached to the program
    pub fn is_attached(&self, stage: ShaderStage) -> bool {
        self.stages[stage.index()].map_or(false, |slot| slot.attached)
    }

    /// No program and no stage
    pub fn is_empty(&self) -> bool {
        self.program.is_none() && self.stages.iter().all(Option::is_none)
    }

    // ===== FILES =====

    /// Read a whole shader source file as text.
    ///
    /// # Errors
    ///
    /// `Io` with the path and the OS message.
    pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| {
            crate::toolkit_error!(LOG_SOURCE, "Cannot read shader '{}': {}", path.display(), e);
            Error::Io(format!("{}: {}", path.display(), e))
        })
    }
}

impl Drop for ShaderProcessor {
    fn drop(&mut self) {
        if !self.is_empty() {
            crate::toolkit_warn!(
                LOG_SOURCE,
                "Dropped with live GPU objects (program {:?}); call delete() first",
                self.program.map(|p| p.raw())
            );
        }
    }
}

/// Replace `log` with at most `capacity` bytes of `text`, cut on a char
/// boundary.
fn write_log(log: &mut String, text: &str, capacity: usize) {
    let mut end = text.len().min(capacity);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    log.clear();
    log.push_str(&text[..end]);
}

#[cfg(test)]
#[path = "shader_processor_tests.rs"]
mod tests;
