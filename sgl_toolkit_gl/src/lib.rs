/*!
# SGL Toolkit - OpenGL Backend

OpenGL implementation of the `sgl_toolkit` device traits, built on `glow`.

- [`GlShaderDevice`]: `ShaderDevice` over a borrowed `glow::Context`
- [`install_debug_output`]: driver debug messages into the toolkit logger
  (feature `debug-output`, on by default)

## Example

```no_run
use sgl_toolkit::sglt::shader::{ShaderProcessor, ShaderStage};
use sgl_toolkit_gl::GlShaderDevice;

fn build(gl: &glow::Context) -> sgl_toolkit::sglt::Result<()> {
    let mut device = GlShaderDevice::new(gl);
    let mut processor = ShaderProcessor::new();
    processor.add_shader(&mut device, ShaderStage::Vertex, "shaders/basic.vert")?;
    processor.add_shader(&mut device, ShaderStage::Fragment, "shaders/basic.frag")?;

    let mut log = String::new();
    let status = processor.link(&mut device, &mut log, 1024)?;
    if !status.is_ok() {
        eprintln!("{} ({}): {}", status, status.code(), log);
    }
    processor.delete(&mut device);
    Ok(())
}
```
*/

mod gl_shader_device;
#[cfg(feature = "debug-output")]
mod gl_debug;

pub use gl_shader_device::GlShaderDevice;
#[cfg(feature = "debug-output")]
pub use gl_debug::install_debug_output;
