/// GL debug output - installs the driver callback
///
/// Needs GL 4.3 or KHR_debug. Every accepted message goes through
/// [`DebugOutput`] into the toolkit logger under `sglt::gl`.

use std::sync::Arc;
use glow::HasContext;
use sgl_toolkit::sglt::Result;
use sgl_toolkit::sglt::debug::{DebugOutput, DebugOutputConfig};
use sgl_toolkit::{toolkit_bail, toolkit_info};

/// Enable `GL_DEBUG_OUTPUT` and route driver messages to the logger.
///
/// Returns the sink so the caller can read statistics later.
///
/// # Errors
///
/// `BackendError` if the context exposes no debug output.
pub fn install_debug_output(
    gl: &mut glow::Context,
    config: DebugOutputConfig,
) -> Result<Arc<DebugOutput>> {
    if !gl.supports_debug() {
        toolkit_bail!("sglt::gl", "Context has no debug output (needs GL 4.3 or KHR_debug)");
    }

    let synchronous = config.synchronous;
    let output = Arc::new(DebugOutput::new(config));
    let sink = Arc::clone(&output);

    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        if synchronous {
            gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        }
        gl.debug_message_callback(move |source, kind, id, severity, message| {
            sink.handle(source, kind, id, severity, message);
        });
    }

    toolkit_info!("sglt::gl", "Debug output enabled (synchronous: {})", synchronous);
    Ok(output)
}

#[cfg(test)]
#[path = "gl_debug_tests.rs"]
mod tests;
