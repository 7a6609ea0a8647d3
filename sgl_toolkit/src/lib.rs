/*!
# SGL Toolkit

Small utilities for OpenGL applications: cameras driven by keyboard, mouse
and scroll input, an orthographic shadow volume fitted to the camera
frustum, a shader-stage compiler/linker, GL debug-output formatting and a
few constant meshes.

This crate is platform-agnostic: every GPU call goes through the
[`ShaderDevice`](sglt::shader::ShaderDevice) trait. The OpenGL
implementation lives in the `sgl_toolkit_gl` crate.

## Architecture

- **Camera**: `Camera` trait with spectator, first-person and orbit variants
- **CameraRegistry**: keyed camera storage shared with the shadow box
- **ShadowBox**: light-space bounding volume for directional shadows
- **ShaderProcessor**: up to six stages compiled and linked into one program
- **DebugOutput**: GL debug message filtering into the toolkit logger
*/

// Internal modules
mod error;
mod toolkit;
pub mod log;
pub mod camera;
pub mod shadow;
pub mod shader;
pub mod debug;
pub mod primitives;

// Main sglt namespace module
pub mod sglt {
    // Error types
    pub use crate::error::{Error, Result};

    // Toolkit services (global logger)
    pub use crate::toolkit::Toolkit;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Shadow sub-module
    pub mod shadow {
        pub use crate::shadow::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }

    // Debug output sub-module
    pub mod debug {
        pub use crate::debug::*;
    }

    // Constant meshes
    pub mod primitives {
        pub use crate::primitives::*;
    }
}

// Re-export math library at crate root
pub use glam;
