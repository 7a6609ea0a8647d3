//! Camera module - camera capability, variants and registry.
//!
//! Every variant implements [`Camera`] over a shared [`CameraState`].
//! Cameras are owned by the caller, optionally inside a [`CameraRegistry`]
//! so other components can refer to them through a [`CameraKey`].

mod camera;
mod spectator_camera;
mod first_person_camera;
mod orbit_camera;
mod camera_registry;

pub use camera::{
    Camera, CameraDesc, CameraMovement, CameraState, Range,
    PITCH_LIMIT, YAW_WRAP, ZOOM_LIMIT,
};
pub use spectator_camera::SpectatorCamera;
pub use first_person_camera::FirstPersonCamera;
pub use orbit_camera::{OrbitCamera, OrbitCameraDesc};
pub use camera_registry::{CameraKey, CameraRegistry};
