/// Orbit camera circling a target point.
///
/// The cursor turns the camera around the target (pitch is always limited so
/// the orbit never flips over a pole). Forward/backward dolly towards or away
/// from the target within the distance range; left/right/up/down pan the
/// target itself. Scroll changes the field of view, like every other camera.

use glam::Vec3;
use super::camera::{Camera, CameraDesc, CameraMovement, CameraState, Range};

/// Orbit camera configuration
#[derive(Debug, Clone)]
pub struct OrbitCameraDesc {
    /// Angles, speed, sensitivity and zoom (position is derived)
    pub camera: CameraDesc,
    /// Point the camera orbits around
    pub target: Vec3,
    /// Initial distance from the target
    pub distance: f32,
    /// Allowed distance range
    pub distance_limit: Range,
}

impl Default for OrbitCameraDesc {
    fn default() -> Self {
        Self {
            camera: CameraDesc::default(),
            target: Vec3::ZERO,
            distance: 5.0,
            distance_limit: Range::new(0.5, 100.0),
        }
    }
}

/// Camera orbiting a target; position is `target - front * distance`
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    state: CameraState,
    target: Vec3,
    distance: f32,
    distance_limit: Range,
}

impl OrbitCamera {
    pub fn new(desc: OrbitCameraDesc) -> Self {
        let mut state = CameraState::new(&desc.camera);
        state.update_basis();

        let mut camera = Self {
            state,
            target: desc.target,
            distance: desc.distance_limit.clamp(desc.distance),
            distance_limit: desc.distance_limit,
        };
        camera.sync_position();
        camera
    }

    /// Point being orbited
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current distance from the target
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn distance_limit(&self) -> Range {
        self.distance_limit
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.sync_position();
    }

    /// Set the distance (clamped to the distance range)
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = self.distance_limit.clamp(distance);
        self.sync_position();
    }

    fn sync_position(&mut self) {
        let position = self.target - self.state.front() * self.distance;
        self.state.set_position(position);
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitCameraDesc::default())
    }
}

impl Camera for OrbitCamera {
    fn state(&self) -> &CameraState {
        &self.state
    }

    fn key_update(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.state.velocity(delta_time);

        match direction {
            CameraMovement::Forward => {
                self.distance = self.distance_limit.clamp(self.distance - velocity);
            }
            CameraMovement::Backward => {
                self.distance = self.distance_limit.clamp(self.distance + velocity);
            }
            CameraMovement::Left => self.target -= self.state.right() * velocity,
            CameraMovement::Right => self.target += self.state.right() * velocity,
            CameraMovement::Up => self.target += self.state.world_up() * velocity,
            CameraMovement::Down => self.target -= self.state.world_up() * velocity,
        }

        self.sync_position();
    }

    fn mouse_update(&mut self, x_pos: f32, y_pos: f32, _limit_pitch: bool) {
        let offset = self.state.cursor_offset(x_pos, y_pos);
        self.state.rotate(offset.x, offset.y, true);
        self.sync_position();
    }

    fn scroll_update(&mut self, y_offset: f32, limit_zoom: Range) {
        self.state.zoom_by(y_offset, limit_zoom);
    }
}

#[cfg(test)]
#[path = "orbit_camera_tests.rs"]
mod tests;
