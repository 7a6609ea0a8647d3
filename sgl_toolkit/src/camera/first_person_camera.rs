/// First-person camera at a fixed height.
///
/// Looking works like the spectator camera but pitch is always limited.
/// Forward/backward walk along the front vector flattened onto the ground
/// plane, so looking up or down never changes the height. Up/Down keys are
/// ignored.

use glam::Vec3;
use super::camera::{Camera, CameraDesc, CameraMovement, CameraState, Range};

/// Walking camera that keeps its height
#[derive(Debug, Clone)]
pub struct FirstPersonCamera {
    state: CameraState,
}

impl FirstPersonCamera {
    pub fn new(desc: CameraDesc) -> Self {
        let mut state = CameraState::new(&desc);
        state.update_basis();
        Self { state }
    }

    pub fn state_mut(&mut self) -> &mut CameraState {
        &mut self.state
    }

    /// Front vector with its world-up component removed
    fn ground_front(&self) -> Vec3 {
        let front = self.state.front();
        let world_up = self.state.world_up();
        (front - world_up * front.dot(world_up)).normalize_or_zero()
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(CameraDesc::default())
    }
}

impl Camera for FirstPersonCamera {
    fn state(&self) -> &CameraState {
        &self.state
    }

    fn key_update(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.state.velocity(delta_time);

        let delta = match direction {
            CameraMovement::Forward => self.ground_front() * velocity,
            CameraMovement::Backward => -self.ground_front() * velocity,
            CameraMovement::Left => -self.state.right() * velocity,
            CameraMovement::Right => self.state.right() * velocity,
            CameraMovement::Up | CameraMovement::Down => Vec3::ZERO,
        };

        self.state.translate(delta);
    }

    fn mouse_update(&mut self, x_pos: f32, y_pos: f32, _limit_pitch: bool) {
        let offset = self.state.cursor_offset(x_pos, y_pos);
        self.state.rotate(offset.x, offset.y, true);
    }

    fn scroll_update(&mut self, y_offset: f32, limit_zoom: Range) {
        self.state.zoom_by(y_offset, limit_zoom);
    }
}

#[cfg(test)]
#[path = "first_person_camera_tests.rs"]
mod tests;
