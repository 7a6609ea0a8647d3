/// Spectator (free-fly) camera.
///
/// Movement follows the facing direction: forward flies along `front`,
/// strafing uses `right`, and up/down move along the world up axis.

use super::camera::{Camera, CameraDesc, CameraMovement, CameraState, Range};

/// Free-fly camera driven by direction keys and cursor deltas
#[derive(Debug, Clone)]
pub struct SpectatorCamera {
    state: CameraState,
}

impl SpectatorCamera {
    /// Create a spectator camera; the basis is derived from yaw/pitch.
    pub fn new(desc: CameraDesc) -> Self {
        let mut state = CameraState::new(&desc);
        state.update_basis();
        Self { state }
    }

    /// Mutable access to the shared state (speed, sensitivity, teleport, ...)
    pub fn state_mut(&mut self) -> &mut CameraState {
        &mut self.state
    }
}

impl Default for SpectatorCamera {
    fn default() -> Self {
        Self::new(CameraDesc::default())
    }
}

impl Camera for SpectatorCamera {
    fn state(&self) -> &CameraState {
        &self.state
    }

    fn key_update(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.state.velocity(delta_time);

        let delta = match direction {
            CameraMovement::Forward => self.state.front() * velocity,
            CameraMovement::Backward => -self.state.front() * velocity,
            CameraMovement::Left => -self.state.right() * velocity,
            CameraMovement::Right => self.state.right() * velocity,
            CameraMovement::Up => self.state.world_up() * velocity,
            CameraMovement::Down => -self.state.world_up() * velocity,
        };

        self.state.translate(delta);
    }

    fn mouse_update(&mut self, x_pos: f32, y_pos: f32, limit_pitch: bool) {
        let offset = self.state.cursor_offset(x_pos, y_pos);
        self.state.rotate(offset.x, offset.y, limit_pitch);
    }

    fn scroll_update(&mut self, y_offset: f32, limit_zoom: Range) {
        self.state.zoom_by(y_offset, limit_zoom);
    }
}

#[cfg(test)]
#[path = "spectator_camera_tests.rs"]
mod tests;
