/// Camera capability and the state shared by every camera variant.
///
/// A camera variant is a policy over [`CameraState`]: it decides how a key,
/// a cursor move or a scroll step changes the state. The state itself owns
/// the orientation math (yaw/pitch to an orthonormal basis) so every variant
/// produces view matrices the same way.

use glam::{Mat4, Vec2, Vec3};

/// Pitch bound in degrees used when look updates are limited
pub const PITCH_LIMIT: f32 = 89.0;

/// Yaw resets to zero once its magnitude reaches this value (degrees)
pub const YAW_WRAP: f32 = 360.0;

/// Default zoom (field of view) range in degrees
pub const ZOOM_LIMIT: Range = Range::new(1.0, 180.0);

// ===== RANGE =====

/// Closed `[min, max]` interval, immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f32,
    max: f32,
}

impl Range {
    /// Create a range
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Lower bound
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Clamp a value into the range.
    ///
    /// Unlike `f32::clamp` this never panics: the lower bound is applied
    /// first, then the upper one.
    pub fn clamp(&self, value: f32) -> f32 {
        let mut v = value;
        if v < self.min {
            v = self.min;
        }
        if v > self.max {
            v = self.max;
        }
        v
    }
}

impl Default for Range {
    fn default() -> Self {
        ZOOM_LIMIT
    }
}

// ===== MOVEMENT =====

/// Keyboard-driven movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl CameraMovement {
    /// All directions, in code order
    pub const ALL: [CameraMovement; 6] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
        CameraMovement::Up,
        CameraMovement::Down,
    ];

    /// Map a raw movement code (100..=105) to a direction.
    ///
    /// Unknown codes yield `None`, so input layers that forward raw codes
    /// simply skip the key update.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            100 => Some(CameraMovement::Forward),
            101 => Some(CameraMovement::Backward),
            102 => Some(CameraMovement::Left),
            103 => Some(CameraMovement::Right),
            104 => Some(CameraMovement::Up),
            105 => Some(CameraMovement::Down),
            _ => None,
        }
    }

    /// Raw movement code of this direction
    pub fn code(&self) -> u32 {
        match self {
            CameraMovement::Forward => 100,
            CameraMovement::Backward => 101,
            CameraMovement::Left => 102,
            CameraMovement::Right => 103,
            CameraMovement::Up => 104,
            CameraMovement::Down => 105,
        }
    }
}

// ===== DESCRIPTOR =====

/// Initial camera configuration
#[derive(Debug, Clone)]
pub struct CameraDesc {
    /// Yaw in degrees (-90 looks down -Z)
    pub yaw: f32,
    /// Pitch in degrees
    pub pitch: f32,
    /// Units per second (scaled by delta time)
    pub movement_speed: f32,
    /// Degrees per cursor pixel
    pub mouse_sensitivity: f32,
    /// Field of view in degrees
    pub zoom: f32,
    /// Initial position
    pub position: Vec3,
    /// Fixed world up reference
    pub world_up: Vec3,
    /// Initial front vector. Angle-driven variants recompute it from yaw/pitch.
    pub front: Vec3,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom: 45.0,
            position: Vec3::ZERO,
            world_up: Vec3::Y,
            front: Vec3::NEG_Z,
        }
    }
}

// ===== STATE =====

/// Orientation and position state shared by all camera variants.
///
/// Invariant: `front`, `up` and `right` are mutually orthogonal unit
/// vectors; they are recomputed by [`update_basis`](Self::update_basis)
/// after every yaw/pitch change.
#[derive(Debug, Clone)]
pub struct CameraState {
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    /// Cursor position seen by the previous mouse update
    last_cursor: Option<Vec2>,
}

impl CameraState {
    /// Build the state from a descriptor, deriving right/up from `desc.front`.
    pub fn new(desc: &CameraDesc) -> Self {
        let front = desc.front.normalize();
        let right = front.cross(desc.world_up).normalize();
        let up = right.cross(front).normalize();

        Self {
            yaw: desc.yaw,
            pitch: desc.pitch,
            movement_speed: desc.movement_speed,
            mouse_sensitivity: desc.mouse_sensitivity,
            zoom: desc.zoom,
            position: desc.position,
            front,
            up,
            right,
            world_up: desc.world_up,
            last_cursor: None,
        }
    }

    // ===== GETTERS =====

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Cursor position recorded by the last mouse update, if any
    pub fn last_cursor(&self) -> Option<Vec2> {
        self.last_cursor
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Set yaw and pitch (degrees) and rebuild the basis.
    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_basis();
    }

    // ===== UPDATES =====

    /// Move the position by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Distance covered this frame: `movement_speed * delta_time`
    pub fn velocity(&self, delta_time: f32) -> f32 {
        self.movement_speed * delta_time
    }

    /// Recompute front/right/up from yaw and pitch.
    pub fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );

        self.front = front.normalize();
        // right shrinks towards zero near the poles, normalize to keep strafing speed
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Cursor offset since the previous call, Y inverted (screen Y grows
    /// downward, pitch grows upward).
    ///
    /// The first call after construction or [`reset_cursor`](Self::reset_cursor)
    /// only records the position and returns a zero offset.
    pub fn cursor_offset(&mut self, x_pos: f32, y_pos: f32) -> Vec2 {
        let current = Vec2::new(x_pos, y_pos);
        let last = self.last_cursor.unwrap_or(current);
        self.last_cursor = Some(current);

        Vec2::new(current.x - last.x, last.y - current.y)
    }

    /// Forget the cursor baseline (e.g. after the cursor was re-captured)
    pub fn reset_cursor(&mut self) {
        self.last_cursor = None;
    }

    /// Apply a look offset (in cursor units) to yaw and pitch.
    ///
    /// Offsets are scaled by the mouse sensitivity. Yaw snaps back to zero
    /// when it reaches ±360°. With `limit_pitch`, pitch stays within
    /// ±[`PITCH_LIMIT`].
    pub fn rotate(&mut self, x_offset: f32, y_offset: f32, limit_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if self.yaw >= YAW_WRAP || self.yaw <= -YAW_WRAP {
            self.yaw = 0.0;
        }

        if limit_pitch {
            self.pitch = Range::new(-PITCH_LIMIT, PITCH_LIMIT).clamp(self.pitch);
        }

        self.update_basis();
    }

    /// Narrow the field of view by `y_offset` degrees and clamp it to `limit`.
    pub fn zoom_by(&mut self, y_offset: f32, limit: Range) {
        self.zoom = limit.clamp(self.zoom - y_offset);
    }

    /// Look-at matrix from position, position + front and up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }
}

// ===== CAPABILITY =====

/// Camera capability: the four operations every camera variant supports.
///
/// Variants differ only in policy (how keys move the camera, whether pitch
/// is always limited, ...). The view matrix is rebuilt from the state on
/// every call.
pub trait Camera {
    /// Shared orientation/position state
    fn state(&self) -> &CameraState;

    /// Move for one key press. `delta_time == 1.0` gives unscaled movement.
    fn key_update(&mut self, direction: CameraMovement, delta_time: f32);

    /// Look update from an absolute cursor position
    fn mouse_update(&mut self, x_pos: f32, y_pos: f32, limit_pitch: bool);

    /// Zoom update from a scroll offset
    fn scroll_update(&mut self, y_offset: f32, limit_zoom: Range);

    /// Look-at view matrix
    fn view_matrix(&self) -> Mat4 {
        self.state().view_matrix()
    }

    fn position(&self) -> Vec3 {
        self.state().position()
    }

    fn front(&self) -> Vec3 {
        self.state().front()
    }

    fn up(&self) -> Vec3 {
        self.state().up()
    }

    fn right(&self) -> Vec3 {
        self.state().right()
    }

    /// Yaw in degrees
    fn yaw(&self) -> f32 {
        self.state().yaw()
    }

    /// Pitch in degrees
    fn pitch(&self) -> f32 {
        self.state().pitch()
    }

    /// Field of view in degrees
    fn zoom(&self) -> f32 {
        self.state().zoom()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
