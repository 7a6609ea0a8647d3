/// Shadow box - orthographic volume fitted to the camera's view frustum.
///
/// Represents the cuboid region of the world that casts shadows for a
/// directional light: everything inside is rendered into the shadow map,
/// everything outside is not. The box is refitted from scratch on every
/// [`ShadowBox::update`] so it stays as small as possible (best shadow map
/// resolution) while still covering what the camera sees up to the shadow
/// distance.
///
/// The far plane used here is the shadow distance, not the camera's real far
/// plane: a shorter distance sharpens shadows at the cost of distant objects
/// not casting any.

use glam::{Mat3, Mat4, Vec3};
use crate::camera::{Camera, CameraKey, CameraRegistry};
use crate::error::{Error, Result};

/// Camera-space forward reference, rotated into world space each update
pub const REFERENCE_FORWARD: Vec3 = Vec3::NEG_Z;
/// Camera-space up reference (also the world up used for the light basis)
pub const REFERENCE_UP: Vec3 = Vec3::Y;

/// Frustum corner indices, in the order produced by [`ShadowBox::corners`]
pub const CORNER_FAR_TOP_RIGHT: usize = 0;
pub const CORNER_FAR_TOP_LEFT: usize = 1;
pub const CORNER_FAR_BOTTOM_RIGHT: usize = 2;
pub const CORNER_FAR_BOTTOM_LEFT: usize = 3;
pub const CORNER_NEAR_TOP_RIGHT: usize = 4;
pub const CORNER_NEAR_TOP_LEFT: usize = 5;
pub const CORNER_NEAR_BOTTOM_RIGHT: usize = 6;
pub const CORNER_NEAR_BOTTOM_LEFT: usize = 7;

// ===== AABB =====

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Tightest box around a set of points: starts from the first point and
    /// folds in the others.
    pub fn from_points(points: &[Vec3]) -> AABB {
        let first = points.first().copied().unwrap_or(Vec3::ZERO);
        points.iter().skip(1).fold(
            AABB { min: first, max: first },
            |bounds, &p| AABB { min: bounds.min.min(p), max: bounds.max.max(p) },
        )
    }

    /// Midpoint per axis
    pub fn center(&self) -> Vec3 {
        (self.max + self.min) / 2.0
    }

    /// Extent per axis (`max - min`)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive point test
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

// ===== FRUSTUM PLANES =====

/// Half-dimensions of the near and far (shadow distance) planes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrustumPlanes {
    pub near_width: f32,
    pub near_height: f32,
    pub far_width: f32,
    pub far_height: f32,
}

impl FrustumPlanes {
    /// `half_width = distance * tan(fov)`, `half_height = half_width / aspect`.
    ///
    /// The zoom angle is used as-is (not halved), so the fitted volume is
    /// wider than the exact perspective frustum.
    pub fn from_fov(fov_degrees: f32, near: f32, far: f32, aspect: f32) -> Self {
        let tan_fov = fov_degrees.to_radians().tan();
        let far_width = far * tan_fov;
        let near_width = near * tan_fov;

        Self {
            near_width,
            near_height: near_width / aspect,
            far_width,
            far_height: far_width / aspect,
        }
    }
}

// ===== DESCRIPTOR =====

/// Shadow box configuration
#[derive(Debug, Clone)]
pub struct ShadowBoxDesc {
    /// Direction the light travels in (normalized on construction)
    pub light_direction: Vec3,
    /// Distance from the camera to the near plane
    pub near_plane: f32,
    /// Distance from the camera to the far plane of the fitted frustum
    pub shadow_distance: f32,
    /// Extra distance added to `max.z` after fitting
    pub offset: f32,
}

impl Default for ShadowBoxDesc {
    fn default() -> Self {
        Self {
            // Slanted: a vertical light has no defined light view
            light_direction: Vec3::new(-0.3, -1.0, -0.2),
            near_plane: 1.0,
            shadow_distance: 1.0,
            offset: 0.0,
        }
    }
}

// ===== SHADOW BOX =====

/// Orthographic shadow volume fitted to one camera.
///
/// Holds a [`CameraKey`], not the camera: the registry passed to
/// [`update`](Self::update) must still contain that camera.
#[derive(Debug, Clone)]
pub struct ShadowBox {
    camera: CameraKey,
    light_direction: Vec3,
    near_plane: f32,
    shadow_distance: f32,
    offset: f32,
    planes: FrustumPlanes,
    corners: [Vec3; 8],
    bounds: AABB,
}

impl ShadowBox {
    /// Create a shadow box with default shadow distance and offset.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if `camera` is not registered.
    pub fn new(
        cameras: &CameraRegistry,
        camera: CameraKey,
        light_direction: Vec3,
        near_plane: f32,
        aspect: f32,
    ) -> Result<Self> {
        let desc = ShadowBoxDesc {
            light_direction,
            near_plane,
            ..ShadowBoxDesc::default()
        };
        Self::from_desc(cameras, camera, &desc, aspect)
    }

    /// Create a shadow box from a full descriptor.
    ///
    /// The initial plane sizes are computed from the camera's current zoom;
    /// bounds stay empty until the first update.
    pub fn from_desc(
        cameras: &CameraRegistry,
        camera: CameraKey,
        desc: &ShadowBoxDesc,
        aspect: f32,
    ) -> Result<Self> {
        let zoom = Self::lookup(cameras, camera)?.zoom();

        Ok(Self {
            camera,
            light_direction: desc.light_direction.normalize(),
            near_plane: desc.near_plane,
            shadow_distance: desc.shadow_distance,
            offset: desc.offset,
            planes: FrustumPlanes::from_fov(zoom, desc.near_plane, desc.shadow_distance, aspect),
            corners: [Vec3::ZERO; 8],
            bounds: AABB::default(),
        })
    }

    fn lookup(cameras: &CameraRegistry, key: CameraKey) -> Result<&dyn Camera> {
        cameras.get(key).ok_or_else(|| {
            crate::toolkit_error!("sglt::ShadowBox", "Camera {:?} is not registered", key);
            Error::InvalidResource(format!("camera {:?} is not registered", key))
        })
    }

    // ===== UPDATE =====

    /// Refit the box to the registered camera.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the camera was removed from the registry.
    pub fn update(&mut self, cameras: &CameraRegistry, aspect: f32) -> Result<()> {
        let camera = Self::lookup(cameras, self.camera)?;
        self.update_with(camera, aspect);
        Ok(())
    }

    /// Refit the box to `camera` directly.
    ///
    /// Everything is recomputed: FOV and aspect may change every frame.
    /// The fitted frustum follows the camera for any yaw and pitch: its far
    /// centre lies at `position + front * shadow_distance`.
    pub fn update_with(&mut self, camera: &dyn Camera, aspect: f32) {
        self.planes = FrustumPlanes::from_fov(
            camera.zoom(),
            self.near_plane,
            self.shadow_distance,
            aspect,
        );

        // The view rotation maps world to camera space; its transpose brings
        // the camera-space references back into world space.
        let rotation = Mat3::from_mat4(camera.view_matrix()).transpose();
        let forward = rotation * REFERENCE_FORWARD;
        let up = rotation * REFERENCE_UP;

        let position = camera.position();
        let center_near = position + forward * self.near_plane;
        let center_far = position + forward * self.shadow_distance;

        self.corners = self.frustum_corners(forward, up, center_near, center_far);

        let mut bounds = AABB::from_points(&self.corners);
        bounds.max.z += self.offset;
        self.bounds = bounds;
    }

    /// World-space frustum corners, in `CORNER_*` order.
    fn frustum_corners(
        &self,
        forward: Vec3,
        up: Vec3,
        center_near: Vec3,
        center_far: Vec3,
    ) -> [Vec3; 8] {
        let right = forward.cross(up);
        let p = &self.planes;

        let far_top = center_far + up * p.far_height;
        let far_bottom = center_far - up * p.far_height;
        let near_top = center_near + up * p.near_height;
        let near_bottom = center_near - up * p.near_height;

        [
            far_top + right * p.far_width,
            far_top - right * p.far_width,
            far_bottom + right * p.far_width,
            far_bottom - right * p.far_width,
            near_top + right * p.near_width,
            near_top - right * p.near_width,
            near_bottom + right * p.near_width,
            near_bottom - right * p.near_width,
        ]
    }

    // ===== LIGHT MATRICES =====

    /// Light view matrix placed at the registered camera's position.
    pub fn light_view(&self, cameras: &CameraRegistry) -> Result<Mat4> {
        let eye = Self::lookup(cameras, self.camera)?.position();
        Ok(self.light_view_at(eye))
    }

    /// Light view matrix looking along the light direction from `eye`.
    ///
    /// A directional light has no position; any point on the light ray
    /// works, the camera position is the conventional choice.
    ///
    /// The light up vector comes from `direction × +Y`, so a direction
    /// parallel to +Y or -Y yields a non-finite matrix.
    pub fn light_view_at(&self, eye: Vec3) -> Mat4 {
        let direction = self.light_direction;
        let light_right = direction.cross(REFERENCE_UP).normalize();
        let light_up = light_right.cross(direction).normalize();

        Mat4::look_at_rh(eye, eye + direction, light_up)
    }

    /// Orthographic projection sized to the box, centred on the origin.
    pub fn light_projection(&self) -> Mat4 {
        let width = self.width();
        let height = self.height();
        let depth = self.depth();

        Mat4::orthographic_rh_gl(
            width * -0.5,
            width * 0.5,
            height * -0.5,
            height * 0.5,
            depth * -0.5,
            depth * 0.5,
        )
    }

    // ===== GETTERS =====

    /// Key of the camera this box follows
    pub fn camera_key(&self) -> CameraKey {
        self.camera
    }

    /// Normalized light direction
    pub fn light_direction(&self) -> Vec3 {
        self.light_direction
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn shadow_distance(&self) -> f32 {
        self.shadow_distance
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Plane half-dimensions from the last update
    pub fn planes(&self) -> &FrustumPlanes {
        &self.planes
    }

    /// Frustum corners from the last update
    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Current bounds (offset already applied to `max.z`)
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Center of the box in world space
    pub fn center(&self) -> Vec3 {
        self.bounds.center()
    }

    pub fn width(&self) -> f32 {
        self.bounds.max.x - self.bounds.min.x
    }

    pub fn height(&self) -> f32 {
        self.bounds.max.y - self.bounds.min.y
    }

    pub fn depth(&self) -> f32 {
        self.bounds.max.z - self.bounds.min.z
    }

    // ===== SETTERS - take effect on the next update =====

    /// Set the light direction (normalized)
    pub fn set_light_direction(&mut self, direction: Vec3) {
        self.light_direction = direction.normalize();
    }

    pub fn set_near_plane(&mut self, near_plane: f32) {
        self.near_plane = near_plane;
    }

    pub fn set_shadow_distance(&mut self, shadow_distance: f32) {
        self.shadow_distance = shadow_distance;
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }
}

#[cfg(test)]
#[path = "shadow_box_tests.rs"]
mod tests;
