/// Tests for ShadowBox: frustum fitting, offset handling and light matrices.

use glam::{Vec3, Vec4Swizzles};
use super::*;
use crate::camera::{CameraDesc, SpectatorCamera};
use crate::error::Error;

const EPSILON: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

/// Registry with one default spectator camera (origin, looking down -Z, zoom 45)
fn registry_with_camera(desc: CameraDesc) -> (CameraRegistry, CameraKey) {
    let mut registry = CameraRegistry::new();
    let key = registry.insert(SpectatorCamera::new(desc));
    (registry, key)
}

fn desc(shadow_distance: f32, offset: f32) -> ShadowBoxDesc {
    ShadowBoxDesc {
        light_direction: Vec3::new(1.0, -1.0, 0.0),
        near_plane: 1.0,
        shadow_distance,
        offset,
    }
}

// ============================================================================
// AABB / FrustumPlanes
// ============================================================================

#[test]
fn test_aabb_from_points() {
    let points = [
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(-4.0, 5.0, 0.0),
        Vec3::new(0.0, 0.0, -6.0),
    ];
    let aabb = AABB::from_points(&points);
    assert_eq!(aabb.min, Vec3::new(-4.0, -2.0, -6.0));
    assert_eq!(aabb.max, Vec3::new(1.0, 5.0, 3.0));
    assert_eq!(aabb.center(), Vec3::new(-1.5, 1.5, -1.5));
    assert_eq!(aabb.size(), Vec3::new(5.0, 7.0, 9.0));
    assert!(points.iter().all(|&p| aabb.contains_point(p)));
    assert!(!aabb.contains_point(Vec3::new(2.0, 0.0, 0.0)));
}

#[test]
fn test_aabb_from_no_points_is_empty() {
    assert_eq!(AABB::from_points(&[]), AABB::default());
}

#[test]
fn test_frustum_planes_use_full_zoom_angle() {
    let planes = FrustumPlanes::from_fov(45.0, 1.0, 100.0, 2.0);
    assert!(approx(planes.near_width, 1.0));
    assert!(approx(planes.near_height, 0.5));
    assert!(approx(planes.far_width, 100.0));
    assert!(approx(planes.far_height, 50.0));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_with_unknown_camera_fails() {
    let (mut registry, key) = registry_with_camera(CameraDesc::default());
    registry.remove(key);

    let result = ShadowBox::new(&registry, key, Vec3::NEG_Y, 1.0, 1.0);
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_new_uses_default_distance_and_offset() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let shadow_box = ShadowBox::new(&registry, key, Vec3::new(0.0, -3.0, 4.0), 0.5, 1.0).unwrap();

    assert_eq!(shadow_box.camera_key(), key);
    assert_eq!(shadow_box.near_plane(), 0.5);
    assert_eq!(shadow_box.shadow_distance(), 1.0);
    assert_eq!(shadow_box.offset(), 0.0);
    assert!(approx_vec(shadow_box.light_direction(), Vec3::new(0.0, -0.6, 0.8)));
}

#[test]
fn test_planes_computed_on_construction() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let shadow_box = ShadowBox::from_desc(&registry, key, &desc(100.0, 0.0), 2.0).unwrap();

    assert!(approx(shadow_box.planes().far_width, 100.0));
    assert!(approx(shadow_box.planes().far_height, 50.0));
    assert_eq!(*shadow_box.bounds(), AABB::default());
}

// ============================================================================
// Fitting
// ============================================================================

#[test]
fn test_update_fits_default_camera() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(100.0, 0.0), 2.0).unwrap();
    shadow_box.update(&registry, 2.0).unwrap();

    let corners = shadow_box.corners();
    assert!(approx_vec(corners[CORNER_FAR_TOP_RIGHT], Vec3::new(100.0, 50.0, -100.0)));
    assert!(approx_vec(corners[CORNER_FAR_BOTTOM_LEFT], Vec3::new(-100.0, -50.0, -100.0)));
    assert!(approx_vec(corners[CORNER_NEAR_TOP_LEFT], Vec3::new(-1.0, 0.5, -1.0)));
    assert!(approx_vec(corners[CORNER_NEAR_BOTTOM_RIGHT], Vec3::new(1.0, -0.5, -1.0)));

    assert!(approx(shadow_box.width(), 200.0));
    assert!(approx(shadow_box.height(), 100.0));
    assert!(approx(shadow_box.depth(), 99.0));
    assert!(approx_vec(shadow_box.center(), Vec3::new(0.0, 0.0, -50.5)));
}

#[test]
fn test_update_twice_is_idempotent() {
    let (registry, key) = registry_with_camera(CameraDesc {
        yaw: -30.0,
        pitch: 20.0,
        position: Vec3::new(3.0, 1.0, -2.0),
        ..CameraDesc::default()
    });
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(50.0, 5.0), 1.5).unwrap();

    shadow_box.update(&registry, 1.5).unwrap();
    let first = *shadow_box.bounds();
    let first_corners = *shadow_box.corners();

    shadow_box.update(&registry, 1.5).unwrap();
    assert_eq!(*shadow_box.bounds(), first);
    assert_eq!(*shadow_box.corners(), first_corners);
}

#[test]
fn test_bounds_contain_corners_and_offset_extends_max_z() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(100.0, 10.0), 16.0 / 9.0).unwrap();
    shadow_box.update(&registry, 16.0 / 9.0).unwrap();

    let bounds = *shadow_box.bounds();
    for corner in shadow_box.corners() {
        assert!(bounds.contains_point(*corner));
    }

    let raw_max_z = shadow_box.corners().iter().skip(1)
        .fold(shadow_box.corners()[0].z, |acc, c| acc.max(c.z));
    assert_eq!(bounds.max.z, raw_max_z + 10.0);
    assert!(approx(bounds.max.z, 9.0));
}

#[test]
fn test_bounds_follow_camera_orientation() {
    // yaw 0 looks down +X
    let (registry, key) = registry_with_camera(CameraDesc {
        yaw: 0.0,
        ..CameraDesc::default()
    });
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(100.0, 0.0), 2.0).unwrap();
    shadow_box.update(&registry, 2.0).unwrap();

    let bounds = shadow_box.bounds();
    assert!(approx(bounds.min.x, 1.0));
    assert!(approx(bounds.max.x, 100.0));
    assert!(approx(bounds.min.z, -100.0));
    assert!(approx(bounds.max.z, 100.0));

    // Points along the view direction are inside the box
    assert!(bounds.contains_point(Vec3::new(50.0, 0.0, 0.0)));
    assert!(!bounds.contains_point(Vec3::new(-50.0, 0.0, 0.0)));
}

#[test]
fn test_frustum_follows_tilted_camera() {
    let position = Vec3::new(3.0, -2.0, 5.0);
    let (registry, key) = registry_with_camera(CameraDesc {
        yaw: 30.0,
        pitch: 40.0,
        position,
        ..CameraDesc::default()
    });
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(50.0, 0.0), 1.5).unwrap();
    shadow_box.update(&registry, 1.5).unwrap();
    let front = registry.get(key).unwrap().front();

    let corners = shadow_box.corners();
    let far_center = (corners[CORNER_FAR_TOP_RIGHT]
        + corners[CORNER_FAR_TOP_LEFT]
        + corners[CORNER_FAR_BOTTOM_RIGHT]
        + corners[CORNER_FAR_BOTTOM_LEFT])
        / 4.0;
    let near_center = (corners[CORNER_NEAR_TOP_RIGHT]
        + corners[CORNER_NEAR_TOP_LEFT]
        + corners[CORNER_NEAR_BOTTOM_RIGHT]
        + corners[CORNER_NEAR_BOTTOM_LEFT])
        / 4.0;

    assert!(approx_vec(far_center, position + front * 50.0));
    assert!(approx_vec(near_center, position + front * 1.0));
    assert!(shadow_box.bounds().contains_point(position + front * 25.0));
}

#[test]
fn test_bounds_follow_camera_position() {
    let (mut registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(10.0, 0.0), 1.0).unwrap();
    shadow_box.update(&registry, 1.0).unwrap();
    let before = shadow_box.center();

    if let Some(camera) = registry.get_mut(key) {
        camera.key_update(crate::camera::CameraMovement::Up, 2.0);
    }
    shadow_box.update(&registry, 1.0).unwrap();

    assert!(approx_vec(shadow_box.center() - before, Vec3::new(0.0, 5.0, 0.0)));
}

#[test]
fn test_update_recomputes_planes_after_zoom_change() {
    let (mut registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(10.0, 0.0), 1.0).unwrap();
    shadow_box.update(&registry, 1.0).unwrap();
    let wide = shadow_box.width();

    if let Some(camera) = registry.get_mut(key) {
        camera.scroll_update(15.0, crate::camera::ZOOM_LIMIT);
    }
    shadow_box.update(&registry, 1.0).unwrap();

    assert!(shadow_box.width() < wide);
    let expected = 10.0 * 30.0_f32.to_radians().tan();
    assert!(approx(shadow_box.planes().far_width, expected));
}

#[test]
fn test_update_with_removed_camera_fails() {
    let (mut registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::new(&registry, key, Vec3::NEG_Z, 1.0, 1.0).unwrap();
    registry.remove(key);

    assert!(matches!(shadow_box.update(&registry, 1.0), Err(Error::InvalidResource(_))));
    assert!(shadow_box.light_view(&registry).is_err());
}

#[test]
fn test_update_with_unregistered_camera() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(100.0, 0.0), 2.0).unwrap();

    let other = SpectatorCamera::new(CameraDesc {
        position: Vec3::new(0.0, 0.0, 50.0),
        ..CameraDesc::default()
    });
    shadow_box.update_with(&other, 2.0);

    assert!(approx(shadow_box.bounds().max.z, 49.0));
    assert!(approx(shadow_box.bounds().min.z, -50.0));
}

#[test]
fn test_setters_take_effect_on_next_update() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(100.0, 0.0), 2.0).unwrap();
    shadow_box.update(&registry, 2.0).unwrap();

    shadow_box.set_near_plane(2.0);
    shadow_box.set_shadow_distance(20.0);
    shadow_box.set_offset(3.0);
    assert!(approx(shadow_box.depth(), 99.0));

    shadow_box.update(&registry, 2.0).unwrap();
    assert!(approx(shadow_box.depth(), 18.0 + 3.0));
}

// ============================================================================
// Light matrices
// ============================================================================

#[test]
fn test_light_view_looks_along_light_direction() {
    let (registry, key) = registry_with_camera(CameraDesc {
        position: Vec3::new(4.0, 2.0, 1.0),
        ..CameraDesc::default()
    });
    let shadow_box = ShadowBox::from_desc(&registry, key, &desc(10.0, 0.0), 1.0).unwrap();
    let view = shadow_box.light_view(&registry).unwrap();

    // The light direction maps to -Z in light space
    let dir = view.transform_vector3(shadow_box.light_direction());
    assert!(approx_vec(dir, Vec3::NEG_Z));

    // The camera position is the light-space origin
    let eye = view.transform_point3(Vec3::new(4.0, 2.0, 1.0));
    assert!(approx_vec(eye, Vec3::ZERO));
}

#[test]
fn test_default_desc_light_view_is_finite() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let shadow_box = ShadowBox::from_desc(&registry, key, &ShadowBoxDesc::default(), 1.0).unwrap();

    assert!(approx(shadow_box.light_direction().length(), 1.0));
    assert!(shadow_box.light_direction().y < 0.0);

    let view = shadow_box.light_view(&registry).unwrap();
    assert!(view.is_finite());
    let dir = view.transform_vector3(shadow_box.light_direction());
    assert!(approx_vec(dir, Vec3::NEG_Z));
}

#[test]
fn test_set_light_direction_normalizes() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(10.0, 0.0), 1.0).unwrap();
    shadow_box.set_light_direction(Vec3::new(0.0, 0.0, -7.0));
    assert!(approx_vec(shadow_box.light_direction(), Vec3::NEG_Z));

    let view = shadow_box.light_view_at(Vec3::ZERO);
    assert!(approx_vec(view.transform_vector3(Vec3::NEG_Z), Vec3::NEG_Z));
}

#[test]
fn test_light_projection_maps_box_extent_to_ndc() {
    let (registry, key) = registry_with_camera(CameraDesc::default());
    let mut shadow_box = ShadowBox::from_desc(&registry, key, &desc(100.0, 0.0), 2.0).unwrap();
    shadow_box.update(&registry, 2.0).unwrap();

    let projection = shadow_box.light_projection();
    let half = Vec3::new(shadow_box.width() * 0.5, shadow_box.height() * 0.5, 0.0);
    let clip = projection * half.extend(1.0);

    assert!(approx(clip.x, 1.0));
    assert!(approx(clip.y, 1.0));
    assert!(approx(clip.w, 1.0));
    assert!(approx_vec((projection * (-half).extend(1.0)).xyz(), Vec3::new(-1.0, -1.0, clip.z)));
}
