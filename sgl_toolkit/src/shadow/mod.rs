//! Shadow module - directional light shadow volume.

mod shadow_box;

pub use shadow_box::{
    ShadowBox, ShadowBoxDesc, AABB, FrustumPlanes,
    REFERENCE_FORWARD, REFERENCE_UP,
    CORNER_FAR_TOP_RIGHT, CORNER_FAR_TOP_LEFT,
    CORNER_FAR_BOTTOM_RIGHT, CORNER_FAR_BOTTOM_LEFT,
    CORNER_NEAR_TOP_RIGHT, CORNER_NEAR_TOP_LEFT,
    CORNER_NEAR_BOTTOM_RIGHT, CORNER_NEAR_BOTTOM_LEFT,
};
