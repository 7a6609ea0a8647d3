/// Camera registry - externally owned storage for cameras.
///
/// Consumers that need to read a camera every frame (the shadow box) keep a
/// [`CameraKey`] instead of a reference, so the caller stays free to mutate
/// its cameras between frames. A key becomes invalid only when its own
/// camera is removed.

use slotmap::{new_key_type, SlotMap};
use super::camera::Camera;

new_key_type! {
    /// Stable, non-owning handle to a camera inside a [`CameraRegistry`].
    pub struct CameraKey;
}

/// Owns cameras of any variant behind stable keys
#[derive(Default)]
pub struct CameraRegistry {
    cameras: SlotMap<CameraKey, Box<dyn Camera>>,
}

impl CameraRegistry {
    pub fn new() -> Self {
        Self {
            cameras: SlotMap::with_key(),
        }
    }

    /// Register a camera and return its key
    pub fn insert<C: Camera + 'static>(&mut self, camera: C) -> CameraKey {
        self.cameras.insert(Box::new(camera))
    }

    /// Remove a camera. Returns `None` if the key was already invalid.
    pub fn remove(&mut self, key: CameraKey) -> Option<Box<dyn Camera>> {
        self.cameras.remove(key)
    }

    pub fn get(&self, key: CameraKey) -> Option<&dyn Camera> {
        self.cameras.get(key).map(|camera| camera.as_ref())
    }

    pub fn get_mut(&mut self, key: CameraKey) -> Option<&mut (dyn Camera + 'static)> {
        self.cameras.get_mut(key).map(|camera| camera.as_mut())
    }

    pub fn contains(&self, key: CameraKey) -> bool {
        self.cameras.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Iterate over all registered keys
    pub fn keys(&self) -> impl Iterator<Item = CameraKey> + '_ {
        self.cameras.keys()
    }
}

#[cfg(test)]
#[path = "camera_registry_tests.rs"]
mod tests;
