/// Auxiliary cameras - hidden cameras a pass renders through.
///
/// One auxiliary camera exists per (pass, source camera) pair. It is created
/// on first use, reused on every later frame, and dropped when the source
/// camera is destroyed or the pass is disabled. It is always disabled, so
/// the host only ever renders it through an explicit single-camera render.

use std::ops::Deref;
use rustc_hash::FxHashMap;
use crate::scene::Transform;
use crate::utils::InstanceId;
use super::camera::{Camera, CameraId};

#[derive(Debug, Clone)]
pub struct AuxiliaryCamera {
    id: InstanceId,
    name: String,
    source: CameraId,
    camera: Camera,
}

impl AuxiliaryCamera {
    /// Disabled camera placed at `initial`. Its pose is overwritten before use.
    pub(crate) fn new(name: String, source: CameraId, initial: &Transform) -> Self {
        let mut camera = Camera::default().with_pose(initial.position, initial.rotation);
        camera.set_enabled(false);
        Self {
            id: InstanceId::next(),
            name,
            source,
            camera,
        }
    }

    /// Unique per created auxiliary camera, never reused.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source camera this auxiliary camera mirrors.
    pub fn source(&self) -> CameraId {
        self.source
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub(crate) fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}

impl Deref for AuxiliaryCamera {
    type Target = Camera;

    fn deref(&self) -> &Camera {
        &self.camera
    }
}

/// Source camera → auxiliary camera mapping of one pass.
///
/// Grows by one entry per distinct source camera. Entries leave only via
/// `remove` (source camera destroyed) or `clear` (pass disabled).
#[derive(Debug, Default)]
pub struct AuxiliaryCameraCache {
    cameras: FxHashMap<CameraId, AuxiliaryCamera>,
}

impl AuxiliaryCameraCache {
    pub fn new() -> Self {
        Self {
            cameras: FxHashMap::default(),
        }
    }

    /// Auxiliary camera for `source`, created if missing.
    ///
    /// `name` is only called when a camera is created.
    pub fn get_or_create(
        &mut self,
        source: CameraId,
        name: impl FnOnce() -> String,
        initial: &Transform,
    ) -> &mut AuxiliaryCamera {
        self.cameras.entry(source).or_insert_with(|| {
            let camera = AuxiliaryCamera::new(name(), source, initial);
            crate::water_debug!("planar_water::AuxiliaryCameraCache",
                "Created auxiliary camera '{}'", camera.name());
            camera
        })
    }

    pub fn get(&self, source: CameraId) -> Option<&AuxiliaryCamera> {
        self.cameras.get(&source)
    }

    /// Drop the auxiliary camera of a destroyed source camera.
    pub fn remove(&mut self, source: CameraId) -> Option<AuxiliaryCamera> {
        let removed = self.cameras.remove(&source);
        if let Some(camera) = &removed {
            crate::water_debug!("planar_water::AuxiliaryCameraCache",
                "Removed auxiliary camera '{}'", camera.name());
        }
        removed
    }

    /// Drop every auxiliary camera. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.cameras.len();
        self.cameras.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuxiliaryCamera> {
        self.cameras.values()
    }
}

#[cfg(test)]
#[path = "auxiliary_camera_tests.rs"]
mod tests;
