/// Camera - pose, settings and matrices of a camera.
///
/// The view matrix is derived from the pose unless an explicit one is set
/// with `set_view`; `reset_view` drops the explicit matrix again. The
/// projection matrix is stored as given and rebuilt from the settings only
/// by `update_projection`.

use glam::{Mat4, Quat, Vec3};
use slotmap::new_key_type;
use crate::host::TextureId;
use super::camera_settings::{CameraSettings, LayerMask};

new_key_type! {
    /// Stable handle of a source camera.
    ///
    /// Handles are versioned: once a camera is destroyed its handle never
    /// refers to another camera, even if the slot is reused.
    pub struct CameraId;
}

#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    rotation: Quat,
    settings: CameraSettings,
    culling_mask: LayerMask,
    view_override: Option<Mat4>,
    projection_matrix: Mat4,
    target_texture: Option<TextureId>,
    enabled: bool,
    invert_culling: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl Camera {
    /// Enabled camera at the origin looking down -Z, drawing every layer,
    /// with the projection built from `settings`.
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            settings,
            culling_mask: LayerMask::all(),
            view_override: None,
            projection_matrix: settings.projection_matrix(),
            target_texture: None,
            enabled: true,
            invert_culling: false,
        }
    }

    /// Perspective camera.
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(CameraSettings {
            orthographic: false,
            fov_y_degrees,
            aspect,
            near,
            far,
            ..CameraSettings::default()
        })
    }

    /// Orthographic camera. `size` is half the vertical extent.
    pub fn orthographic(size: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(CameraSettings {
            orthographic: true,
            orthographic_size: size,
            aspect,
            near,
            far,
            ..CameraSettings::default()
        })
    }

    /// Builder: place the camera.
    pub fn with_pose(mut self, position: Vec3, rotation: Quat) -> Self {
        self.set_pose(position, rotation);
        self
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Local -Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Local +Y in world space.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn culling_mask(&self) -> LayerMask {
        self.culling_mask
    }

    /// World-to-camera matrix: the explicit one if set, else the inverse pose.
    pub fn view_matrix(&self) -> Mat4 {
        self.view_override
            .unwrap_or_else(|| Mat4::from_rotation_translation(self.rotation, self.position).inverse())
    }

    /// Whether the view matrix was set explicitly.
    pub fn has_explicit_view(&self) -> bool {
        self.view_override.is_some()
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }

    pub fn target_texture(&self) -> Option<TextureId> {
        self.target_texture
    }

    /// Whether the host renders this camera on its own schedule.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether front and back faces swap (mirrored view).
    pub fn invert_culling(&self) -> bool {
        self.invert_culling
    }

    // ===== SETTERS =====

    /// Move and orient the camera. An explicit view matrix stays in place.
    pub fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        self.position = position;
        self.rotation = rotation.normalize();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    /// Store settings. The projection matrix is left as is.
    pub fn set_settings(&mut self, settings: CameraSettings) {
        self.settings = settings;
    }

    pub fn set_culling_mask(&mut self, mask: LayerMask) {
        self.culling_mask = mask;
    }

    /// Use an explicit world-to-camera matrix instead of the pose.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_override = Some(matrix);
    }

    /// Derive the view matrix from the pose again.
    pub fn reset_view(&mut self) {
        self.view_override = None;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    /// Rebuild the projection matrix from the settings.
    pub fn update_projection(&mut self) {
        self.projection_matrix = self.settings.projection_matrix();
    }

    pub fn set_target_texture(&mut self, texture: Option<TextureId>) {
        self.target_texture = texture;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_invert_culling(&mut self, invert: bool) {
        self.invert_culling = invert;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
