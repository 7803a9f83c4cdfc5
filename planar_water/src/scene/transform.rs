/// Transform - position, orientation and scale of a scene object.

use glam::{Mat4, Quat, Vec3};

/// World transform of a surface or camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Identity rotation and unit scale at `position`.
    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    /// Unit scale with the given pose.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation, scale: Vec3::ONE }
    }

    /// Local +Y in world space. Independent of scale.
    pub fn up(&self) -> Vec3 {
        (self.rotation * Vec3::Y).normalize_or_zero()
    }

    /// Local -Z in world space. Independent of scale.
    pub fn forward(&self) -> Vec3 {
        (self.rotation * Vec3::NEG_Z).normalize_or_zero()
    }

    /// Local +X in world space. Independent of scale.
    pub fn right(&self) -> Vec3 {
        (self.rotation * Vec3::X).normalize_or_zero()
    }

    /// World scale. Surfaces have no parent hierarchy, so this is `scale`.
    pub fn lossy_scale(&self) -> Vec3 {
        self.scale
    }

    /// Translation * rotation * scale.
    pub fn local_to_world(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// `local_to_world` with the scale factored out.
    ///
    /// Built from rotation and translation directly, so a zero scale
    /// component does not produce infinities.
    pub fn local_to_world_unscaled(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}
