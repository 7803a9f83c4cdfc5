/// MirrorView - everything the reflection pass derives for one frame.
///
/// Given the source camera and the mirror plane: the reflection matrix, the
/// mirrored view, the mirrored pose and the oblique projection whose near
/// plane is the mirror plane. Recomputed every frame, never stored.

use glam::{Mat4, Quat, Vec3, Vec4};
use crate::camera::Camera;
use crate::math::{look_rotation, oblique_projection, reflection_matrix, Plane};
use crate::scene::Transform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorView {
    /// Reflection about the plane pushed `clip_plane_offset` along its normal
    pub reflection: Mat4,
    /// Source view * reflection
    pub view: Mat4,
    /// Source projection with its near plane on `clip_plane`
    pub projection: Mat4,
    /// Source position reflected
    pub position: Vec3,
    /// Look rotation of the reflected source forward / up
    pub rotation: Quat,
    /// Mirror plane in the mirrored view's space
    pub clip_plane: Vec4,
}

impl MirrorView {
    pub fn new(source: &Camera, plane: &Plane, clip_plane_offset: f32) -> Self {
        let reflection = reflection_matrix(plane.equation(clip_plane_offset));
        let view = source.view_matrix() * reflection;

        let position = reflection.transform_point3(source.position());
        let rotation = look_rotation(
            reflection.transform_vector3(source.forward()),
            reflection.transform_vector3(source.up()),
        );

        let clip_plane = plane.camera_space(&view, clip_plane_offset, 1.0);
        let projection = oblique_projection(*source.projection_matrix(), clip_plane);

        Self {
            reflection,
            view,
            projection,
            position,
            rotation,
            clip_plane,
        }
    }
}

/// Matrix taking surface-local positions to reflection texture coordinates.
///
/// scale-bias * source projection * source view * surface local-to-world,
/// with the surface scale factored out. Shaders divide by `w` to sample
/// the reflection in screen space.
pub fn reflection_texture_matrix(source: &Camera, surface: &Transform) -> Mat4 {
    let scale_bias = Mat4::from_scale_rotation_translation(
        Vec3::splat(0.5),
        Quat::IDENTITY,
        Vec3::splat(0.5),
    );
    scale_bias * *source.projection_matrix() * source.view_matrix() * surface.local_to_world_unscaled()
}

#[cfg(test)]
#[path = "mirror_view_tests.rs"]
mod tests;
