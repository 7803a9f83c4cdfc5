/// Plane - world-space mirror plane of a water surface.
///
/// Derived fresh from the surface transform every frame: the point is the
/// transform position, the normal its up axis. Nothing is cached.

use glam::{Mat4, Vec3, Vec4};
use crate::scene::Transform;

/// A plane given by a point on it and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a plane. The normal is normalized; a zero normal becomes +Y.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.try_normalize().unwrap_or(Vec3::Y),
        }
    }

    /// Plane through the transform position with the transform's up axis as normal.
    ///
    /// Only the rotation feeds the normal, so a zero or negative scale
    /// still yields a unit normal.
    pub fn from_transform(transform: &Transform) -> Self {
        Self::new(transform.position, transform.up())
    }

    /// A point on the plane.
    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Plane equation `(n.x, n.y, n.z, d)` with `d = -dot(n, p) - offset`.
    ///
    /// A positive offset pushes the plane along its normal.
    pub fn equation(&self, offset: f32) -> Vec4 {
        self.normal.extend(-self.normal.dot(self.point) - offset)
    }

    /// Signed distance of `p` from the plane, positive on the normal side.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p - self.point)
    }

    /// The plane restated in the space of a camera with the given view matrix.
    ///
    /// The point is pushed by `offset` along the normal before the transform;
    /// the camera-space normal is renormalized and multiplied by `side_sign`.
    pub fn camera_space(&self, view: &Mat4, offset: f32, side_sign: f32) -> Vec4 {
        let offset_point = self.point + self.normal * offset;
        let camera_point = view.transform_point3(offset_point);
        let camera_normal = view.transform_vector3(self.normal).normalize_or_zero() * side_sign;
        camera_normal.extend(-camera_point.dot(camera_normal))
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
