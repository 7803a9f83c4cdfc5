/// Oblique near-plane projection.
///
/// Replaces the near plane of a projection with an arbitrary camera-space
/// plane, so everything behind the mirror is clipped by the rasterizer.
/// Closed form from Lengyel, "Oblique View Frustum Depth Projection and
/// Clipping" (Game Programming Gems 5).

use glam::{Mat4, Vec4};

/// Extended sign: +1 for positive, -1 for negative, 0 for zero.
pub fn sgn(a: f32) -> f32 {
    if a > 0.0 {
        1.0
    } else if a < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Return `projection` with its near plane moved onto `clip_plane`.
///
/// `clip_plane` is `(n, d)` in camera space, facing the visible side. The
/// frustum corner opposite the plane is found through the inverse
/// projection (`q`), the plane is scaled by `2 / dot(clip_plane, q)` and the
/// third row becomes `scaled - fourth row`. Points on the plane then land
/// on `z = -w`.
///
/// A singular projection, or a plane through the corner, leaves the
/// projection untouched.
pub fn oblique_projection(projection: Mat4, clip_plane: Vec4) -> Mat4 {
    let corner = Vec4::new(sgn(clip_plane.x), sgn(clip_plane.y), 1.0, 1.0);
    let inverse = projection.inverse();
    if !inverse.is_finite() {
        return projection;
    }
    let q = inverse * corner;

    let denominator = clip_plane.dot(q);
    if denominator == 0.0 || !denominator.is_finite() {
        return projection;
    }
    let c = clip_plane * (2.0 / denominator);

    // glam is column-major: row 2 is the `.z` of every column, row 3 the `.w`.
    let mut result = projection;
    result.x_axis.z = c.x - result.x_axis.w;
    result.y_axis.z = c.y - result.y_axis.w;
    result.z_axis.z = c.z - result.z_axis.w;
    result.w_axis.z = c.w - result.w_axis.w;
    result
}

#[cfg(test)]
#[path = "oblique_tests.rs"]
mod tests;
