/// Reflection matrix about a plane, and look rotations for mirrored poses.

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

/// Mirror matrix about the plane `(n.x, n.y, n.z, d)`.
///
/// `n` must be unit length. Maps `x` to `x - 2 (n.x + d) n`; the bottom row
/// is `(0, 0, 0, 1)`. The matrix is its own inverse.
pub fn reflection_matrix(plane: Vec4) -> Mat4 {
    let (x, y, z, d) = (plane.x, plane.y, plane.z, plane.w);

    // glam takes columns; each Vec4 below is one column of the matrix.
    Mat4::from_cols(
        Vec4::new(1.0 - 2.0 * x * x, -2.0 * y * x, -2.0 * z * x, 0.0),
        Vec4::new(-2.0 * x * y, 1.0 - 2.0 * y * y, -2.0 * z * y, 0.0),
        Vec4::new(-2.0 * x * z, -2.0 * y * z, 1.0 - 2.0 * z * z, 0.0),
        Vec4::new(-2.0 * d * x, -2.0 * d * y, -2.0 * d * z, 1.0),
    )
}

/// Rotation whose local -Z points along `forward` and whose local +Y is as
/// close to `up` as possible.
///
/// A zero `forward` gives the identity. An `up` parallel to `forward` is
/// replaced by whichever world axis is least aligned with `forward`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(forward) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let back = -forward;

    let right = match up.cross(back).try_normalize() {
        Some(right) => right,
        None => {
            let fallback = if forward.y.abs() < 0.9 { Vec3::Y } else { Vec3::X };
            fallback.cross(back).normalize()
        }
    };
    let true_up = back.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, true_up, back)).normalize()
}

#[cfg(test)]
#[path = "reflection_tests.rs"]
mod tests;
