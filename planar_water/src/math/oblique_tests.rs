use glam::{Mat4, Vec3, Vec4};
use super::*;

fn test_projection() -> Mat4 {
    Mat4::perspective_rh_gl(60f32.to_radians(), 16.0 / 9.0, 0.3, 1000.0)
}

/// Camera-space plane in front of the camera, facing away from it.
fn test_clip_plane(normal: Vec3, distance: f32) -> (Vec4, Vec3) {
    let n = normal.normalize();
    (n.extend(-distance), n * distance)
}

fn ndc_z(projection: &Mat4, p: Vec3) -> f32 {
    let clip = *projection * p.extend(1.0);
    clip.z / clip.w
}

// ============================================================================
// sgn
// ============================================================================

#[test]
fn test_sgn() {
    assert_eq!(sgn(3.5), 1.0);
    assert_eq!(sgn(-0.001), -1.0);
    assert_eq!(sgn(0.0), 0.0);
    assert_eq!(sgn(-0.0), 0.0);
}

// ============================================================================
// oblique_projection
// ============================================================================

#[test]
fn test_points_on_clip_plane_land_on_near_boundary() {
    let projection = test_projection();

    for normal in [
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.3, -0.2, -1.0),
        Vec3::new(-0.6, 0.4, -0.7),
        Vec3::new(0.0, 0.8, -0.5),
    ] {
        let (plane, base) = test_clip_plane(normal, 5.0);
        let oblique = oblique_projection(projection, plane);
        let n = plane.truncate();
        let u = n.any_orthonormal_vector();
        let v = n.cross(u);

        for (a, b) in [(0.0, 0.0), (1.0, 2.0), (-3.0, 0.5), (0.25, -1.5)] {
            let p = base + u * a + v * b;
            let clip = oblique * p.extend(1.0);
            assert!(
                (clip.z + clip.w).abs() < 1e-3 * clip.w.abs().max(1.0),
                "normal {:?} point {:?}: z = {}, w = {}",
                normal, p, clip.z, clip.w
            );
        }
    }
}

#[test]
fn test_clip_plane_separates_visible_and_clipped_points() {
    let projection = test_projection();
    let (plane, base) = test_clip_plane(Vec3::new(0.3, -0.2, -1.0), 5.0);
    let oblique = oblique_projection(projection, plane);
    let n = plane.truncate();

    // Beyond the plane: inside the depth range
    let z_beyond = ndc_z(&oblique, base + n * 2.0);
    assert!(z_beyond > -1.0 && z_beyond <= 1.0, "z = {}", z_beyond);

    // Between camera and plane: in front of the new near plane
    assert!(ndc_z(&oblique, base - n * 2.0) < -1.0);
}

#[test]
fn test_rows_other_than_third_are_untouched() {
    let projection = test_projection();
    let (plane, _) = test_clip_plane(Vec3::new(0.1, 0.2, -1.0), 3.0);
    let oblique = oblique_projection(projection, plane);

    assert_eq!(oblique.row(0), projection.row(0));
    assert_eq!(oblique.row(1), projection.row(1));
    assert_eq!(oblique.row(3), projection.row(3));
    assert_ne!(oblique.row(2), projection.row(2));
}

#[test]
fn test_orthographic_projection() {
    let projection = Mat4::orthographic_rh_gl(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let (plane, base) = test_clip_plane(Vec3::new(0.2, 0.0, -1.0), 10.0);
    let oblique = oblique_projection(projection, plane);
    let u = plane.truncate().any_orthonormal_vector();

    for t in [0.0, 1.0, -2.0] {
        let clip = oblique * (base + u * t).extend(1.0);
        assert!((clip.z + clip.w).abs() < 1e-3);
    }
}

#[test]
fn test_singular_projection_is_returned_unchanged() {
    let (plane, _) = test_clip_plane(Vec3::NEG_Z, 2.0);
    assert_eq!(oblique_projection(Mat4::ZERO, plane), Mat4::ZERO);
}
