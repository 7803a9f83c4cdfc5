use glam::{Mat4, Vec4};
use crate::camera::Camera;
use super::*;

fn source_camera() -> Camera {
    let mut camera = Camera::new(CameraSettings {
        clear_mode: ClearMode::DepthOnly,
        background: Vec4::new(0.2, 0.4, 0.6, 1.0),
        near: 0.5,
        far: 250.0,
        orthographic: true,
        fov_y_degrees: 75.0,
        aspect: 1.25,
        orthographic_size: 12.0,
    });
    camera.set_culling_mask(LayerMask::DEFAULT | LayerMask::layer(8));
    camera
}

// ============================================================================
// LayerMask
// ============================================================================

#[test]
fn test_layer_mask_layer() {
    assert_eq!(LayerMask::layer(0), LayerMask::DEFAULT);
    assert_eq!(LayerMask::layer(4), LayerMask::WATER);
    assert_eq!(LayerMask::layer(31).bits(), 1 << 31);
    assert!(LayerMask::layer(32).is_empty());
}

#[test]
fn test_layer_mask_all_covers_every_layer() {
    assert_eq!(LayerMask::all().bits(), u32::MAX);
    assert!(LayerMask::all().contains(LayerMask::layer(17)));
}

// ============================================================================
// CameraSettings
// ============================================================================

#[test]
fn test_settings_projection_perspective() {
    let settings = CameraSettings::default();
    assert_eq!(
        settings.projection_matrix(),
        Mat4::perspective_rh_gl(60f32.to_radians(), 16.0 / 9.0, 0.3, 1000.0)
    );
}

// ============================================================================
// sync_camera_settings
// ============================================================================

#[test]
fn test_sync_match_source_copies_everything() {
    let source = source_camera();
    let mut dest = Camera::default();

    sync_camera_settings(&source, Some(&mut dest), SyncMode::MatchSource);

    assert_eq!(dest.settings(), source.settings());
    // Culling mask is not part of the mirrored settings in this mode
    assert_eq!(dest.culling_mask(), LayerMask::all());
}

#[test]
fn test_sync_solid_black_overrides_clear_and_mask() {
    let source = source_camera();
    let mut dest = Camera::default();

    sync_camera_settings(
        &source,
        Some(&mut dest),
        SyncMode::SolidBlack { culling_mask: LayerMask::WATER },
    );

    let settings = dest.settings();
    assert_eq!(settings.clear_mode, ClearMode::SolidColor);
    assert_eq!(settings.background, Vec4::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(settings.near, 0.5);
    assert_eq!(settings.far, 250.0);
    assert!(settings.orthographic);
    assert_eq!(settings.fov_y_degrees, 75.0);
    assert_eq!(settings.aspect, 1.25);
    assert_eq!(settings.orthographic_size, 12.0);
    assert_eq!(dest.culling_mask(), LayerMask::WATER);
}

#[test]
fn test_sync_does_not_touch_overrides() {
    let source = source_camera();
    let mut dest = Camera::default();
    let view = Mat4::from_translation(glam::Vec3::X);
    let projection = Mat4::IDENTITY;
    dest.set_view(view);
    dest.set_projection(projection);

    sync_camera_settings(&source, Some(&mut dest), SyncMode::MatchSource);

    assert_eq!(dest.view_matrix(), view);
    assert_eq!(*dest.projection_matrix(), projection);
}

#[test]
fn test_sync_without_destination_is_noop() {
    let source = source_camera();
    sync_camera_settings(&source, None, SyncMode::MatchSource);
}
