/// Camera settings and the source → auxiliary settings mirror.

use bitflags::bitflags;
use glam::{Mat4, Vec4};
use super::camera::Camera;

/// How a camera clears its target before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    /// Clear color with the skybox, clear depth
    Skybox,
    /// Clear color with `background`, clear depth
    SolidColor,
    /// Keep color, clear depth
    DepthOnly,
    /// Keep everything
    Nothing,
}

bitflags! {
    /// Set of render layers a camera draws.
    ///
    /// Every bit is a layer; only a couple have names. Use `LayerMask::layer`
    /// for the others.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerMask: u32 {
        const DEFAULT = 1 << 0;
        const WATER = 1 << 4;
        const _ = !0;
    }
}

impl LayerMask {
    /// Mask containing only layer `index` (0..32).
    pub fn layer(index: u32) -> Self {
        Self::from_bits_retain(1u32.checked_shl(index).unwrap_or(0))
    }
}

/// Projection-shape and clear parameters shared by source and auxiliary cameras.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub clear_mode: ClearMode,
    /// Linear RGBA
    pub background: Vec4,
    pub near: f32,
    pub far: f32,
    pub orthographic: bool,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Width / height
    pub aspect: f32,
    /// Half of the vertical extent for orthographic projection
    pub orthographic_size: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            clear_mode: ClearMode::Skybox,
            background: Vec4::new(0.19, 0.30, 0.47, 0.0),
            near: 0.3,
            far: 1000.0,
            orthographic: false,
            fov_y_degrees: 60.0,
            aspect: 16.0 / 9.0,
            orthographic_size: 5.0,
        }
    }
}

impl CameraSettings {
    /// Projection matrix described by these settings (OpenGL depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        if self.orthographic {
            let half_h = self.orthographic_size;
            let half_w = half_h * self.aspect;
            Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, self.near, self.far)
        } else {
            Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
        }
    }
}

/// What the auxiliary camera takes from the source camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Same clear mode and background as the source (reflection).
    MatchSource,
    /// Clear to solid black and draw only `culling_mask` (ripple height capture).
    SolidBlack { culling_mask: LayerMask },
}

/// Copy clear, clip and projection-shape settings from `source` into `dest`.
///
/// Runs before any view / projection / target override is applied to
/// `dest`, so it never clobbers them. Does nothing when `dest` is `None`.
pub fn sync_camera_settings(source: &Camera, dest: Option<&mut Camera>, mode: SyncMode) {
    let Some(dest) = dest else {
        return;
    };

    let src = source.settings();
    let mut settings = *src;
    match mode {
        SyncMode::MatchSource => {}
        SyncMode::SolidBlack { culling_mask } => {
            settings.clear_mode = ClearMode::SolidColor;
            settings.background = Vec4::new(0.0, 0.0, 0.0, 1.0);
            dest.set_culling_mask(culling_mask);
        }
    }
    dest.set_settings(settings);
}

#[cfg(test)]
#[path = "camera_settings_tests.rs"]
mod tests;
