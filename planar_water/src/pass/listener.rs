/// Camera render listener - the interface the pipeline integration layer
/// drives passes through.

use crate::camera::{Camera, CameraId};
use crate::error::Result;
use crate::host::{RenderHost, TextureId};
use crate::scene::Surface;
use super::render_context::RenderContext;

/// Why a dispatch did nothing. Skips are normal, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The pass is disabled
    Disabled,
    /// The surface has no renderer
    NoRenderer,
    /// The surface renderer has no material
    NoSharedMaterial,
    /// The surface renderer is disabled
    RendererDisabled,
    /// Another auxiliary render holds the context
    AlreadyRendering,
}

/// Result of one `begin_camera_rendering` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// An auxiliary render was issued and materials were updated
    Rendered,
    /// Nothing happened
    Skipped(SkipReason),
}

impl DispatchOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, DispatchOutcome::Rendered)
    }
}

/// A pass reacting to "camera about to render" notifications.
pub trait CameraRenderListener {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Start reacting to notifications.
    fn enable(&mut self);

    /// Stop reacting and release every texture and auxiliary camera.
    fn disable(&mut self, host: &mut dyn RenderHost);

    fn is_enabled(&self) -> bool;

    /// Run the pass for `camera`, about to be rendered by the host.
    ///
    /// # Errors
    ///
    /// Only host failures (texture allocation, single-camera render) are
    /// errors; every precondition failure is a `DispatchOutcome::Skipped`.
    fn begin_camera_rendering(
        &mut self,
        context: &RenderContext,
        host: &mut dyn RenderHost,
        camera_id: CameraId,
        camera: &Camera,
    ) -> Result<DispatchOutcome>;

    /// A source camera was destroyed; drop anything kept for it.
    fn camera_destroyed(&mut self, camera_id: CameraId);

    fn surface(&self) -> &Surface;

    fn surface_mut(&mut self) -> &mut Surface;
}

/// Precondition checks shared by every pass.
pub(crate) fn check_preconditions(enabled: bool, surface: &Surface) -> Option<SkipReason> {
    if !enabled {
        return Some(SkipReason::Disabled);
    }
    let Some(renderer) = surface.renderer.as_ref() else {
        return Some(SkipReason::NoRenderer);
    };
    if renderer.shared_material().is_none() {
        return Some(SkipReason::NoSharedMaterial);
    }
    if !renderer.enabled {
        return Some(SkipReason::RendererDisabled);
    }
    None
}

/// Unbind `texture` from `param` on every surface material still holding it.
///
/// Called once the texture is released, so the host never samples a dead
/// handle.
pub(crate) fn unbind_texture(surface: &Surface, param: &str, texture: TextureId) {
    let Some(renderer) = surface.renderer.as_ref() else {
        return;
    };
    for material in &renderer.materials {
        if let Ok(mut material) = material.lock() {
            material.clear_texture(param, texture);
        }
    }
}
