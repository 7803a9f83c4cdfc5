/// RipplePass - screen-space capture of ripple height sources.
///
/// Renders the ripple layers from exactly the source camera's point of view
/// into a display-sized texture cleared to black, then binds it as the
/// height texture of the surface materials.

use crate::camera::{
    AuxiliaryCameraCache, Camera, CameraId, LayerMask, SyncMode, sync_camera_settings,
};
use crate::error::Result;
use crate::host::{RenderHost, TextureId};
use crate::scene::{Surface, HEIGHT_TEXTURE_PARAM};
use crate::utils::InstanceId;
use super::listener::{
    check_preconditions, unbind_texture, CameraRenderListener, DispatchOutcome, SkipReason,
};
use super::render_context::RenderContext;
use super::render_texture::RenderTextureSlot;

const SOURCE: &str = "planar_water::RipplePass";

/// Ripple pass configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleConfig {
    /// Layers holding ripple height sources
    pub ripple_layers: LayerMask,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            ripple_layers: LayerMask::all(),
        }
    }
}

pub struct RipplePass {
    id: InstanceId,
    name: String,
    config: RippleConfig,
    surface: Surface,
    enabled: bool,
    cameras: AuxiliaryCameraCache,
    target: RenderTextureSlot,
}

impl RipplePass {
    /// Create a disabled pass.
    pub fn new(surface: Surface, config: RippleConfig) -> Self {
        let id = InstanceId::next();
        Self {
            id,
            name: format!("RipplePass#{}", id),
            config,
            surface,
            enabled: false,
            cameras: AuxiliaryCameraCache::new(),
            target: RenderTextureSlot::new(),
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn set_ripple_layers(&mut self, layers: LayerMask) {
        self.config.ripple_layers = layers;
    }

    pub fn auxiliary_cameras(&self) -> &AuxiliaryCameraCache {
        &self.cameras
    }

    /// Height texture, once the pass has rendered.
    pub fn height_texture(&self) -> Option<TextureId> {
        self.target.texture()
    }

    fn push_material_feedback(&self, texture: TextureId) {
        let Some(renderer) = self.surface.renderer.as_ref() else {
            return;
        };
        for material in &renderer.materials {
            if let Ok(mut material) = material.lock() {
                material.set_texture(HEIGHT_TEXTURE_PARAM, texture);
            }
        }
    }
}

impl CameraRenderListener for RipplePass {
    fn name(&self) -> &str {
        &self.name
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self, host: &mut dyn RenderHost) {
        self.enabled = false;
        let released = self.target.texture();
        if self.target.release(host) {
            if let Some(texture) = released {
                unbind_texture(&self.surface, HEIGHT_TEXTURE_PARAM, texture);
            }
        }
        let cameras = self.cameras.clear();
        crate::water_debug!(SOURCE, "{} disabled: released texture = {:?}, auxiliary cameras = {}",
            self.name, released, cameras);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn begin_camera_rendering(
        &mut self,
        context: &RenderContext,
        host: &mut dyn RenderHost,
        camera_id: CameraId,
        camera: &Camera,
    ) -> Result<DispatchOutcome> {
        if let Some(reason) = check_preconditions(self.enabled, &self.surface) {
            crate::water_trace!(SOURCE, "{} skipped: {:?}", self.name, reason);
            return Ok(DispatchOutcome::Skipped(reason));
        }
        let Some(_token) = context.try_begin() else {
            crate::water_trace!(SOURCE, "{} skipped: nested inside another auxiliary render", self.name);
            return Ok(DispatchOutcome::Skipped(SkipReason::AlreadyRendering));
        };

        let pass_id = self.id;
        let resolution = host.display_resolution();
        let previous = self.target.texture();
        let ensured = self.target.ensure(host, resolution, || format!("__RipplesTexture{}", pass_id));
        // A resize releases the old texture even when the new allocation fails.
        if let Some(old) = previous.filter(|old| self.target.texture() != Some(*old)) {
            unbind_texture(&self.surface, HEIGHT_TEXTURE_PARAM, old);
        }
        let texture = ensured?;

        let aux = self.cameras.get_or_create(
            camera_id,
            || format!("Ripples Camera id{} for {:?}", pass_id, camera_id),
            &self.surface.transform,
        );

        sync_camera_settings(
            camera,
            Some(aux.camera_mut()),
            SyncMode::SolidBlack { culling_mask: self.config.ripple_layers },
        );

        let aux_camera = aux.camera_mut();
        aux_camera.set_view(camera.view_matrix());
        aux_camera.set_projection(*camera.projection_matrix());
        aux_camera.set_target_texture(Some(texture));
        aux_camera.set_pose(camera.position(), camera.rotation());

        if let Err(error) = host.render_single_camera(context, aux) {
            crate::water_error!(SOURCE, "{}: ripple render failed: {}", self.name, error);
            return Err(error);
        }

        self.push_material_feedback(texture);
        Ok(DispatchOutcome::Rendered)
    }

    fn camera_destroyed(&mut self, camera_id: CameraId) {
        self.cameras.remove(camera_id);
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}

impl Drop for RipplePass {
    fn drop(&mut self) {
        if self.target.texture().is_some() {
            crate::water_warn!(SOURCE, "{} dropped without disable(); its height texture is never released",
                self.name);
        }
    }
}

#[cfg(test)]
#[path = "ripple_pass_tests.rs"]
mod tests;
