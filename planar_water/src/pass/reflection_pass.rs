/// ReflectionPass - planar reflection of the scene about a water surface.
///
/// For every source camera about to render, the pass renders the scene
/// through a mirrored auxiliary camera into its reflection texture, then
/// binds that texture and the matching screen-space projection matrix on
/// the surface materials.

use winit::dpi::PhysicalSize;
use crate::camera::{
    AuxiliaryCameraCache, Camera, CameraId, LayerMask, SyncMode, sync_camera_settings,
};
use crate::error::Result;
use crate::host::{RenderHost, TextureId};
use crate::scene::{Surface, REFLECTION_PROJECTION_PARAM, REFLECTION_TEXTURE_PARAM};
use crate::utils::InstanceId;
use super::listener::{
    check_preconditions, unbind_texture, CameraRenderListener, DispatchOutcome, SkipReason,
};
use super::mirror_view::{reflection_texture_matrix, MirrorView};
use super::render_context::RenderContext;
use super::render_texture::RenderTextureSlot;

const SOURCE: &str = "planar_water::ReflectionPass";

/// Reflection pass configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflectionConfig {
    /// Width and height of the square reflection texture
    pub texture_size: u32,
    /// Distance the mirror plane is pushed along its normal before clipping
    pub clip_plane_offset: f32,
    /// Layers drawn into the reflection
    pub reflect_layers: LayerMask,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            texture_size: 256,
            clip_plane_offset: 0.07,
            reflect_layers: LayerMask::all(),
        }
    }
}

pub struct ReflectionPass {
    id: InstanceId,
    name: String,
    config: ReflectionConfig,
    surface: Surface,
    enabled: bool,
    cameras: AuxiliaryCameraCache,
    target: RenderTextureSlot,
}

impl ReflectionPass {
    /// Create a disabled pass. It starts reacting once enabled (usually by
    /// subscribing it to a `WaterPipeline`).
    pub fn new(surface: Surface, config: ReflectionConfig) -> Self {
        let id = InstanceId::next();
        Self {
            id,
            name: format!("ReflectionPass#{}", id),
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

    pub fn config(&self) -> &ReflectionConfig {
        &self.config
    }

    /// Takes effect on the next dispatch, which recreates the texture.
    pub fn set_texture_size(&mut self, size: u32) {
        self.config.texture_size = size;
    }

    pub fn set_clip_plane_offset(&mut self, offset: f32) {
        self.config.clip_plane_offset = offset;
    }

    pub fn set_reflect_layers(&mut self, layers: LayerMask) {
        self.config.reflect_layers = layers;
    }

    pub fn auxiliary_cameras(&self) -> &AuxiliaryCameraCache {
        &self.cameras
    }

    /// Reflection texture, once the pass has rendered.
    pub fn reflection_texture(&self) -> Option<TextureId> {
        self.target.texture()
    }

    fn push_material_feedback(&self, texture: TextureId, camera: &Camera) {
        let Some(renderer) = self.surface.renderer.as_ref() else {
            return;
        };
        let projection = reflection_texture_matrix(camera, &self.surface.transform);

        for material in &renderer.materials {
            let Ok(mut material) = material.lock() else {
                continue;
            };
            material.set_texture(REFLECTION_TEXTURE_PARAM, texture);
            material.set_matrix(REFLECTION_PROJECTION_PARAM, projection);
        }
    }
}

impl CameraRenderListener for ReflectionPass {
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
                unbind_texture(&self.surface, REFLECTION_TEXTURE_PARAM, texture);
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
        let size = self.config.texture_size;
        let previous = self.target.texture();
        let ensured = self.target.ensure(host, PhysicalSize::new(size, size), || {
            format!("__MirrorReflection{}", pass_id)
        });
        // A resize releases the old texture even when the new allocation fails.
        if let Some(old) = previous.filter(|old| self.target.texture() != Some(*old)) {
            unbind_texture(&self.surface, REFLECTION_TEXTURE_PARAM, old);
        }
        let texture = ensured?;

        let aux = self.cameras.get_or_create(
            camera_id,
            || format!("Mirror Refl Camera id{} for {:?}", pass_id, camera_id),
            &self.surface.transform,
        );

        // Settings first: the view / projection / target below must win.
        sync_camera_settings(camera, Some(aux.camera_mut()), SyncMode::MatchSource);

        let plane = self.surface.plane();
        let mirror = MirrorView::new(camera, &plane, self.config.clip_plane_offset);

        let aux_camera = aux.camera_mut();
        aux_camera.set_view(mirror.view);
        aux_camera.set_projection(mirror.projection);
        aux_camera.set_culling_mask(self.config.reflect_layers);
        aux_camera.set_target_texture(Some(texture));
        aux_camera.set_pose(mirror.position, mirror.rotation);
        aux_camera.set_invert_culling(true);

        if let Err(error) = host.render_single_camera(context, aux) {
            crate::water_error!(SOURCE, "{}: reflection render failed: {}", self.name, error);
            return Err(error);
        }

        self.push_material_feedback(texture, camera);
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

impl Drop for ReflectionPass {
    fn drop(&mut self) {
        if self.target.texture().is_some() {
            crate::water_warn!(SOURCE, "{} dropped without disable(); its reflection texture is never released",
                self.name);
        }
    }
}

#[cfg(test)]
#[path = "reflection_pass_tests.rs"]
mod tests;
