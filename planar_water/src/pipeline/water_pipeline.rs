/// WaterPipeline - explicit subscription point for camera render listeners.
///
/// The host calls `begin_camera_rendering` before drawing each source
/// camera; every subscribed pass then gets the chance to issue its
/// auxiliary render. All passes of one pipeline share a single
/// `RenderContext`, so a pass reached from inside another pass's render
/// skips instead of recursing.

use slotmap::{new_key_type, SlotMap};
use crate::camera::{Camera, CameraId};
use crate::error::{Error, Result};
use crate::host::RenderHost;
use crate::pass::{CameraRenderListener, DispatchOutcome, RenderContext};

const SOURCE: &str = "planar_water::WaterPipeline";

new_key_type! {
    /// Handle of a subscribed listener.
    pub struct ListenerKey;
}

/// Source cameras and subscribed passes of one render pipeline.
///
/// # Example
///
/// ```no_run
/// use planar_water::{
///     Camera, Material, ReflectionConfig, ReflectionPass, Surface, SurfaceRenderer,
///     Transform, WaterPipeline, REFLECTION_TEXTURE_PARAM, REFLECTION_PROJECTION_PARAM,
/// };
/// # fn run(host: &mut dyn planar_water::RenderHost) -> planar_water::Result<()> {
/// let material = Material::new("water")
///     .with_texture_param(REFLECTION_TEXTURE_PARAM)
///     .with_matrix_param(REFLECTION_PROJECTION_PARAM)
///     .into_shared();
/// let surface = Surface::new(Transform::IDENTITY, Some(SurfaceRenderer::new(vec![material])));
///
/// let mut pipeline = WaterPipeline::new();
/// let reflection = pipeline.subscribe(Box::new(ReflectionPass::new(surface, ReflectionConfig::default())));
/// let camera = pipeline.create_camera(Camera::default());
///
/// pipeline.begin_camera_rendering(host, camera)?;
///
/// pipeline.unsubscribe(reflection, host);
/// # Ok(())
/// # }
/// ```
pub struct WaterPipeline {
    cameras: SlotMap<CameraId, Camera>,
    listeners: SlotMap<ListenerKey, Box<dyn CameraRenderListener>>,
    context: RenderContext,
}

impl Default for WaterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterPipeline {
    pub fn new() -> Self {
        Self {
            cameras: SlotMap::with_key(),
            listeners: SlotMap::with_key(),
            context: RenderContext::new(),
        }
    }

    // ===== LISTENERS =====

    /// Enable `listener` and start forwarding camera events to it.
    pub fn subscribe(&mut self, mut listener: Box<dyn CameraRenderListener>) -> ListenerKey {
        listener.enable();
        crate::water_info!(SOURCE, "Subscribed {}", listener.name());
        self.listeners.insert(listener)
    }

    /// Stop forwarding events to a listener, disable it and hand it back.
    ///
    /// Disabling releases the listener's render texture and auxiliary
    /// cameras through `host`. Returns `None` for an unknown key.
    pub fn unsubscribe(
        &mut self,
        key: ListenerKey,
        host: &mut dyn RenderHost,
    ) -> Option<Box<dyn CameraRenderListener>> {
        let mut listener = self.listeners.remove(key)?;
        listener.disable(host);
        crate::water_info!(SOURCE, "Unsubscribed {}", listener.name());
        Some(listener)
    }

    pub fn listener(&self, key: ListenerKey) -> Option<&dyn CameraRenderListener> {
        self.listeners.get(key).map(|listener| listener.as_ref())
    }

    pub fn listener_mut(&mut self, key: ListenerKey) -> Option<&mut (dyn CameraRenderListener + 'static)> {
        self.listeners.get_mut(key).map(|listener| listener.as_mut())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ===== CAMERAS =====

    /// Register a source camera.
    pub fn create_camera(&mut self, camera: Camera) -> CameraId {
        self.cameras.insert(camera)
    }

    pub fn camera(&self, id: CameraId) -> Option<&Camera> {
        self.cameras.get(id)
    }

    pub fn camera_mut(&mut self, id: CameraId) -> Option<&mut Camera> {
        self.cameras.get_mut(id)
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Remove a source camera and let every listener drop what it keeps
    /// for it. Returns the camera, or `None` if the handle is stale.
    pub fn destroy_camera(&mut self, id: CameraId) -> Option<Camera> {
        let camera = self.cameras.remove(id)?;
        for listener in self.listeners.values_mut() {
            listener.camera_destroyed(id);
        }
        Some(camera)
    }

    // ===== DISPATCH =====

    /// Notify every listener that `id` is about to render.
    ///
    /// Returns one result per listener. A listener failing is logged and
    /// recorded; the remaining listeners still run.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` if `id` is not a live camera.
    pub fn begin_camera_rendering(
        &mut self,
        host: &mut dyn RenderHost,
        id: CameraId,
    ) -> Result<Vec<Result<DispatchOutcome>>> {
        let Some(camera) = self.cameras.get(id) else {
            crate::water_error!(SOURCE, "begin_camera_rendering: unknown camera {:?}", id);
            return Err(Error::InvalidResource(format!("unknown camera {:?}", id)));
        };

        let mut outcomes = Vec::with_capacity(self.listeners.len());
        for listener in self.listeners.values_mut() {
            let outcome = listener.begin_camera_rendering(&self.context, host, id, camera);
            if let Err(error) = &outcome {
                crate::water_error!(SOURCE, "{} failed for camera {:?}: {}", listener.name(), id, error);
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Re-entrancy context shared by every listener of this pipeline.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }
}

#[cfg(test)]
#[path = "water_pipeline_tests.rs"]
mod tests;
