/// Mock render host for unit tests (no GPU required)
///
/// Records every texture allocation / release and every single-camera
/// render, and can run a nested callback while "rendering" to simulate a
/// second surface seen from inside an auxiliary render.

use slotmap::SlotMap;
use winit::dpi::PhysicalSize;
use crate::camera::AuxiliaryCamera;
use crate::error::{Error, Result};
use crate::host::{RenderHost, RenderTextureDesc, TextureId};
use crate::pass::RenderContext;

/// Runs inside `render_single_camera` with the caller's context.
pub type NestedRender = Box<dyn FnMut(&RenderContext)>;

pub struct MockHost {
    textures: SlotMap<TextureId, RenderTextureDesc>,
    pub created: Vec<RenderTextureDesc>,
    pub destroyed: Vec<TextureId>,
    pub renders: Vec<AuxiliaryCamera>,
    /// Whether the context was held during each render
    pub context_held: Vec<bool>,
    pub resolution: PhysicalSize<u32>,
    pub fail_render: bool,
    pub fail_textures: bool,
    pub nested: Option<NestedRender>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            textures: SlotMap::with_key(),
            created: Vec::new(),
            destroyed: Vec::new(),
            renders: Vec::new(),
            context_held: Vec::new(),
            resolution: PhysicalSize::new(1920, 1080),
            fail_render: false,
            fail_textures: false,
            nested: None,
        }
    }

    /// Textures allocated and not yet released
    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn texture_desc(&self, texture: TextureId) -> Option<&RenderTextureDesc> {
        self.textures.get(texture)
    }

    pub fn last_render(&self) -> Option<&AuxiliaryCamera> {
        self.renders.last()
    }
}

impl RenderHost for MockHost {
    fn create_render_texture(&mut self, desc: &RenderTextureDesc) -> Result<TextureId> {
        if self.fail_textures {
            return Err(Error::OutOfMemory);
        }
        self.created.push(desc.clone());
        Ok(self.textures.insert(desc.clone()))
    }

    fn destroy_render_texture(&mut self, texture: TextureId) {
        if self.textures.remove(texture).is_some() {
            self.destroyed.push(texture);
        }
    }

    fn render_single_camera(&mut self, context: &RenderContext, camera: &AuxiliaryCamera) -> Result<()> {
        self.context_held.push(context.is_rendering());
        if self.fail_render {
            return Err(Error::BackendError("mock render failure".to_string()));
        }
        self.renders.push(camera.clone());
        if let Some(nested) = self.nested.as_mut() {
            nested(context);
        }
        Ok(())
    }

    fn display_resolution(&self) -> PhysicalSize<u32> {
        self.resolution
    }
}
