//! Host boundary - what a pass needs from the render pipeline it runs in.
//!
//! The host allocates render textures, renders a single camera on demand
//! and reports the display resolution. Everything else (camera enumeration,
//! scene traversal, shader binding) stays on the host side.

use slotmap::new_key_type;
use winit::dpi::PhysicalSize;
use crate::camera::AuxiliaryCamera;
use crate::error::Result;
use crate::pass::RenderContext;

new_key_type! {
    /// Handle of a host-owned render texture.
    pub struct TextureId;
}

/// Render texture creation descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTextureDesc {
    /// Debug name
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Depth buffer precision in bits (0 = no depth buffer)
    pub depth_bits: u32,
    /// Allocate a full mip chain
    pub use_mipmaps: bool,
    /// Regenerate mips after every render into the texture
    pub auto_generate_mips: bool,
}

impl RenderTextureDesc {
    /// Color + 16-bit depth target with auto-generated mipmaps.
    pub fn new(name: String, width: u32, height: u32) -> Self {
        Self {
            name,
            width,
            height,
            depth_bits: 16,
            use_mipmaps: true,
            auto_generate_mips: true,
        }
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.width, self.height)
    }
}

/// Render pipeline services used by reflection and ripple passes.
pub trait RenderHost {
    /// Allocate a render texture.
    fn create_render_texture(&mut self, desc: &RenderTextureDesc) -> Result<TextureId>;

    /// Release a render texture. Unknown handles are ignored.
    fn destroy_render_texture(&mut self, texture: TextureId);

    /// Render the scene through `camera` into its target texture, now.
    ///
    /// A host that raises its own "camera about to render" notification for
    /// `camera` must pass the same `context`, so nested passes see the
    /// in-flight dispatch and skip. `WaterPipeline` is mutably borrowed for
    /// the whole call and auxiliary cameras have no `CameraId`, so such a
    /// nested notification can only reach passes living outside the
    /// pipeline that is dispatching.
    fn render_single_camera(&mut self, context: &RenderContext, camera: &AuxiliaryCamera) -> Result<()>;

    /// Current display resolution in pixels.
    fn display_resolution(&self) -> PhysicalSize<u32>;
}
