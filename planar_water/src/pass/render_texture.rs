/// RenderTextureSlot - the render target shared by all auxiliary cameras
/// of one pass.
///
/// Created on first use and recreated only when the requested size changes.
/// The previous texture is released before its replacement is allocated.

use winit::dpi::PhysicalSize;
use crate::error::{Error, Result};
use crate::host::{RenderHost, RenderTextureDesc, TextureId};

#[derive(Debug, Default)]
pub struct RenderTextureSlot {
    texture: Option<TextureId>,
    size: PhysicalSize<u32>,
}

impl RenderTextureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current texture, if one is allocated.
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Size of the current texture.
    pub fn size(&self) -> Option<PhysicalSize<u32>> {
        self.texture.map(|_| self.size)
    }

    /// Texture of exactly `size`, (re)allocated through `host` if needed.
    ///
    /// `name` is only called when a texture is allocated.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidResource` if either dimension is zero (nothing is
    ///   released in that case)
    /// - whatever the host returns from `create_render_texture`
    pub fn ensure(
        &mut self,
        host: &mut dyn RenderHost,
        size: PhysicalSize<u32>,
        name: impl FnOnce() -> String,
    ) -> Result<TextureId> {
        if size.width == 0 || size.height == 0 {
            crate::water_error!("planar_water::RenderTextureSlot",
                "Refusing zero-sized render texture {}x{}", size.width, size.height);
            return Err(Error::InvalidResource(format!(
                "zero-sized render texture {}x{}", size.width, size.height
            )));
        }

        if let Some(texture) = self.texture {
            if self.size == size {
                return Ok(texture);
            }
            host.destroy_render_texture(texture);
            self.texture = None;
            crate::water_debug!("planar_water::RenderTextureSlot",
                "Released {}x{} render texture for resize to {}x{}",
                self.size.width, self.size.height, size.width, size.height);
        }

        let desc = RenderTextureDesc::new(name(), size.width, size.height);
        let texture = host.create_render_texture(&desc)?;
        crate::water_debug!("planar_water::RenderTextureSlot",
            "Created render texture '{}' ({}x{})", desc.name, desc.width, desc.height);

        self.texture = Some(texture);
        self.size = size;
        Ok(texture)
    }

    /// Release the texture, if any. Returns whether one was released.
    pub fn release(&mut self, host: &mut dyn RenderHost) -> bool {
        match self.texture.take() {
            Some(texture) => {
                host.destroy_render_texture(texture);
                self.size = PhysicalSize::default();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "render_texture_tests.rs"]
mod tests;
