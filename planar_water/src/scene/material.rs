/// Material - the parameter surface a pass writes its results into.
///
/// A material exposes a fixed set of named texture slots and matrix
/// parameters, declared at creation. Writing to a name the material does
/// not expose is a no-op that returns `false`; passes ignore that result.

use std::sync::{Arc, Mutex};
use glam::Mat4;
use rustc_hash::FxHashMap;
use crate::host::TextureId;

/// Texture slot receiving the planar reflection.
pub const REFLECTION_TEXTURE_PARAM: &str = "_ReflectionTex";

/// Texture slot receiving the ripple height capture.
pub const HEIGHT_TEXTURE_PARAM: &str = "_HeightTex";

/// Matrix mapping surface-local positions to reflection texture coordinates.
pub const REFLECTION_PROJECTION_PARAM: &str = "_RefProjMatrix";

/// Material shared between surfaces (and with the host renderer).
pub type SharedMaterial = Arc<Mutex<Material>>;

/// Named texture and matrix parameters of a surface material.
#[derive(Debug, Clone, Default)]
pub struct Material {
    name: String,
    textures: FxHashMap<String, Option<TextureId>>,
    matrices: FxHashMap<String, Mat4>,
}

impl Material {
    /// Create a material exposing no parameters.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            textures: FxHashMap::default(),
            matrices: FxHashMap::default(),
        }
    }

    /// Expose a texture slot (initially unbound).
    pub fn with_texture_param(mut self, name: &str) -> Self {
        self.textures.insert(name.to_string(), None);
        self
    }

    /// Expose a matrix parameter (initially identity).
    pub fn with_matrix_param(mut self, name: &str) -> Self {
        self.matrices.insert(name.to_string(), Mat4::IDENTITY);
        self
    }

    /// Wrap into a `SharedMaterial`.
    pub fn into_shared(self) -> SharedMaterial {
        Arc::new(Mutex::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a texture slot with this name is exposed.
    pub fn has_texture(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    /// Whether a matrix parameter with this name is exposed.
    pub fn has_matrix(&self, name: &str) -> bool {
        self.matrices.contains_key(name)
    }

    /// Bind a texture. Returns `false` if the slot is not exposed.
    pub fn set_texture(&mut self, name: &str, texture: TextureId) -> bool {
        match self.textures.get_mut(name) {
            Some(slot) => {
                *slot = Some(texture);
                true
            }
            None => false,
        }
    }

    /// Unbind a slot, but only if it still holds `texture`.
    ///
    /// Returns whether the slot was cleared.
    pub fn clear_texture(&mut self, name: &str, texture: TextureId) -> bool {
        match self.textures.get_mut(name) {
            Some(slot) if *slot == Some(texture) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Texture bound to a slot, if the slot exists and is bound.
    pub fn texture(&self, name: &str) -> Option<TextureId> {
        self.textures.get(name).copied().flatten()
    }

    /// Set a matrix. Returns `false` if the parameter is not exposed.
    pub fn set_matrix(&mut self, name: &str, value: Mat4) -> bool {
        match self.matrices.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Current value of a matrix parameter.
    pub fn matrix(&self, name: &str) -> Option<Mat4> {
        self.matrices.get(name).copied()
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
