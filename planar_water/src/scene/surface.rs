/// Surface - the water plane object a pass belongs to.

use crate::math::Plane;
use super::material::SharedMaterial;
use super::transform::Transform;

/// Renderer attached to a surface: its materials and visibility.
///
/// The first material is the shared material; passes skip a renderer
/// with no materials (`SkipReason::NoSharedMaterial`).
#[derive(Debug, Clone)]
pub struct SurfaceRenderer {
    pub enabled: bool,
    pub materials: Vec<SharedMaterial>,
}

impl SurfaceRenderer {
    /// Enabled renderer with the given materials.
    pub fn new(materials: Vec<SharedMaterial>) -> Self {
        Self { enabled: true, materials }
    }

    /// The first material slot.
    pub fn shared_material(&self) -> Option<&SharedMaterial> {
        self.materials.first()
    }
}

/// A reflecting / rippling surface.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub transform: Transform,
    pub renderer: Option<SurfaceRenderer>,
}

impl Surface {
    pub fn new(transform: Transform, renderer: Option<SurfaceRenderer>) -> Self {
        Self { transform, renderer }
    }

    /// Current world-space plane. Recomputed on every call.
    pub fn plane(&self) -> Plane {
        Plane::from_transform(&self.transform)
    }
}
