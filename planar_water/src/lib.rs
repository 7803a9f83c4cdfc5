/*!
# Planar Water

Planar reflection and ripple capture for a water surface.

For every camera the host is about to render, two passes can run:

- **ReflectionPass**: renders the scene mirrored about the water plane, with
  an oblique near plane on the water, into a square reflection texture, and
  binds it on the surface materials with the matching projection matrix
- **RipplePass**: renders the ripple layers from the camera's own view into a
  display-sized texture cleared to black, and binds it as the height texture

The host renderer stays behind the `RenderHost` trait: it allocates render
textures and performs single-camera renders. `WaterPipeline` owns the source
cameras and forwards camera events to the subscribed passes.

## Modules

- **math**: plane, reflection matrix, oblique projection
- **scene**: surface transform, renderer and materials
- **camera**: source and auxiliary cameras
- **pass**: the two passes and the re-entrancy context
- **pipeline**: subscription and dispatch
*/

pub mod error;
pub mod log;
pub mod math;
pub mod scene;
pub mod camera;
pub mod host;
pub mod pass;
pub mod pipeline;
pub mod utils;

#[cfg(test)]
mod mock_host;

pub use error::{Error, Result};
pub use host::{RenderHost, RenderTextureDesc, TextureId};
pub use scene::{
    Material, SharedMaterial, Surface, SurfaceRenderer, Transform,
    REFLECTION_TEXTURE_PARAM, HEIGHT_TEXTURE_PARAM, REFLECTION_PROJECTION_PARAM,
};
pub use camera::{AuxiliaryCamera, Camera, CameraId, CameraSettings, ClearMode, LayerMask};
pub use pass::{
    CameraRenderListener, DispatchOutcome, SkipReason, RenderContext,
    ReflectionConfig, ReflectionPass, RippleConfig, RipplePass,
};
pub use pipeline::{ListenerKey, WaterPipeline};

// Re-export math library at crate root
pub use glam;
