//! Scene module - the water surface a pass is attached to.
//!
//! The crate does not own a scene graph. The caller keeps `Surface`
//! transforms and materials current; passes only read them.

mod transform;
mod material;
mod surface;

pub use transform::Transform;
pub use material::{
    Material, SharedMaterial,
    REFLECTION_TEXTURE_PARAM, HEIGHT_TEXTURE_PARAM, REFLECTION_PROJECTION_PARAM,
};
pub use surface::{Surface, SurfaceRenderer};
