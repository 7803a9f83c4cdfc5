//! Pass module - reflection and ripple passes and their shared machinery.
//!
//! Control flow of one dispatch: check preconditions, take the context
//! token, ensure the render texture and auxiliary camera, mirror the source
//! camera settings, set view / projection / target, render through the
//! host, write the result into the surface materials, release the token.

mod render_context;
mod render_texture;
mod listener;
mod mirror_view;
mod reflection_pass;
mod ripple_pass;

pub use render_context::{RenderContext, RenderToken};
pub use render_texture::RenderTextureSlot;
pub use listener::{CameraRenderListener, DispatchOutcome, SkipReason};
pub use mirror_view::{MirrorView, reflection_texture_matrix};
pub use reflection_pass::{ReflectionConfig, ReflectionPass};
pub use ripple_pass::{RippleConfig, RipplePass};
