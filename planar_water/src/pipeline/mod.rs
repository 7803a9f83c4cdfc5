//! Pipeline integration layer
//!
//! Owns the source cameras and the subscribed passes, and forwards the
//! host's "camera about to render" and "camera destroyed" events to them.

mod water_pipeline;

pub use water_pipeline::{ListenerKey, WaterPipeline};
