//! Camera module - source cameras, auxiliary cameras and their settings.
//!
//! Source cameras belong to the pipeline integration layer and are
//! addressed by `CameraId`. Auxiliary cameras belong to a pass and are
//! never rendered on the host's own schedule.

mod camera;
mod camera_settings;
mod auxiliary_camera;

pub use camera::{Camera, CameraId};
pub use camera_settings::{CameraSettings, ClearMode, LayerMask, SyncMode, sync_camera_settings};
pub use auxiliary_camera::{AuxiliaryCamera, AuxiliaryCameraCache};
