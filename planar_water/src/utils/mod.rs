//! Utility types

mod instance_id;

pub use instance_id::InstanceId;
