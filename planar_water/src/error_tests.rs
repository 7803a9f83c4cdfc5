//! Unit tests for error.rs
//!
//! Tests all Error variants and the water_err!/water_bail! macros.

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("render_single_camera failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("render_single_camera failed"));
}

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    assert_eq!(format!("{}", err), "Out of GPU memory");
}

#[test]
fn test_invalid_resource_display() {
    let err = Error::InvalidResource("zero-sized render texture".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid resource"));
    assert!(display.contains("zero-sized render texture"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::OutOfMemory;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone_keeps_message() {
    let err = Error::InvalidResource("camera".to_string());
    match err.clone() {
        Error::InvalidResource(msg) => assert_eq!(msg, "camera"),
        other => panic!("unexpected variant {:?}", other),
    }
}

// ============================================================================
// MACROS
// ============================================================================

fn bails(value: u32) -> Result<u32> {
    if value == 0 {
        crate::water_bail!("planar_water::tests", "value {} is not allowed", value);
    }
    Ok(value)
}

#[test]
fn test_water_bail_returns_backend_error() {
    match bails(0) {
        Err(Error::BackendError(msg)) => assert_eq!(msg, "value 0 is not allowed"),
        other => panic!("expected BackendError, got {:?}", other),
    }
}

#[test]
fn test_water_bail_passes_through_ok() {
    assert_eq!(bails(3).unwrap(), 3);
}

#[test]
fn test_water_err_builds_backend_error() {
    let err = crate::water_err!("planar_water::tests", "missing {}", "texture");
    assert!(matches!(err, Error::BackendError(ref msg) if msg == "missing texture"));
}
