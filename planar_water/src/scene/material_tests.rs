use glam::Mat4;
use slotmap::KeyData;
use crate::host::TextureId;
use super::*;

fn texture_id(n: u64) -> TextureId {
    TextureId::from(KeyData::from_ffi(n | (1 << 32)))
}

#[test]
fn test_new_material_exposes_nothing() {
    let material = Material::new("water");
    assert_eq!(material.name(), "water");
    assert!(!material.has_texture(REFLECTION_TEXTURE_PARAM));
    assert!(!material.has_matrix(REFLECTION_PROJECTION_PARAM));
}

#[test]
fn test_set_texture_on_exposed_slot() {
    let mut material = Material::new("water").with_texture_param(REFLECTION_TEXTURE_PARAM);
    assert_eq!(material.texture(REFLECTION_TEXTURE_PARAM), None);

    assert!(material.set_texture(REFLECTION_TEXTURE_PARAM, texture_id(3)));
    assert_eq!(material.texture(REFLECTION_TEXTURE_PARAM), Some(texture_id(3)));
}

#[test]
fn test_set_texture_on_missing_slot_is_ignored() {
    let mut material = Material::new("water").with_texture_param(HEIGHT_TEXTURE_PARAM);

    assert!(!material.set_texture(REFLECTION_TEXTURE_PARAM, texture_id(1)));
    assert!(!material.has_texture(REFLECTION_TEXTURE_PARAM));
    assert_eq!(material.texture(HEIGHT_TEXTURE_PARAM), None);
}

#[test]
fn test_set_matrix() {
    let mut material = Material::new("water").with_matrix_param(REFLECTION_PROJECTION_PARAM);
    assert_eq!(material.matrix(REFLECTION_PROJECTION_PARAM), Some(Mat4::IDENTITY));

    let m = Mat4::from_scale(glam::Vec3::splat(2.0));
    assert!(material.set_matrix(REFLECTION_PROJECTION_PARAM, m));
    assert_eq!(material.matrix(REFLECTION_PROJECTION_PARAM), Some(m));

    assert!(!material.set_matrix("_Other", m));
    assert_eq!(material.matrix("_Other"), None);
}

#[test]
fn test_shared_material_is_shared() {
    let shared = Material::new("water")
        .with_texture_param(HEIGHT_TEXTURE_PARAM)
        .into_shared();
    let other = shared.clone();

    shared.lock().unwrap().set_texture(HEIGHT_TEXTURE_PARAM, texture_id(9));
    assert_eq!(other.lock().unwrap().texture(HEIGHT_TEXTURE_PARAM), Some(texture_id(9)));
}

#[test]
fn test_clear_texture_only_unbinds_matching_texture() {
    let mut material = Material::new("water").with_texture_param(REFLECTION_TEXTURE_PARAM);
    material.set_texture(REFLECTION_TEXTURE_PARAM, texture_id(3));

    assert!(!material.clear_texture(REFLECTION_TEXTURE_PARAM, texture_id(4)));
    assert_eq!(material.texture(REFLECTION_TEXTURE_PARAM), Some(texture_id(3)));

    assert!(material.clear_texture(REFLECTION_TEXTURE_PARAM, texture_id(3)));
    assert_eq!(material.texture(REFLECTION_TEXTURE_PARAM), None);
    assert!(material.has_texture(REFLECTION_TEXTURE_PARAM));

    assert!(!material.clear_texture(REFLECTION_TEXTURE_PARAM, texture_id(3)));
    assert!(!material.clear_texture(HEIGHT_TEXTURE_PARAM, texture_id(3)));
}
