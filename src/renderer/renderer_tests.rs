use glam::Mat4;
use super::*;

// ============================================================================
// MatricesUniform layout
// ============================================================================

#[test]
fn test_matrices_uniform_is_tightly_packed() {
    // Three column-major Mat4s, 64 bytes each, no padding
    assert_eq!(std::mem::size_of::<MatricesUniform>(), 192);
}

#[test]
fn test_matrices_uniform_bytes_roundtrip() {
    let uniform = MatricesUniform {
        model_view: Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)),
        normal: Mat4::IDENTITY,
        model_view_projection: Mat4::from_scale(glam::Vec3::splat(2.0)),
    };

    let bytes = bytemuck::bytes_of(&uniform);
    assert_eq!(bytes.len(), 192);

    let back: &MatricesUniform = bytemuck::from_bytes(bytes);
    assert_eq!(*back, uniform);
}
