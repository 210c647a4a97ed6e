/// Renderer trait - per-frame uniform submission interface
///
/// The deferred renderer lives outside this crate; the scene core only
/// needs its contract for uploading per-object uniforms during
/// traversal. Backend implementations (OpenGL, Vulkan, ...) provide
/// concrete types behind this trait.

use glam::Mat4;
use bytemuck::{Pod, Zeroable};
use crate::error::Result;
use crate::resource::Material;

// ============================================================================
// Uniform blocks
// ============================================================================

/// Per-object matrix uniform block.
///
/// Carries the view-dependent matrices computed by a node immediately
/// before its draw submission. `#[repr(C)]` + Pod so backends can
/// upload it with `bytemuck::bytes_of` without repacking.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MatricesUniform {
    /// view * model
    pub model_view: Mat4,
    /// Same as model_view: no inverse-transpose correction is applied
    pub normal: Mat4,
    /// projection * model_view
    pub model_view_projection: Mat4,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Uniform-submission contract consumed by the scene traversal.
///
/// Called once per visible node (`set_matrices_uniforms`) and once per
/// drawn mesh (`set_material_uniforms`). `&self` because submission
/// goes through a shared handle; traversal is sequential, so backends
/// need no internal synchronization beyond what their API requires.
pub trait Renderer: Send + Sync {
    /// Upload the per-object matrix uniform block.
    fn set_matrices_uniforms(&self, matrices: &MatricesUniform) -> Result<()>;

    /// Upload the material parameters of the mesh about to be drawn.
    fn set_material_uniforms(&self, material: &Material) -> Result<()>;
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
