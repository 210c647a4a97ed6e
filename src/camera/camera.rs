/// Camera — view/projection matrices and the frustum test.
///
/// The camera computes nothing per frame: the frustum is re-derived
/// eagerly whenever the view or projection matrix changes, so per-node
/// visibility tests during traversal are pure reads.
///
/// The engine does NOT designate an active camera globally. Exactly one
/// camera is active per traversal: the one placed in the FrameContext.

use glam::Mat4;
use crate::scene::AABB;
use super::frustum::Frustum;

/// Camera with cached culling frustum.
///
/// The caller computes view/projection from high-level parameters
/// (position, FOV, aspect, ...) and hands the matrices here.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
}

impl Camera {
    /// Create a camera from view and projection matrices.
    ///
    /// The frustum is derived immediately.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            frustum: Frustum::from_view_projection(&(projection * view)),
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Current culling frustum.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Conservative containment test against the camera frustum.
    ///
    /// A volume partially inside tests as in-frustum; false negatives
    /// are forbidden, so this is safe as a cull decision.
    pub fn in_frustum(&self, aabb: &AABB) -> bool {
        self.frustum.intersects_aabb(aabb)
    }

    // ===== SETTERS =====

    /// Set the view matrix and re-derive the frustum.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
        self.update_frustum();
    }

    /// Set the projection matrix and re-derive the frustum.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
        self.update_frustum();
    }

    fn update_frustum(&mut self) {
        self.frustum = Frustum::from_view_projection(&self.view_projection_matrix());
    }
}

impl Default for Camera {
    /// Identity view and projection (NDC cube frustum).
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
