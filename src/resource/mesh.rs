//! Resource-level mesh type.
//!
//! A `Mesh` associates GPU mesh data (owned by the renderer backend,
//! behind the `RendererMesh` trait) with a material and a bounding
//! volume. Meshes are shared: several nodes may reference the same
//! `Arc<Mesh>`, and a node never owns the GPU data it draws.
//!
//! The world-space half of the bounding volume is mutated by the
//! owning node whenever its model matrix changes scale or rotation;
//! since the mesh is shared, that state sits behind an RwLock.

use std::sync::{Arc, RwLock};
use glam::Mat4;
use crate::error::Result;
use crate::renderer::RendererMesh;
use crate::scene::{AABB, BoundingVolume};
use super::material::Material;

/// Descriptor for creating a Mesh.
pub struct MeshDesc {
    /// Display name (not required unique)
    pub name: String,
    /// Material bound before this mesh is drawn
    pub material: Arc<Material>,
    /// GPU-side mesh data owned by the renderer backend
    pub gpu: Arc<dyn RendererMesh>,
    /// Local-space bounds of the mesh geometry
    pub local_bounds: AABB,
}

/// A shared drawable unit referenced by scene nodes.
pub struct Mesh {
    name: String,
    material: Arc<Material>,
    gpu: Arc<dyn RendererMesh>,
    boundaries: RwLock<BoundingVolume>,
}

impl Mesh {
    /// Create a Mesh from a descriptor.
    pub fn from_desc(desc: MeshDesc) -> Self {
        Self {
            name: desc.name,
            material: desc.material,
            gpu: desc.gpu,
            boundaries: RwLock::new(BoundingVolume::new(desc.local_bounds)),
        }
    }

    // ===== ACCESSORS =====

    /// Mesh name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Material bound before this mesh is drawn.
    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Whether the GPU data is resident and drawable.
    pub fn is_loaded(&self) -> bool {
        self.gpu.is_loaded()
    }

    /// Snapshot of the bounding volume (local + current world bounds).
    pub fn boundaries(&self) -> BoundingVolume {
        *self.boundaries.read().unwrap()
    }

    // ===== DRAW SUBMISSION =====

    /// Bind the mesh's vertex array object.
    pub fn bind_vertex_array_object(&self) -> Result<()> {
        self.gpu.bind_vertex_array_object()
    }

    /// Issue the element draw call.
    pub fn draw_elements(&self) -> Result<()> {
        self.gpu.draw_elements()
    }

    // ===== BOUNDS =====

    /// Re-derive the world bounds from the owning node's model matrix.
    ///
    /// Shared meshes take the matrix of whichever node re-transformed
    /// them last.
    pub fn transform_boundaries(&self, matrix: &Mat4) {
        self.boundaries.write().unwrap().transform(matrix);
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
