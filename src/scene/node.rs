/// Scene node — transform state, derived matrices, bounds, and meshes.
///
/// Nodes live in the Scene's slotmap arena and reference each other by
/// NodeKey; traversal logic that needs more than one node at a time
/// lives on Scene. Everything local to a single node — transform
/// mutation, matrix computation, boundary upkeep, mesh submission — is
/// here.
///
/// Derived matrices start out degenerate (NaN) and become valid on the
/// first transform mutation or explicit rebuild; the view-dependent
/// matrices are additionally recomputed every frame per visible node.

use std::sync::Arc;
use glam::{Mat4, Quat, Vec3};
use slotmap::new_key_type;
use crate::camera::Camera;
use crate::error::Result;
use crate::renderer::MatricesUniform;
use crate::resource::Mesh;
use super::bounding_volume::{AABB, BoundingVolume};
use super::frame_context::FrameContext;

new_key_type! {
    /// Stable key for a Node within a Scene.
    ///
    /// Keys remain valid even after other nodes are removed.
    /// A key becomes invalid only when its own node is removed.
    pub struct NodeKey;
}

/// Hierarchical scene entity.
pub struct Node {
    /// Display name (not required unique)
    name: String,

    // Local transform
    position: Vec3,
    scaling: Vec3,
    rotation: Quat,

    // Derived matrices (degenerate until first computed)
    model_matrix: Mat4,
    model_view_matrix: Mat4,
    normal_matrix: Mat4,
    model_view_projection_matrix: Mat4,

    /// Aggregate bounds of this node, world half kept consistent with
    /// the model matrix per the setter rules
    boundaries: BoundingVolume,

    /// Referenced drawables (shared, GPU data owned by the backend)
    meshes: Vec<Arc<Mesh>>,

    // Hierarchy (arena keys, maintained by Scene)
    children: Vec<NodeKey>,
    parent: Option<NodeKey>,

    /// Cached flattened pre-order subtree snapshot; stale after any
    /// structural change until Scene::build_draw_list runs again
    draw_list: Vec<NodeKey>,

    /// Model-matrix rebuild counter (instrumentation)
    rebuild_count: u32,
}

impl Node {
    /// Create a detached node with identity transform.
    ///
    /// All derived matrices are degenerate (NaN) until a transform
    /// mutation or an explicit `compute_model_matrix` call.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            scaling: Vec3::ONE,
            rotation: Quat::IDENTITY,
            model_matrix: Mat4::NAN,
            model_view_matrix: Mat4::NAN,
            normal_matrix: Mat4::NAN,
            model_view_projection_matrix: Mat4::NAN,
            boundaries: BoundingVolume::default(),
            meshes: Vec::new(),
            children: Vec::new(),
            parent: None,
            draw_list: Vec::new(),
            rebuild_count: 0,
        }
    }

    // ===== TRANSFORM =====

    /// Set position, scaling and rotation at once and rebuild the model
    /// matrix unconditionally (no no-op elision, unlike the single-field
    /// setters). Boundaries are not re-transformed.
    pub fn set_transform(&mut self, position: Vec3, scaling: Vec3, rotation: Quat) {
        self.position = position;
        self.scaling = scaling;
        self.rotation = rotation;
        self.compute_model_matrix();
    }

    /// Set the position; no-op if unchanged.
    ///
    /// Rebuilds the model matrix but intentionally does NOT re-transform
    /// boundaries: translation-only boundary updates are deferred to the
    /// next scale- or rotation-driven re-transform. Callers relying on
    /// world bounds after pure translation must trigger
    /// `update_boundaries` themselves.
    pub fn set_position(&mut self, position: Vec3) {
        if position != self.position {
            self.position = position;
            self.compute_model_matrix();
        }
    }

    /// Set the scaling; no-op if unchanged.
    ///
    /// Rebuilds the model matrix and re-transforms the node's own
    /// boundaries and every referenced mesh's boundaries.
    pub fn set_scaling(&mut self, scaling: Vec3) {
        if scaling != self.scaling {
            self.scaling = scaling;
            self.compute_model_matrix();
            self.update_boundaries();
        }
    }

    /// Set the rotation; no-op if unchanged.
    ///
    /// Rebuilds the model matrix and re-transforms the node's own
    /// boundaries only (mesh boundaries keep their previous world
    /// image until the next full update).
    pub fn set_rotation(&mut self, rotation: Quat) {
        if rotation != self.rotation {
            self.rotation = rotation;
            self.compute_model_matrix();
            self.boundaries.transform(&self.model_matrix);
        }
    }

    /// Rebuild the model matrix from the current transform fields.
    ///
    /// Fixed composition: translation, then rotation, then scale
    /// innermost. Degenerate inputs (e.g. a zero-length quaternion) are
    /// not validated; the numeric result stands.
    pub fn compute_model_matrix(&mut self) {
        self.model_matrix = Mat4::from_translation(self.position)
            * Mat4::from_quat(self.rotation)
            * Mat4::from_scale(self.scaling);
        self.rebuild_count += 1;
    }

    /// Recompute the view-dependent matrices against `camera`.
    ///
    /// Called once per visible node per frame: the camera moves
    /// independently of the node. The normal matrix is defined as the
    /// model-view matrix; no inverse-transpose correction is applied.
    pub fn compute_view_matrices(&mut self, camera: &Camera) {
        self.model_view_matrix = *camera.view_matrix() * self.model_matrix;
        self.normal_matrix = self.model_view_matrix;
        self.model_view_projection_matrix =
            *camera.projection_matrix() * self.model_view_matrix;
    }

    /// Re-transform the node's boundaries and all mesh boundaries by
    /// the current model matrix.
    pub fn update_boundaries(&mut self) {
        self.boundaries.transform(&self.model_matrix);

        for mesh in &self.meshes {
            mesh.transform_boundaries(&self.model_matrix);
        }
    }

    // ===== ACCESSORS =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scaling(&self) -> Vec3 {
        self.scaling
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn model_matrix(&self) -> &Mat4 {
        &self.model_matrix
    }

    pub fn model_view_matrix(&self) -> &Mat4 {
        &self.model_view_matrix
    }

    pub fn normal_matrix(&self) -> &Mat4 {
        &self.normal_matrix
    }

    pub fn model_view_projection_matrix(&self) -> &Mat4 {
        &self.model_view_projection_matrix
    }

    /// Number of model-matrix rebuilds since construction.
    pub fn rebuild_count(&self) -> u32 {
        self.rebuild_count
    }

    /// Aggregate bounding volume of this node.
    pub fn boundaries(&self) -> &BoundingVolume {
        &self.boundaries
    }

    /// Install a new local-space bounding volume.
    ///
    /// The world half starts untransformed; it picks up the model
    /// matrix on the next boundary re-transform.
    pub fn set_boundaries(&mut self, local: AABB) {
        self.boundaries = BoundingVolume::new(local);
    }

    /// Shrink-wrap the node's local bounds around its meshes' local
    /// bounds. No-op for a node without meshes.
    pub fn fit_boundaries_to_meshes(&mut self) {
        let mut meshes = self.meshes.iter();
        let first = match meshes.next() {
            Some(mesh) => *mesh.boundaries().local(),
            None => return,
        };
        let local = meshes.fold(first, |acc, mesh| acc.union(mesh.boundaries().local()));
        self.boundaries = BoundingVolume::new(local);
    }

    // ===== MESHES =====

    /// Associate a shared mesh with this node.
    pub fn add_mesh(&mut self, mesh: Arc<Mesh>) {
        self.meshes.push(mesh);
    }

    pub fn meshes(&self) -> &[Arc<Mesh>] {
        &self.meshes
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // ===== HIERARCHY (maintained by Scene) =====

    /// Child keys in draw order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Parent key, if attached.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Cached flattened pre-order subtree (possibly stale).
    pub fn draw_list(&self) -> &[NodeKey] {
        &self.draw_list
    }

    pub(super) fn attach_child(&mut self, key: NodeKey) {
        self.children.push(key);
    }

    pub(super) fn detach_child(&mut self, key: NodeKey) {
        self.children.retain(|&child| child != key);
    }

    pub(super) fn set_parent(&mut self, parent: Option<NodeKey>) {
        self.parent = parent;
    }

    pub(super) fn set_draw_list(&mut self, list: Vec<NodeKey>) {
        self.draw_list = list;
    }

    // ===== DRAW SUBMISSION =====

    /// Package the view-dependent matrices for uniform upload.
    pub fn matrices_uniform(&self) -> MatricesUniform {
        MatricesUniform {
            model_view: self.model_view_matrix,
            normal: self.normal_matrix,
            model_view_projection: self.model_view_projection_matrix,
        }
    }

    /// Draw this node's meshes in order.
    ///
    /// A not-loaded mesh aborts submission for it AND all remaining
    /// meshes of the node (early return, not a per-mesh skip) — partial
    /// GPU state during streaming is treated conservatively. Nodes with
    /// more than one mesh frustum-test each mesh individually; a
    /// single-mesh node trusts the node-level test already performed by
    /// the caller.
    pub(super) fn draw_meshes(&self, ctx: &mut FrameContext) -> Result<()> {
        for mesh in &self.meshes {
            if !mesh.is_loaded() {
                return Ok(());
            }

            if self.meshes.len() > 1
                && !ctx.camera().in_frustum(mesh.boundaries().world())
            {
                ctx.stats.meshes_culled += 1;
                continue;
            }

            ctx.renderer().set_material_uniforms(mesh.material())?;
            mesh.bind_vertex_array_object()?;
            mesh.draw_elements()?;
            ctx.stats.draw_calls += 1;
        }

        Ok(())
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("node")
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
