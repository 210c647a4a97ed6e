/// FrameContext — per-traversal rendering context.
///
/// Carries the camera and renderer for exactly one traversal, along
/// with the "currently active node" marker and per-frame counters.
/// There is no process-wide active camera or active node: constructing
/// a context *is* the act of designating the active camera, and it dies
/// with the frame. The camera must not change mid-traversal.

use crate::camera::Camera;
use crate::renderer::Renderer;
use super::node::NodeKey;

/// Per-frame traversal counters.
///
/// Reset when a new FrameContext is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Nodes reached by the traversal (culled or not)
    pub nodes_visited: u32,
    /// Nodes whose world bounds failed the frustum test
    pub nodes_culled: u32,
    /// Meshes skipped by the per-mesh frustum test
    pub meshes_culled: u32,
    /// Element draw calls issued
    pub draw_calls: u32,
}

/// Context handed down a single draw traversal.
///
/// Ephemeral: lives for one frame, borrows the camera and renderer.
pub struct FrameContext<'a> {
    camera: &'a Camera,
    renderer: &'a dyn Renderer,
    active_node: Option<NodeKey>,
    /// Traversal counters, updated as nodes and meshes are processed.
    pub stats: TraversalStats,
}

impl<'a> FrameContext<'a> {
    /// Create a context for one traversal with fresh counters.
    pub fn new(camera: &'a Camera, renderer: &'a dyn Renderer) -> Self {
        Self {
            camera,
            renderer,
            active_node: None,
            stats: TraversalStats::default(),
        }
    }

    /// The camera this traversal culls and projects against.
    pub fn camera(&self) -> &'a Camera {
        self.camera
    }

    /// The renderer receiving uniform uploads.
    pub fn renderer(&self) -> &'a dyn Renderer {
        self.renderer
    }

    /// The node most recently marked active by the traversal.
    ///
    /// Nodes are marked *before* their visibility test in the recursive
    /// and flattened paths, so a culled node can be the active one.
    pub fn active_node(&self) -> Option<NodeKey> {
        self.active_node
    }

    /// Mark a node as rendering-active (set by traversal).
    pub(crate) fn set_active_node(&mut self, key: NodeKey) {
        self.active_node = Some(key);
    }
}

#[cfg(test)]
#[path = "frame_context_tests.rs"]
mod tests;
