/// Scene — node arena and draw traversal.
///
/// Owns the node hierarchy in a SlotMap for O(1) insert/remove with
/// stable keys; parent/child links and cached draw lists are NodeKey
/// handles, so no owning cycles exist. Three traversal strategies
/// produce equivalent output for a static hierarchy:
///
/// - `draw_recursive` — descends the tree, pruning whole subtrees
///   whose aggregate bounds fail the frustum test
/// - `draw` — single node, caller manages iteration
/// - `draw_flattened` — iterates a node's cached pre-order draw list;
///   the production hot path (no call-stack descent per frame)
///
/// Caller contract: a cached draw list is a snapshot. After any
/// structural change (child add/remove) it is stale and must be
/// rebuilt with `build_draw_list`; this is not detected at runtime.

use slotmap::SlotMap;
use crate::engine_debug;
use crate::engine_trace;
use crate::engine_warn;
use crate::error::Result;
use super::frame_context::FrameContext;
use super::node::{Node, NodeKey};

/// Node hierarchy with a designated root.
pub struct Scene {
    nodes: SlotMap<NodeKey, Node>,
    root: NodeKey,
}

impl Scene {
    /// Create a scene containing only a root node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new("root"));
        Self { nodes, root }
    }

    // ===== ARENA ACCESS =====

    /// Key of the root node.
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Get a node by key.
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Get a mutable node by key.
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Total number of live nodes (root included).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ===== HIERARCHY =====

    /// Create a detached node. Attach it with `add_child`.
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeKey {
        let node = Node::new(name);
        engine_trace!("prism3d::Scene", "node '{}' created", node.name());
        self.nodes.insert(node)
    }

    /// Attach `child` under `parent`. Returns false (and attaches
    /// nothing) if either key is invalid, the child is already
    /// attached, or the attachment would create a cycle.
    ///
    /// Invalidates any draw list containing `parent`'s subtree.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) -> bool {
        if parent == child
            || !self.nodes.contains_key(parent)
            || !self.nodes.contains_key(child)
        {
            engine_warn!("prism3d::Scene", "add_child rejected: invalid keys");
            return false;
        }

        let child_attached = self.nodes.get(child)
            .map(|node| node.parent().is_some())
            .unwrap_or(true);
        if child_attached || self.is_ancestor(child, parent) {
            engine_warn!(
                "prism3d::Scene",
                "add_child rejected: child already attached or would form a cycle"
            );
            return false;
        }

        if let Some(node) = self.nodes.get_mut(parent) {
            node.attach_child(child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.set_parent(Some(parent));
        }
        true
    }

    /// Destroy a node and its entire subtree. The root cannot be
    /// removed. Referenced meshes survive (shared ownership).
    ///
    /// Invalidates any draw list containing the removed subtree.
    pub fn remove_node(&mut self, key: NodeKey) -> bool {
        if key == self.root || !self.nodes.contains_key(key) {
            return false;
        }

        // Detach from the parent's child list first
        if let Some(parent) = self.nodes.get(key).and_then(|node| node.parent()) {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.detach_child(key);
            }
        }

        let mut subtree = Vec::new();
        self.collect_preorder(key, &mut subtree);
        for subtree_key in &subtree {
            self.nodes.remove(*subtree_key);
        }

        engine_debug!("prism3d::Scene", "removed subtree of {} node(s)", subtree.len());
        true
    }

    /// True if `ancestor` appears on the parent chain of `key`.
    fn is_ancestor(&self, ancestor: NodeKey, key: NodeKey) -> bool {
        let mut current = self.nodes.get(key).and_then(|node| node.parent());
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes.get(parent).and_then(|node| node.parent());
        }
        false
    }

    // ===== DRAW LIST =====

    /// Rebuild `key`'s cached draw list: a pre-order flattening of its
    /// subtree (self first, then each child's full subtree in child
    /// order). Returns false if the key is invalid.
    ///
    /// Must be called again after any structural change below `key`;
    /// stale lists silently render the old hierarchy.
    pub fn build_draw_list(&mut self, key: NodeKey) -> bool {
        if !self.nodes.contains_key(key) {
            return false;
        }

        let mut list = Vec::new();
        self.collect_preorder(key, &mut list);
        engine_trace!("prism3d::Scene", "draw list rebuilt: {} entries", list.len());

        if let Some(node) = self.nodes.get_mut(key) {
            node.set_draw_list(list);
        }
        true
    }

    fn collect_preorder(&self, key: NodeKey, out: &mut Vec<NodeKey>) {
        let node = match self.nodes.get(key) {
            Some(node) => node,
            None => return,
        };
        out.push(key);
        for index in 0..node.children().len() {
            self.collect_preorder(node.children()[index], out);
        }
    }

    // ===== TRAVERSAL =====

    /// Draw `key` and its whole subtree, pruning branches that fail
    /// the frustum test.
    ///
    /// Per node: mark active, test the aggregate bounds (a failure
    /// skips the node AND all descendants), recompute view-dependent
    /// matrices, upload uniforms, draw meshes, recurse. The node is
    /// marked active before its visibility test on purpose — material
    /// bookkeeping downstream observes culled nodes too.
    pub fn draw_recursive(&mut self, key: NodeKey, ctx: &mut FrameContext) -> Result<()> {
        ctx.set_active_node(key);
        ctx.stats.nodes_visited += 1;

        let node = match self.nodes.get_mut(key) {
            Some(node) => node,
            None => return Ok(()),
        };

        if !ctx.camera().in_frustum(node.boundaries().world()) {
            ctx.stats.nodes_culled += 1;
            return Ok(());
        }

        node.compute_view_matrices(ctx.camera());
        ctx.renderer().set_matrices_uniforms(&node.matrices_uniform())?;
        node.draw_meshes(ctx)?;

        let child_count = node.children().len();
        for index in 0..child_count {
            let child = match self.nodes.get(key) {
                Some(node) => node.children()[index],
                None => break,
            };
            self.draw_recursive(child, ctx)?;
        }

        Ok(())
    }

    /// Draw a single node without descending into children; the caller
    /// manages iteration.
    ///
    /// Ordering differs from `draw_recursive`: matrices are recomputed
    /// before the node is marked active and tested.
    pub fn draw(&mut self, key: NodeKey, ctx: &mut FrameContext) -> Result<()> {
        let node = match self.nodes.get_mut(key) {
            Some(node) => node,
            None => return Ok(()),
        };

        node.compute_view_matrices(ctx.camera());
        ctx.set_active_node(key);
        ctx.stats.nodes_visited += 1;

        if !ctx.camera().in_frustum(node.boundaries().world()) {
            ctx.stats.nodes_culled += 1;
            return Ok(());
        }

        ctx.renderer().set_matrices_uniforms(&node.matrices_uniform())?;
        node.draw_meshes(ctx)
    }

    /// Draw `key`'s subtree by iterating its cached draw list.
    ///
    /// Per entry, the same contract as `draw_recursive` minus the
    /// recursion (the flattening already captured the hierarchy) — a
    /// failed frustum test skips one entry, never a subtree. Entries
    /// whose node was removed since the last rebuild are skipped.
    pub fn draw_flattened(&mut self, key: NodeKey, ctx: &mut FrameContext) -> Result<()> {
        let list_len = match self.nodes.get(key) {
            Some(node) => node.draw_list().len(),
            None => return Ok(()),
        };

        for index in 0..list_len {
            let entry = match self.nodes.get(key) {
                Some(node) => node.draw_list()[index],
                None => break,
            };

            ctx.set_active_node(entry);
            ctx.stats.nodes_visited += 1;

            let node = match self.nodes.get_mut(entry) {
                Some(node) => node,
                None => continue,
            };

            if !ctx.camera().in_frustum(node.boundaries().world()) {
                ctx.stats.nodes_culled += 1;
                continue;
            }

            node.compute_view_matrices(ctx.camera());
            ctx.renderer().set_matrices_uniforms(&node.matrices_uniform())?;
            node.draw_meshes(ctx)?;
        }

        engine_trace!(
            "prism3d::Scene",
            "draw_flattened: {} visited, {} culled, {} draw call(s)",
            ctx.stats.nodes_visited,
            ctx.stats.nodes_culled,
            ctx.stats.draw_calls
        );
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
