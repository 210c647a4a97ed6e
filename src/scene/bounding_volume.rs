/// Bounding volumes for visibility culling.
///
/// An AABB is a plain min/max corner pair. A BoundingVolume pairs a
/// local-space AABB with its world-space image under the owning node's
/// model matrix; the world half is what frustum tests consume.

use glam::{Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box
///
/// Min/max corners in whichever space the owner keeps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Create an AABB from its two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Transform this AABB by a matrix, returning a new AABB.
    ///
    /// Uses the Arvo method: projects each matrix axis onto the box
    /// extents, giving a tight result without visiting all 8 corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut new_min = translation;
        let mut new_max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            new_min += a.min(b);
            new_max += a.max(b);
        }

        AABB { min: new_min, max: new_max }
    }

    /// Smallest AABB enclosing both `self` and `other`.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl Default for AABB {
    /// Degenerate box at the origin.
    fn default() -> Self {
        Self { min: Vec3::ZERO, max: Vec3::ZERO }
    }
}

// ===== BOUNDING VOLUME =====

/// Local-space AABB plus its current world-space image.
///
/// `transform` re-derives the world half from the local half; the local
/// half never changes after construction. The world half is only as
/// fresh as the last `transform` call — translation-only node moves
/// leave it stale by design (see Node::set_position).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingVolume {
    local: AABB,
    world: AABB,
}

impl BoundingVolume {
    /// Create a volume whose world bounds start as the untransformed
    /// local bounds.
    pub fn new(local: AABB) -> Self {
        Self { local, world: local }
    }

    /// Local-space bounds (fixed at construction).
    pub fn local(&self) -> &AABB {
        &self.local
    }

    /// World-space bounds as of the last `transform` call.
    pub fn world(&self) -> &AABB {
        &self.world
    }

    /// Re-derive the world bounds from the local bounds and `matrix`.
    pub fn transform(&mut self, matrix: &Mat4) {
        self.world = self.local.transformed(matrix);
    }
}

#[cfg(test)]
#[path = "bounding_volume_tests.rs"]
mod tests;
