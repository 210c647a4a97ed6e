/// Mock renderer and mock GPU mesh for unit tests (no GPU required)
///
/// Both mocks record every call so tests can assert on submission
/// order, culling decisions, and the unloaded-mesh early return.

#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::resource::Material;
#[cfg(test)]
use super::renderer::{Renderer, MatricesUniform};
#[cfg(test)]
use super::renderer_mesh::RendererMesh;

// ============================================================================
// Mock Renderer
// ============================================================================

/// One recorded uniform submission.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// set_matrices_uniforms was called
    Matrices(MatricesUniform),
    /// set_material_uniforms was called with this material name
    Material(String),
}

#[cfg(test)]
pub struct MockRenderer {
    calls: Mutex<Vec<RenderCall>>,
}

#[cfg(test)]
impl MockRenderer {
    pub fn new() -> Self {
        Self { calls: Mutex::new(Vec::new()) }
    }

    /// Snapshot of all recorded calls, in submission order.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Material names in submission order (ignores matrix uploads).
    pub fn material_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                RenderCall::Material(name) => Some(name.clone()),
                RenderCall::Matrices(_) => None,
            })
            .collect()
    }

    /// Number of matrix uniform uploads.
    pub fn matrices_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, RenderCall::Matrices(_)))
            .count()
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn set_matrices_uniforms(&self, matrices: &MatricesUniform) -> Result<()> {
        self.calls.lock().unwrap().push(RenderCall::Matrices(*matrices));
        Ok(())
    }

    fn set_material_uniforms(&self, material: &Material) -> Result<()> {
        self.calls.lock().unwrap().push(RenderCall::Material(material.name().to_string()));
        Ok(())
    }
}

// ============================================================================
// Mock RendererMesh
// ============================================================================

#[cfg(test)]
pub struct MockRendererMesh {
    loaded: AtomicBool,
    binds: AtomicU32,
    draws: AtomicU32,
}

#[cfg(test)]
impl MockRendererMesh {
    pub fn new(loaded: bool) -> Self {
        Self {
            loaded: AtomicBool::new(loaded),
            binds: AtomicU32::new(0),
            draws: AtomicU32::new(0),
        }
    }

    /// Flip the readiness flag (simulates streaming completion).
    pub fn set_loaded(&self, loaded: bool) {
        self.loaded.store(loaded, Ordering::Relaxed);
    }

    pub fn bind_count(&self) -> u32 {
        self.binds.load(Ordering::Relaxed)
    }

    pub fn draw_count(&self) -> u32 {
        self.draws.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
impl RendererMesh for MockRendererMesh {
    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Relaxed)
    }

    fn bind_vertex_array_object(&self) -> Result<()> {
        self.binds.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn draw_elements(&self) -> Result<()> {
        self.draws.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
