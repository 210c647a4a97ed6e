/*!
# Prism 3D Engine — scene-graph and rendering-traversal core

Core scene hierarchy, transform computation, frustum culling, and
per-frame draw submission for a deferred renderer. The renderer itself
is external: backends implement the [`renderer::Renderer`] and
[`renderer::RendererMesh`] traits, and this crate decides *what* gets
submitted each frame and in which order.

## Architecture

- **Scene**: node arena (slotmap) with a root, hierarchy mutation, and
  the three draw traversal strategies (recursive, single-node, cached
  flattened draw list)
- **Node**: local transform, derived matrices, bounding volume, shared
  mesh references
- **Camera / Frustum**: view and projection matrices with a
  conservative AABB containment test
- **FrameContext**: per-frame traversal context carrying the active
  camera, the renderer, the active-node marker, and traversal counters

## Example

```no_run
use prism_3d_engine::glam::{Mat4, Vec3};
use prism_3d_engine::prism3d::camera::Camera;
use prism_3d_engine::prism3d::renderer::{Renderer, MatricesUniform};
use prism_3d_engine::prism3d::resource::Material;
use prism_3d_engine::prism3d::scene::{Scene, FrameContext, AABB};
use prism_3d_engine::prism3d::Result;

struct NullRenderer;

impl Renderer for NullRenderer {
    fn set_matrices_uniforms(&self, _matrices: &MatricesUniform) -> Result<()> {
        Ok(())
    }
    fn set_material_uniforms(&self, _material: &Material) -> Result<()> {
        Ok(())
    }
}

fn main() -> Result<()> {
    let mut scene = Scene::new();
    let root = scene.root();
    let cube = scene.create_node("cube");
    scene.add_child(root, cube);
    scene.node_mut(cube).unwrap().set_boundaries(AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0)));
    scene.node_mut(cube).unwrap().set_scaling(Vec3::splat(2.0));

    // Flatten once, then iterate the snapshot every frame
    scene.build_draw_list(root);

    let camera = Camera::new(
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y),
        Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0),
    );
    let renderer = NullRenderer;

    let mut ctx = FrameContext::new(&camera, &renderer);
    scene.draw_flattened(root, &mut ctx)?;
    Ok(())
}
```
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod renderer;
pub mod resource;
pub mod scene;

// Main prism3d namespace module
pub mod prism3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine logging facade
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are exported at the crate root
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Renderer sub-module with the collaborator contracts
    pub mod renderer {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
