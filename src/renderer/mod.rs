/// Renderer module - contracts consumed from the renderer collaborator

// Module declarations
pub mod renderer;
pub mod renderer_mesh;
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use renderer_mesh::*;
