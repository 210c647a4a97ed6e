/// RendererMesh trait - GPU-side mesh contract
///
/// GPU mesh data (vertex arrays, element buffers) is created and owned
/// by the renderer backend; scene nodes only associate with it. The
/// readiness flag covers asynchronous asset streaming: a mesh that is
/// not yet loaded is silently skipped by draw submission.

use crate::error::Result;

/// Drawable GPU mesh implemented by renderer backends.
pub trait RendererMesh: Send + Sync {
    /// Whether the mesh's GPU state is resident and drawable.
    fn is_loaded(&self) -> bool;

    /// Bind the mesh's vertex array object.
    fn bind_vertex_array_object(&self) -> Result<()>;

    /// Issue the element draw call for the bound mesh.
    fn draw_elements(&self) -> Result<()>;
}
