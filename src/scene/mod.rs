//! Scene management module
//!
//! Provides the node hierarchy, bounding volumes, the per-frame
//! traversal context, and the draw traversal strategies.

mod bounding_volume;
mod frame_context;
mod node;
mod scene;

pub use bounding_volume::{AABB, BoundingVolume};
pub use frame_context::{FrameContext, TraversalStats};
pub use node::{Node, NodeKey};
pub use scene::Scene;
