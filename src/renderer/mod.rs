//! Rendering boundary
//!
//! Produces coloured rectangles, an optional triangle list and the court-to-clip
//! transform. GPU setup and draw submission belong to the host.

pub mod projector;
pub mod shapes;
pub mod vertex;

pub use projector::{CourtTransform, Frame, pixel_to_clip, project, scene_bounds};
pub use shapes::Rect;
pub use vertex::{Rgba8, Vertex, colors};
