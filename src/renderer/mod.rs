//! WebGPU rendering module
//!
//! A single flat-color triangle pipeline. The arena is the clear color; the
//! ball is a tessellated disc rebuilt every frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, arena_to_ndc};
pub use vertex::Vertex;
