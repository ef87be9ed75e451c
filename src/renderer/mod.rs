//! WebGPU 3D rendering module
//!
//! Immediate-mode over the sim state: a static buffer holds the world
//! decorations, a dynamic buffer is rebuilt from ball + obstacles each frame.

pub mod camera;
pub mod mesh;
pub mod pipeline;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::RenderState;
