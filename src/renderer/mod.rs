//! WebGPU rendering module
//!
//! Pure read of the simulation state: [`scene::build_frame`] turns a
//! `GameState` into colored triangles, [`pipeline::RenderState`] uploads
//! and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
