//! Lumen engine crate.
//!
//! Owns the window/runtime loop, the OpenGL context, and the GL-side resource
//! wrappers (shader programs, meshes, textures) shared by the demo programs.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
