//! GL-side rendering resources.
//!
//! Every constructor and method takes the `glow::Context` explicitly; these
//! types hold GL handles, never the context itself.

pub mod color;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use color::Color;
pub use mesh::{Mesh, VertexLayout};
pub use shader::{ShaderError, ShaderProgram, ShaderStage};
pub use texture::{Texture2d, TextureError};
