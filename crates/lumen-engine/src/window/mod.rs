//! Window + runtime loop.
//!
//! Owns the winit EventLoop and Window, and wires them to the GL layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
