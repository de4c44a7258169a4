use glow::HasContext;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::input::InputState;
use crate::render::Color;
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Carries the GL context explicitly so rendering call sites never reach for
/// hidden global state; everything a frame needs to draw rides in here.
pub struct FrameCtx<'a> {
    /// The loaded GL function table for the window's context.
    pub gl: &'a glow::Context,

    /// The winit window being rendered to.
    pub window: &'a Window,

    /// Key state as of this frame.
    pub input: &'a InputState,

    /// Frame timing snapshot for this frame.
    pub time: FrameTime,

    /// Current drawable size in physical pixels.
    pub size: PhysicalSize<u32>,
}

impl FrameCtx<'_> {
    /// Drawable aspect ratio (width / height), guarded against a zero height.
    pub fn aspect_ratio(&self) -> f32 {
        self.size.width as f32 / self.size.height.max(1) as f32
    }

    /// Clears the color buffer with `color`.
    pub fn clear(&self, color: Color) {
        unsafe {
            self.gl.clear_color(color.r, color.g, color.b, color.a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Clears both the color and depth buffers. Use from demos that enable
    /// depth testing.
    pub fn clear_with_depth(&self, color: Color) {
        unsafe {
            self.gl.clear_color(color.r, color.g, color.b, color.a);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }
}
