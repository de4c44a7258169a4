//! GL device + surface management.
//!
//! This module is responsible for:
//! - creating the window together with a matching GL config
//! - creating and current-izing the GL context and window surface
//! - loading the GL function table into a `glow::Context`
//! - keeping the swapchain and viewport in sync with the window size

use std::num::NonZeroU32;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use thiserror::Error;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

/// Initialization parameters for the GL layer.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested OpenGL core-profile version as `(major, minor)`.
    pub version: (u8, u8),

    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            vsync: true,
        }
    }
}

/// Failure while bringing up the window or the GL context.
///
/// Every variant is fatal: without a context there is nothing to render with,
/// so the runtime logs the error and returns it from `Runtime::run`.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("failed to create the window and pick a GL config: {0}")]
    Display(String),

    #[error("display builder returned no window")]
    MissingWindow,

    #[error("failed to query the raw window handle")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    #[error("failed to create the GL context")]
    CreateContext(#[source] glutin::error::Error),

    #[error("failed to build window surface attributes: {0}")]
    SurfaceAttributes(String),

    #[error("failed to create the window surface")]
    CreateSurface(#[source] glutin::error::Error),

    #[error("failed to make the GL context current")]
    MakeCurrent(#[source] glutin::error::Error),
}

/// Owns the GL context, the window surface, and the loaded function table.
///
/// This type is the low-level rendering context. The `glow::Context` it hands
/// out is the explicit handle every render call site takes; nothing in the
/// engine reads GL through a global.
pub struct GlDevice {
    gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    size: PhysicalSize<u32>,
}

impl GlDevice {
    /// Creates the window and a current GL context bound to it.
    ///
    /// The window and the GL config have to be created together (the config
    /// constrains the window's pixel format on some platforms), which is why
    /// this takes the event loop and window attributes rather than a window.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<(Window, Self), DeviceError> {
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
            .map_err(|e| DeviceError::Display(e.to_string()))?;
        let window = window.ok_or(DeviceError::MissingWindow)?;
        let gl_display = gl_config.display();

        let raw_handle = window.window_handle()?.as_raw();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                init.version.0,
                init.version.1,
            ))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(DeviceError::CreateContext)?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .map_err(|e| DeviceError::SurfaceAttributes(e.to_string()))?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(DeviceError::CreateSurface)?;
        let context = not_current
            .make_current(&surface)
            .map_err(DeviceError::MakeCurrent)?;

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s) as *const _)
        };

        if init.vsync {
            // Best-effort: a missing swap-interval extension only costs vsync.
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                log::warn!("failed to enable vsync: {e}");
            }
        }

        let size = window.inner_size();
        let (x, y, w, h) = viewport_rect(size);
        unsafe { gl.viewport(x, y, w, h) };

        log::debug!(
            "GL context ready: requested {}.{} core, drawable {}x{}",
            init.version.0,
            init.version.1,
            size.width,
            size.height
        );

        Ok((window, Self { gl, surface, context, size }))
    }

    /// Returns the loaded GL function table.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Resizes the swapchain and resets the viewport to cover the full
    /// drawable.
    ///
    /// A 0x0 surface cannot be configured (minimized windows report this);
    /// only internal state is updated and the resize is deferred.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        let (Some(width), Some(height)) =
            (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
        else {
            return;
        };

        self.surface.resize(&self.context, width, height);
        let (x, y, w, h) = viewport_rect(new_size);
        unsafe { self.gl.viewport(x, y, w, h) };
    }

    /// Presents the frame.
    pub fn swap_buffers(&self) -> Result<(), glutin::error::Error> {
        self.surface.swap_buffers(&self.context)
    }
}

/// Viewport covering the full drawable: origin at (0, 0), extent (W, H).
pub fn viewport_rect(size: PhysicalSize<u32>) -> (i32, i32, i32, i32) {
    (0, 0, size.width as i32, size.height as i32)
}

fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    // The demos request no multisampling; prefer the plainest config offered.
    configs
        .reduce(|best, next| {
            if next.num_samples() < best.num_samples() {
                next
            } else {
                best
            }
        })
        .expect("no matching GL configs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_covers_full_drawable() {
        let (x, y, w, h) = viewport_rect(PhysicalSize::new(800, 600));
        assert_eq!((x, y), (0, 0));
        assert_eq!((w, h), (800, 600));
    }

    #[test]
    fn viewport_tracks_resize() {
        let (_, _, w, h) = viewport_rect(PhysicalSize::new(1920, 1080));
        assert_eq!((w, h), (1920, 1080));
    }

    #[test]
    fn gl_init_defaults_to_3_3_core_with_vsync() {
        let init = GlInit::default();
        assert_eq!(init.version, (3, 3));
        assert!(init.vsync);
    }
}
