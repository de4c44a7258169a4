use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{GlDevice, GlInit};
use crate::input::{InputState, Key, KeyState};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "lumen".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window: window setup, input polling, and the draw loop
/// live here so the demos only describe what to draw each frame.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the app exits or the window closes.
    ///
    /// `setup` builds the app once the GL context is live; its resources
    /// (shader programs, meshes, textures) need a context to be created
    /// against. Window or context creation failure is fatal and returned.
    pub fn run<A, F>(config: RuntimeConfig, gl_init: GlInit, setup: F) -> Result<()>
    where
        A: CoreApp + 'static,
        F: FnOnce(&glow::Context) -> Result<A>,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, setup);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.init_error.take() {
            return Err(err);
        }
        Ok(())
    }
}

struct WindowEntry<A> {
    window: Window,
    device: GlDevice,
    input: InputState,
    clock: FrameClock,
    app: A,
}

struct AppState<A, F> {
    config: RuntimeConfig,
    gl_init: GlInit,
    setup: Option<F>,

    entry: Option<WindowEntry<A>>,
    exit_requested: bool,
    init_error: Option<anyhow::Error>,
}

impl<A, F> AppState<A, F>
where
    A: CoreApp + 'static,
    F: FnOnce(&glow::Context) -> Result<A>,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, setup: F) -> Self {
        Self {
            config,
            gl_init,
            setup: Some(setup),
            entry: None,
            exit_requested: false,
            init_error: None,
        }
    }

    fn create_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(self.config.initial_size);

        let (window, device) = GlDevice::new(event_loop, attrs, &self.gl_init)?;

        let setup = self
            .setup
            .take()
            .context("runtime setup closure already consumed")?;
        let app = setup(device.gl()).context("app setup failed")?;

        self.entry = Some(WindowEntry {
            window,
            device,
            input: InputState::default(),
            clock: FrameClock::default(),
            app,
        });
        Ok(())
    }
}

impl<A, F> ApplicationHandler for AppState<A, F>
where
    A: CoreApp + 'static,
    F: FnOnce(&glow::Context) -> Result<A>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_entry(event_loop) {
            log::error!("failed to initialize window and GL context: {e:#}");
            self.init_error = Some(e);
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the demos animate every frame.
        if let Some(entry) = &self.entry {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let mut exit = false;

        if let Some(entry) = self.entry.as_mut() {
            if entry.window.id() != window_id {
                return;
            }

            if let Some((key, state)) = translate_key_event(&event) {
                entry.input.apply_key(key, state);
            }

            if entry.app.on_window_event(&event) == AppControl::Exit {
                exit = true;
            }

            match event {
                WindowEvent::CloseRequested => exit = true,

                WindowEvent::Focused(focused) => entry.input.set_focused(focused),

                WindowEvent::Resized(new_size) => {
                    entry.device.resize(new_size);
                    entry.window.request_redraw();
                }

                WindowEvent::ScaleFactorChanged { .. } => {
                    let new_size = entry.window.inner_size();
                    entry.device.resize(new_size);
                    entry.window.request_redraw();
                }

                WindowEvent::RedrawRequested => {
                    let time = entry.clock.tick();

                    let control = {
                        let mut ctx = FrameCtx {
                            gl: entry.device.gl(),
                            window: &entry.window,
                            input: &entry.input,
                            time,
                            size: entry.device.size(),
                        };
                        entry.app.on_frame(&mut ctx)
                    };

                    // Clear per-frame transitions after the frame consumed them.
                    entry.input.end_frame();

                    if control == AppControl::Exit {
                        exit = true;
                    } else if let Err(e) = entry.device.swap_buffers() {
                        log::error!("failed to swap buffers: {e}");
                    }
                }

                _ => {}
            }
        }

        if exit {
            self.exit_requested = true;
            event_loop.exit();
        }
    }
}

fn translate_key_event(event: &WindowEvent) -> Option<(Key, KeyState)> {
    let WindowEvent::KeyboardInput { event: key_event, .. } = event else {
        return None;
    };

    let state = match key_event.state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };

    Some((map_key(key_event.physical_key), state))
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Space => Key::Space,
            KeyCode::Tab => Key::Tab,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::KeyW => Key::W,
            KeyCode::KeyA => Key::A,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyD => Key::D,

            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode carries no stable numeric code in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_maps_to_escape() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unmapped_keys_keep_a_stable_code() {
        let a = map_key(PhysicalKey::Code(KeyCode::F5));
        let b = map_key(PhysicalKey::Code(KeyCode::F5));
        assert_eq!(a, b);
        assert!(matches!(a, Key::Unknown(_)));
    }

    #[test]
    fn default_config_is_800_by_600() {
        let config = RuntimeConfig::default();
        assert_eq!(config.initial_size, LogicalSize::new(800.0, 600.0));
    }
}
