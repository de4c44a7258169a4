use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demo programs.
///
/// Resource construction happens before the loop starts, in the setup closure
/// passed to [`Runtime::run`](crate::window::Runtime::run), once the GL
/// context is live.
pub trait App {
    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame, before the buffer swap.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}
