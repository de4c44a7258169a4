//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! demo programs: the `App` trait and the per-frame context handed to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
