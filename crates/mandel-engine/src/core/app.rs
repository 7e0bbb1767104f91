use anyhow::Result;
use winit::event::WindowEvent;

use super::ctx::{FrameCtx, InitCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the viewer layer.
pub trait App {
    /// Called once after the window and GPU context exist.
    ///
    /// GPU-resident resources (programs, buffers) are built here; an error
    /// aborts startup and is propagated out of `Runtime::run`, so a failed
    /// shader build terminates the process before the first frame.
    fn on_init(&mut self, ctx: &mut InitCtx<'_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
