//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipeline, buffers, bind groups) and
//! issue commands through the handles provided here. The runtime hands a
//! [`RenderCtx`] and [`RenderTarget`] to the application once per frame.

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
