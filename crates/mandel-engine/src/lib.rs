//! Mandel engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the viewer:
//! window/event loop, device and surface management, the runtime shader
//! build pipeline, input translation, frame timing, and logging bootstrap.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
pub mod shader;
