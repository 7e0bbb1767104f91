//! Application layer: wires engine input events to view commands and drives
//! the render step once per frame.

use std::path::PathBuf;

use anyhow::Result;

use mandel_engine::core::{App, AppControl, FrameCtx, InitCtx};
use mandel_engine::input::{InputEvent, Key, KeyState};

use crate::render::FractalRenderer;
use crate::view::{PanDirection, ViewCommand, ViewParameters};

/// White clear; the fractal pass paints over every pixel, so this only
/// shows through on skipped frames.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// How often the window-title FPS readout refreshes, in frames.
const TITLE_REFRESH_FRAMES: u64 = 60;

pub struct ViewerApp {
    shader_dir: PathBuf,
    view: ViewParameters,
    renderer: Option<FractalRenderer>,
}

impl ViewerApp {
    pub fn new(shader_dir: PathBuf) -> Self {
        Self {
            shader_dir,
            view: ViewParameters::default(),
            renderer: None,
        }
    }
}

impl App for ViewerApp {
    fn on_init(&mut self, ctx: &mut InitCtx<'_>) -> Result<()> {
        // Detected GPU report, the counterpart of the usage banner.
        println!(
            "{} ({:?}), driver {} {}",
            ctx.adapter.name, ctx.adapter.backend, ctx.adapter.driver, ctx.adapter.driver_info
        );

        let renderer = FractalRenderer::new(ctx.device, ctx.surface_format, &self.shader_dir)?;
        self.renderer = Some(renderer);
        self.view.set_viewport(ctx.size.width, ctx.size.height);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Press and repeat both apply, so holding a key keeps stepping.
        for ev in &ctx.frame_input.events {
            if let InputEvent::Key {
                key,
                state: KeyState::Pressed,
                ..
            } = ev
            {
                if *key == Key::Escape {
                    return AppControl::Exit;
                }
                if let Some(cmd) = command_for_key(*key) {
                    self.view.apply(cmd);
                }
            }
        }

        let scroll = ctx.frame_input.scroll;
        if scroll > 0.0 {
            self.view.apply(ViewCommand::ZoomIn);
        } else if scroll < 0.0 {
            self.view.apply(ViewCommand::ZoomOut);
        }

        // Lazy resize model: the surface size observed here is what the
        // uniform upload for this frame uses.
        let size = ctx.gpu.size();
        self.view.set_viewport(size.width, size.height);

        if ctx.time.frame_index % TITLE_REFRESH_FRAMES == 0 {
            ctx.window
                .set_title(&format!("Mandelbrot ({:.0} fps)", ctx.time.smoothed_fps));
        }

        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };
        let view = &self.view;
        ctx.render(CLEAR_COLOR, |rctx, target| renderer.draw(rctx, target, view))
    }
}

/// Key bindings; digits drive zoom and iteration depth, `Home` resets.
fn command_for_key(key: Key) -> Option<ViewCommand> {
    match key {
        Key::Digit1 => Some(ViewCommand::ZoomIn),
        Key::Digit2 => Some(ViewCommand::ZoomOut),
        Key::Digit3 => Some(ViewCommand::IterationsDown),
        Key::Digit4 => Some(ViewCommand::IterationsUp),
        Key::ArrowRight => Some(ViewCommand::Pan(PanDirection::Right)),
        Key::ArrowLeft => Some(ViewCommand::Pan(PanDirection::Left)),
        Key::ArrowUp => Some(ViewCommand::Pan(PanDirection::Up)),
        Key::ArrowDown => Some(ViewCommand::Pan(PanDirection::Down)),
        Key::Home => Some(ViewCommand::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_and_arrow_bindings() {
        assert_eq!(command_for_key(Key::Digit1), Some(ViewCommand::ZoomIn));
        assert_eq!(command_for_key(Key::Digit2), Some(ViewCommand::ZoomOut));
        assert_eq!(
            command_for_key(Key::Digit3),
            Some(ViewCommand::IterationsDown)
        );
        assert_eq!(
            command_for_key(Key::Digit4),
            Some(ViewCommand::IterationsUp)
        );
        assert_eq!(
            command_for_key(Key::ArrowRight),
            Some(ViewCommand::Pan(PanDirection::Right))
        );
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(command_for_key(Key::Space), None);
        assert_eq!(command_for_key(Key::Unknown(42)), None);
    }
}
