//! The view-parameter store and its input-driven transforms.
//!
//! One instance of [`ViewParameters`] is owned by the application, mutated
//! only by the input-command path, and read once per frame by the renderer.
//! Every transform prints a status line to stdout so a session can be
//! followed (and replayed) from the terminal.

pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Pan distance as a fraction of the pan-step base (see [`PanFormula`]).
pub const PAN_FRACTION: f64 = 0.1;

const DEFAULT_VIEWPORT: (u32, u32) = (1024, 768);
const DEFAULT_CENTER: (f64, f64) = (-0.7, 0.0);
const DEFAULT_SCALE: f64 = 2.0;
const DEFAULT_ITERATIONS: u32 = 256;

/// How a pan step relates to the zoom scale.
///
/// Proportional panning moves by a constant fraction of the visible plane,
/// so it slows down as you zoom in; inverse panning does the opposite.
/// Both stay selectable; [`DEFAULT_PAN_FORMULA`] picks the proportional one.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PanFormula {
    /// `PAN_FRACTION * scale` per step.
    ScaleProportional,
    /// `PAN_FRACTION / scale` per step.
    ScaleInverse,
}

pub const DEFAULT_PAN_FORMULA: PanFormula = PanFormula::ScaleProportional;

impl PanFormula {
    pub fn step(self, scale: f64) -> f64 {
        match self {
            PanFormula::ScaleProportional => PAN_FRACTION * scale,
            PanFormula::ScaleInverse => PAN_FRACTION / scale,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// A single deterministic transform of the parameter store.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViewCommand {
    ZoomIn,
    ZoomOut,
    IterationsUp,
    IterationsDown,
    Pan(PanDirection),
    Reset,
}

/// Iteration-count step: coarser steps at higher counts.
pub fn iteration_step(iterations: u32) -> u32 {
    match iterations {
        0..=255 => 1,
        256..=511 => 2,
        512..=1023 => 4,
        1024..=2047 => 8,
        2048..=4095 => 32,
        4096..=8191 => 128,
        8192..=16383 => 256,
        _ => 512,
    }
}

/// The parameter store read by the render step every frame.
///
/// Center and scale stay `f64` on the CPU side; the uniform upload narrows
/// to `f32` (see the renderer).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewParameters {
    /// Viewport size in physical pixels, updated from the surface.
    pub width: u32,
    pub height: u32,

    /// Center of the view on the complex plane.
    pub center_x: f64,
    pub center_y: f64,

    /// Half-extent of the view; always expected positive, not enforced.
    pub scale: f64,

    /// Escape-time iteration cap.
    pub iterations: u32,

    pan_formula: PanFormula,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT.0,
            height: DEFAULT_VIEWPORT.1,
            center_x: DEFAULT_CENTER.0,
            center_y: DEFAULT_CENTER.1,
            scale: DEFAULT_SCALE,
            iterations: DEFAULT_ITERATIONS,
            pan_formula: DEFAULT_PAN_FORMULA,
        }
    }
}

impl ViewParameters {
    pub fn with_pan_formula(formula: PanFormula) -> Self {
        Self {
            pan_formula: formula,
            ..Self::default()
        }
    }

    /// Applies one command and prints the resulting status line(s).
    pub fn apply(&mut self, cmd: ViewCommand) {
        match cmd {
            ViewCommand::ZoomIn => self.zoom_in(),
            ViewCommand::ZoomOut => self.zoom_out(),
            ViewCommand::IterationsUp => self.iterations_increase(),
            ViewCommand::IterationsDown => self.iterations_decrease(),
            ViewCommand::Pan(dir) => self.pan(dir),
            ViewCommand::Reset => self.reset(),
        }
    }

    pub fn zoom_in(&mut self) {
        self.scale *= ZOOM_IN_FACTOR;
        println!("{}", self.scale_line());
    }

    pub fn zoom_out(&mut self) {
        if self.scale > 0.0 {
            self.scale *= ZOOM_OUT_FACTOR;
        }
        println!("{}", self.scale_line());
    }

    pub fn iterations_increase(&mut self) {
        self.iterations = self.iterations.saturating_add(iteration_step(self.iterations));
        println!("{}", self.iterations_line());
    }

    /// Decreases the iteration cap, clamping at zero.
    pub fn iterations_decrease(&mut self) {
        if self.iterations > 0 {
            self.iterations = self
                .iterations
                .saturating_sub(iteration_step(self.iterations));
        }
        println!("{}", self.iterations_line());
    }

    pub fn pan(&mut self, dir: PanDirection) {
        let step = self.pan_formula.step(self.scale);
        match dir {
            PanDirection::Right => self.center_x += step,
            PanDirection::Left => self.center_x -= step,
            PanDirection::Up => self.center_y += step,
            PanDirection::Down => self.center_y -= step,
        }
        println!("{}", self.center_line());
    }

    /// Restores the default view, keeping the current viewport size.
    pub fn reset(&mut self) {
        let (width, height) = (self.width, self.height);
        *self = Self {
            width,
            height,
            pan_formula: self.pan_formula,
            ..Self::default()
        };
        println!("{}", self.scale_line());
        println!("{}", self.iterations_line());
        println!("{}", self.center_line());
    }

    /// Records the viewport size used by the next frame's uniform upload.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn scale_line(&self) -> String {
        format!("scale {}", self.scale)
    }

    fn iterations_line(&self) -> String {
        format!("iterations {}", self.iterations)
    }

    fn center_line(&self) -> String {
        format!("x {:.15} y {:.15}", self.center_x, self.center_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── iteration step table ──────────────────────────────────────────────

    #[test]
    fn step_table_boundaries() {
        assert_eq!(iteration_step(0), 1);
        assert_eq!(iteration_step(255), 1);
        assert_eq!(iteration_step(256), 2);
        assert_eq!(iteration_step(511), 2);
        assert_eq!(iteration_step(512), 4);
        assert_eq!(iteration_step(1023), 4);
        assert_eq!(iteration_step(1024), 8);
        assert_eq!(iteration_step(2047), 8);
        assert_eq!(iteration_step(2048), 32);
        assert_eq!(iteration_step(4095), 32);
        assert_eq!(iteration_step(4096), 128);
        assert_eq!(iteration_step(8191), 128);
        assert_eq!(iteration_step(8192), 256);
        assert_eq!(iteration_step(16383), 256);
        assert_eq!(iteration_step(16384), 512);
        assert_eq!(iteration_step(u32::MAX), 512);
    }

    #[test]
    fn step_is_monotonically_non_decreasing() {
        let mut prev = 0;
        for n in (0..20_000).step_by(17) {
            let step = iteration_step(n);
            assert!(step >= prev, "step({n}) = {step} < {prev}");
            prev = step;
        }
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn zoom_pair_compounds_to_ninety_nine_percent() {
        // 1.1 * 0.9 != 1; one in/out pair lands at 0.99x, by design.
        let mut view = ViewParameters::default();
        let initial = view.scale;
        view.zoom_in();
        view.zoom_out();
        assert!((view.scale - initial * 0.99).abs() < 1e-12);
    }

    #[test]
    fn zoom_in_from_default_prints_scale_2_2() {
        let mut view = ViewParameters::default();
        view.zoom_in();
        assert_eq!(view.scale_line(), "scale 2.2");
    }

    // ── iterations ────────────────────────────────────────────────────────

    #[test]
    fn increase_from_default_prints_iterations_258() {
        // 256 sits in the [256, 512) band, so the step is 2.
        let mut view = ViewParameters::default();
        view.iterations_increase();
        assert_eq!(view.iterations, 258);
        assert_eq!(view.iterations_line(), "iterations 258");
    }

    #[test]
    fn decrease_never_underflows_zero() {
        let mut view = ViewParameters::default();
        view.iterations = 1;
        view.iterations_decrease();
        assert_eq!(view.iterations, 0);
        view.iterations_decrease();
        assert_eq!(view.iterations, 0);
    }

    #[test]
    fn decrease_at_boundary_uses_current_band_step() {
        let mut view = ViewParameters::default();
        view.iterations = 256;
        view.iterations_decrease();
        assert_eq!(view.iterations, 254);
    }

    // ── pan ───────────────────────────────────────────────────────────────

    #[test]
    fn proportional_pan_moves_a_fraction_of_scale() {
        let mut view = ViewParameters::with_pan_formula(PanFormula::ScaleProportional);
        view.pan(PanDirection::Right);
        assert!((view.center_x - (-0.7 + 0.1 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn inverse_pan_moves_a_fraction_over_scale() {
        let mut view = ViewParameters::with_pan_formula(PanFormula::ScaleInverse);
        view.pan(PanDirection::Up);
        assert!((view.center_y - 0.1 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn pan_directions_are_symmetric() {
        let mut view = ViewParameters::default();
        view.pan(PanDirection::Left);
        view.pan(PanDirection::Right);
        assert!((view.center_x - (-0.7)).abs() < 1e-12);
        view.pan(PanDirection::Down);
        view.pan(PanDirection::Up);
        assert!(view.center_y.abs() < 1e-12);
    }

    #[test]
    fn center_line_uses_fifteen_decimals() {
        let view = ViewParameters::default();
        assert_eq!(view.center_line(), "x -0.700000000000000 y 0.000000000000000");
    }

    // ── reset / viewport ──────────────────────────────────────────────────

    #[test]
    fn reset_restores_defaults_but_keeps_viewport() {
        let mut view = ViewParameters::default();
        view.set_viewport(800, 600);
        view.zoom_in();
        view.iterations_increase();
        view.pan(PanDirection::Down);
        view.reset();

        assert_eq!(view.width, 800);
        assert_eq!(view.height, 600);
        assert_eq!(view.scale, 2.0);
        assert_eq!(view.iterations, 256);
        assert_eq!(view.center_x, -0.7);
        assert_eq!(view.center_y, 0.0);
    }

    #[test]
    fn resize_updates_the_viewport_seen_by_the_next_upload() {
        let mut view = ViewParameters::default();
        view.set_viewport(800, 600);
        assert_eq!((view.width, view.height), (800, 600));
    }
}
