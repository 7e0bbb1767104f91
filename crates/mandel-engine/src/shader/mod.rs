//! Runtime shader build pipeline.
//!
//! Shader sources are plain WGSL files resolved at startup, not embedded
//! strings, so the fractal program can be edited without recompiling the
//! host. The pipeline is load → compile per stage → link, failing fast on
//! the first error:
//!
//! - [`ShaderSource::load`] reads one stage's text, tagged with its origin.
//! - [`compile_stage`] submits it to the driver inside a validation error
//!   scope and reports the diagnostic log (the literal `OK` when empty).
//! - [`link_program`] builds the render pipeline from the compiled stages
//!   under the same reporting rules.
//! - [`build_program`] orchestrates the whole sequence for a stage list.
//!
//! Every artifact is a scoped wgpu handle: dropping a failed build releases
//! the driver objects on every exit path.

mod error;
mod program;
mod source;
mod stage;

pub use error::BuildError;
pub use program::{FS_ENTRY, Program, ProgramDesc, StageFile, VS_ENTRY, build_program, link_program};
pub use source::ShaderSource;
pub use stage::{CompiledStage, StageKind, compile_stage, diagnostic_or_ok};
