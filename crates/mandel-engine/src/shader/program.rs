use std::path::PathBuf;

use super::error::BuildError;
use super::source::ShaderSource;
use super::stage::{CompiledStage, StageKind, compile_stage, diagnostic_or_ok};

/// Entry points every program is expected to export.
///
/// Fixed by convention across the codebase rather than configured per
/// program; the shader assets follow the same names.
pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// One entry of a program's stage list: which file, compiled as what.
#[derive(Debug, Clone)]
pub struct StageFile {
    pub path: PathBuf,
    pub kind: StageKind,
}

impl StageFile {
    pub fn new(path: impl Into<PathBuf>, kind: StageKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Link-time parameters for a program.
pub struct ProgramDesc<'a> {
    /// Name used to tag link diagnostics.
    pub label: &'a str,
    /// Color target the pipeline renders into.
    pub format: wgpu::TextureFormat,
    /// Bind group layouts describing the program's uniform interface.
    ///
    /// Binding is structural: the interface is fixed here at link time, so
    /// no per-frame lookup of uniform names exists.
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
}

/// A linked, ready-to-bind program.
///
/// Only ever constructed from a successful link; a partially-linked program
/// cannot be observed, let alone bound.
pub struct Program {
    pub pipeline: wgpu::RenderPipeline,
    /// Link diagnostics; empty means clean.
    pub log: String,
}

/// Links compiled stages into a render pipeline.
///
/// Runs inside a validation error scope; the link log is reported
/// unconditionally (`OK` when the driver had nothing to say). On failure no
/// pipeline escapes; the handle created under the failed scope is dropped
/// with the scope result.
pub fn link_program(
    device: &wgpu::Device,
    vertex: &CompiledStage,
    fragment: &CompiledStage,
    desc: &ProgramDesc<'_>,
) -> Result<Program, BuildError> {
    debug_assert_eq!(vertex.kind, StageKind::Vertex);
    debug_assert_eq!(fragment.kind, StageKind::Fragment);

    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: desc.bind_group_layouts,
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module: &vertex.module,
            entry_point: Some(VS_ENTRY),
            compilation_options: Default::default(),
            buffers: &[],
        },

        fragment: Some(wgpu::FragmentState {
            module: &fragment.module,
            entry_point: Some(FS_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),

        multiview_mask: None,
        cache: None,
    });

    let scope_error = pollster::block_on(error_scope.pop());
    let log = scope_error.map(|e| e.to_string()).unwrap_or_default();

    if !log.is_empty() {
        log::error!("{}: {}", desc.label, log);
        return Err(BuildError::Link {
            name: desc.label.to_string(),
            log,
        });
    }

    log::info!("{}: {}", desc.label, diagnostic_or_ok(&log));
    Ok(Program { pipeline, log })
}

/// Builds a program from a stage file list: load → compile each stage →
/// link.
///
/// Fails fast: the first load or compile error aborts the build without
/// touching the remaining stages, and the caller treats any error as fatal
/// for startup. The list must contain exactly one vertex and one fragment
/// stage; a later entry of the same kind replaces the earlier one.
pub fn build_program(
    device: &wgpu::Device,
    stages: &[StageFile],
    desc: &ProgramDesc<'_>,
) -> Result<Program, BuildError> {
    let mut vertex: Option<CompiledStage> = None;
    let mut fragment: Option<CompiledStage> = None;

    for stage in stages {
        // The source lives exactly as long as its compile call.
        let source = ShaderSource::load(&stage.path)?;
        let compiled = compile_stage(device, &source, stage.kind)?;
        match stage.kind {
            StageKind::Vertex => vertex = Some(compiled),
            StageKind::Fragment => fragment = Some(compiled),
        }
    }

    let vertex = vertex.ok_or(BuildError::MissingStage {
        kind: StageKind::Vertex,
    })?;
    let fragment = fragment.ok_or(BuildError::MissingStage {
        kind: StageKind::Fragment,
    })?;

    link_program(device, &vertex, &fragment, desc)
}
