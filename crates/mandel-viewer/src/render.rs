//! The render step: one uniform upload and one fullscreen draw per frame.
//!
//! All fractal evaluation happens in the fragment stage of the program
//! built at startup; the host only marshals the view parameters into a
//! uniform block and issues a single draw call of an index-derived
//! fullscreen triangle.

use std::num::NonZeroU64;
use std::path::Path;

use bytemuck::{Pod, Zeroable};

use mandel_engine::render::{RenderCtx, RenderTarget};
use mandel_engine::shader::{BuildError, Program, ProgramDesc, StageFile, StageKind, build_program};

use crate::view::ViewParameters;

/// Vertex stage: emits the fullscreen triangle.
const VERTEX_STAGE: &str = "fullscreen.wgsl";
/// Fragment stage: the escape-time fractal program.
const FRAGMENT_STAGE: &str = "mandelbrot.wgsl";

/// Uniform block handed to the fragment stage.
///
/// Field order mirrors the WGSL struct in `mandelbrot.wgsl`; the layout is
/// asserted in the tests below. Center and scale narrow from the store's
/// f64 to f32 here, the deepest precision a portable WGSL uniform carries.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct FractalUniforms {
    viewport: [f32; 2],
    center: [f32; 2],
    scale: f32,
    iterations: u32,
    _pad: [f32; 2],
}

impl FractalUniforms {
    fn from_view(view: &ViewParameters) -> Self {
        Self {
            viewport: [view.width.max(1) as f32, view.height.max(1) as f32],
            center: [view.center_x as f32, view.center_y as f32],
            scale: view.scale as f32,
            iterations: view.iterations,
            _pad: [0.0; 2],
        }
    }
}

/// Owns the linked program and its uniform interface.
///
/// Everything here is created once at startup; per frame the renderer only
/// writes the uniform buffer and records the draw.
pub struct FractalRenderer {
    program: Program,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl FractalRenderer {
    /// Builds the fractal program from the shader files in `shader_dir` and
    /// creates the uniform buffer + bind group bound to it.
    ///
    /// Any load, compile, or link failure is terminal for startup.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_dir: &Path,
    ) -> Result<Self, BuildError> {
        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("fractal bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(
                            NonZeroU64::new(std::mem::size_of::<FractalUniforms>() as u64)
                                .unwrap(),
                        ),
                    },
                    count: None,
                }],
            });

        let stages = [
            StageFile::new(shader_dir.join(VERTEX_STAGE), StageKind::Vertex),
            StageFile::new(shader_dir.join(FRAGMENT_STAGE), StageKind::Fragment),
        ];

        let program = build_program(
            device,
            &stages,
            &ProgramDesc {
                label: "fractal program",
                format: surface_format,
                bind_group_layouts: &[&bind_group_layout],
            },
        )?;

        let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fractal uniforms"),
            size: std::mem::size_of::<FractalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fractal bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            }],
        });

        Ok(Self {
            program,
            uniforms,
            bind_group,
        })
    }

    /// Uploads the current view parameters and records the single draw.
    pub fn draw(&self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, view: &ViewParameters) {
        let u = FractalUniforms::from_view(view);
        ctx.queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(&u));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("fractal pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.program.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        // Fullscreen triangle generated from the vertex index.
        rpass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_match_the_wgsl_block_layout() {
        // struct FractalUniforms { viewport: vec2f, center: vec2f,
        //                          scale: f32, iterations: u32, _pad: vec2f }
        assert_eq!(std::mem::size_of::<FractalUniforms>(), 32);
        assert_eq!(std::mem::offset_of!(FractalUniforms, viewport), 0);
        assert_eq!(std::mem::offset_of!(FractalUniforms, center), 8);
        assert_eq!(std::mem::offset_of!(FractalUniforms, scale), 16);
        assert_eq!(std::mem::offset_of!(FractalUniforms, iterations), 20);
        assert_eq!(std::mem::offset_of!(FractalUniforms, _pad), 24);
    }

    #[test]
    fn upload_carries_all_six_parameters() {
        let mut view = ViewParameters::default();
        view.set_viewport(800, 600);
        let u = FractalUniforms::from_view(&view);

        assert_eq!(u.viewport, [800.0, 600.0]);
        assert_eq!(u.center, [-0.7, 0.0]);
        assert_eq!(u.scale, 2.0);
        assert_eq!(u.iterations, 256);
    }

    #[test]
    fn zero_sized_viewport_clamps_to_one_pixel() {
        let mut view = ViewParameters::default();
        view.set_viewport(0, 0);
        let u = FractalUniforms::from_view(&view);
        assert_eq!(u.viewport, [1.0, 1.0]);
    }
}
