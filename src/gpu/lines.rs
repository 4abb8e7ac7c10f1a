//! Line-list pass for the proximity network and the bounds wireframe.
//!
//! The network geometry changes every frame, so the pass re-uploads a
//! CPU-built vertex stream each frame and grows its vertex buffer on
//! demand. The wireframe cube marking the containment bounds is static
//! and prepended to the stream so both draw with one pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::DEPTH_FORMAT;
use crate::network::LineSegment;

/// Color of the bounds wireframe, dim enough to not compete with links.
const BOUNDS_COLOR: [f32; 4] = [0.25, 0.25, 0.3, 1.0];

/// One vertex of a line-list stream.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4,
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Pipeline plus grow-on-demand vertex buffer for line rendering.
pub struct LinePass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    capacity: u64,
    vertex_count: u32,
    cube_vertices: Vec<LineVertex>,
}

impl LinePass {
    pub fn new(
        device: &wgpu::Device,
        uniform_bind_group_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
        half_extent: f32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(LINE_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[LineVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            // Translucent lines read depth but never write it.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let capacity = 64 * 1024;
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Vertex Buffer"),
            size: capacity,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            vertex_buffer,
            capacity,
            vertex_count: 0,
            cube_vertices: cube_wireframe(half_extent),
        }
    }

    /// Build and upload this frame's vertex stream: bounds cube first,
    /// then two vertices per network segment carrying the segment alpha.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        segments: &[LineSegment],
    ) {
        let mut vertices =
            Vec::with_capacity(self.cube_vertices.len() + segments.len() * 2);
        vertices.extend_from_slice(&self.cube_vertices);
        for seg in segments {
            let color = [1.0, 1.0, 1.0, seg.alpha];
            vertices.push(LineVertex {
                position: seg.a.to_array(),
                color,
            });
            vertices.push(LineVertex {
                position: seg.b.to_array(),
                color,
            });
        }

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        if bytes.len() as u64 > self.capacity {
            self.capacity = (bytes.len() as u64).next_power_of_two();
            self.vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Line Vertex Buffer"),
                size: self.capacity,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        queue.write_buffer(&self.vertex_buffer, 0, bytes);
        self.vertex_count = vertices.len() as u32;
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, uniform_bind_group: &wgpu::BindGroup) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

/// The 12 edges of the axis-aligned cube spanning ±half_extent.
fn cube_wireframe(half_extent: f32) -> Vec<LineVertex> {
    let h = half_extent;
    let corners = [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];

    let mut vertices = Vec::with_capacity(24);
    for (a, b) in EDGES {
        vertices.push(LineVertex {
            position: corners[a].to_array(),
            color: BOUNDS_COLOR,
        });
        vertices.push(LineVertex {
            position: corners[b].to_array(),
            color: BOUNDS_COLOR,
        });
    }
    vertices
}

const LINE_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_right: vec3<f32>,
    point_size: f32,
    camera_up: vec3<f32>,
};

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_wireframe_edge_count() {
        let verts = cube_wireframe(150.0);
        assert_eq!(verts.len(), 24); // 12 edges, 2 vertices each
    }

    #[test]
    fn test_cube_wireframe_spans_extent() {
        let verts = cube_wireframe(150.0);
        for v in &verts {
            for c in v.position {
                assert_eq!(c.abs(), 150.0);
            }
        }
    }

    #[test]
    fn test_line_vertex_stride() {
        // position (12 bytes) + color (16 bytes), no implicit padding
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    }
}
