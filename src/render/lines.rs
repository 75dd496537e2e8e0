use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LayerUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// One drawable set of positions with its own colour uniform.
pub(crate) struct Layer {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) color: [f32; 3],
    pub(crate) opacity: f32,
}

impl Layer {
    /// Upload flattened `x, y, z` positions. Anything beyond the buffer's
    /// capacity is dropped.
    pub(crate) fn write_positions(&mut self, queue: &wgpu::Queue, positions: &[f32]) {
        let capacity = (self.vertex_buffer.size() / 4) as usize;
        let floats = &positions[..positions.len().min(capacity)];
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(floats));
        self.vertex_count = (floats.len() / 3) as u32;
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, view_proj: [[f32; 4]; 4], model: [[f32; 4]; 4]) {
        let u = LayerUniforms {
            view_proj,
            model,
            color: [self.color[0], self.color[1], self.color[2], self.opacity],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

pub(crate) struct LinesResources {
    pub(crate) line_pipeline: wgpu::RenderPipeline,
    pub(crate) point_pipeline: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
}

fn make_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    label: &str,
    topology: wgpu::PrimitiveTopology,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: (3 * std::mem::size_of::<f32>()) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &POSITION_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub(crate) fn create_lines_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> LinesResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::LINES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("layer_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("lines_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let line_pipeline = make_pipeline(
        device,
        &pl,
        &shader,
        "line_pipeline",
        wgpu::PrimitiveTopology::LineList,
        color_format,
    );
    let point_pipeline = make_pipeline(
        device,
        &pl,
        &shader,
        "point_pipeline",
        wgpu::PrimitiveTopology::PointList,
        color_format,
    );
    LinesResources {
        line_pipeline,
        point_pipeline,
        bgl,
    }
}

/// Allocate a layer with room for `capacity_floats` position floats.
pub(crate) fn create_layer(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    label: &str,
    capacity_floats: usize,
    color: [f32; 3],
    opacity: f32,
) -> Layer {
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<LayerUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: (capacity_floats.max(3) * std::mem::size_of::<f32>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    Layer {
        uniform_buffer,
        bind_group,
        vertex_buffer,
        vertex_count: 0,
        color,
        opacity,
    }
}
