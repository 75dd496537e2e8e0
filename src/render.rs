use glam::{EulerRot, Mat4, Quat, Vec3};
use web_sys as web;

use crate::config::{CameraRig, Palette};
use crate::constants::{CAMERA_FAR, CAMERA_NEAR};
use crate::core::{MaterialOpacity, MorphStatus};

mod lines;
use lines::{create_layer, create_lines_resources, Layer, LinesResources};

/// Buffer sizes and static geometry a scene hands to the GPU at start.
pub struct SceneGeometry<'g> {
    pub grid: &'g [f32],
    pub morph_floats: usize,
    pub particle_floats: usize,
    pub palette: Palette,
}

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    lines: LinesResources,
    grid: Layer,
    build: Layer,
    accent: Layer,
    particles: Layer,
    width: u32,
    height: u32,
    view_proj: Mat4,
    model: Mat4,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, geometry: &SceneGeometry<'_>) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // colours are authored in sRGB and written as-is
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps.alpha_modes.contains(&wgpu::CompositeAlphaMode::PreMultiplied) {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let lines = create_lines_resources(&device, format);
        let palette = geometry.palette;
        let mut grid = create_layer(
            &device,
            &lines.bgl,
            "grid_layer",
            geometry.grid.len(),
            palette.grid,
            palette.grid_opacity,
        );
        grid.write_positions(&queue, geometry.grid);
        let settled = MorphStatus::Settled.material_opacity();
        let build = create_layer(
            &device,
            &lines.bgl,
            "build_layer",
            geometry.morph_floats,
            palette.build,
            settled.build,
        );
        let accent = create_layer(
            &device,
            &lines.bgl,
            "accent_layer",
            geometry.morph_floats,
            palette.accent,
            settled.accent,
        );
        let particles = create_layer(
            &device,
            &lines.bgl,
            "particle_layer",
            geometry.particle_floats,
            palette.particles,
            palette.particle_opacity,
        );
        log::info!("[gpu] surface {}x{} {:?} {:?}", width, height, format, alpha_mode);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            lines,
            grid,
            build,
            accent,
            particles,
            width,
            height,
            view_proj: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
        })
    }

    pub fn upload_wireframe(&mut self, build: &[f32], accent: &[f32]) {
        self.build.write_positions(&self.queue, build);
        self.accent.write_positions(&self.queue, accent);
    }

    pub fn upload_particles(&mut self, positions: &[f32]) {
        self.particles.write_positions(&self.queue, positions);
    }

    pub fn set_materials(&mut self, materials: MaterialOpacity) {
        self.build.opacity = materials.build;
        self.accent.opacity = materials.accent;
    }

    /// Perspective from the rig, eye raised by `lift`, looking at the rig target.
    pub fn set_camera(&mut self, rig: &CameraRig, lift: f32) {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(rig.fov_deg.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR);
        let eye = Vec3::from_array(rig.eye) + Vec3::Y * lift;
        let view = Mat4::look_at_rh(eye, Vec3::from_array(rig.look_at), Vec3::Y);
        self.view_proj = proj * view;
    }

    /// Scene group transform: uniform scale, pitch about X then yaw about Y.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32, scale: f32) {
        self.model = Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            Quat::from_euler(EulerRot::XYZ, pitch, yaw, 0.0),
            Vec3::ZERO,
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-apply the surface configuration after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.view_proj.to_cols_array_2d();
        let model = self.model.to_cols_array_2d();
        for layer in [&self.grid, &self.build, &self.accent, &self.particles] {
            layer.write_uniforms(&self.queue, view_proj, model);
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.lines.line_pipeline);
            for layer in [&self.grid, &self.build, &self.accent] {
                if layer.vertex_count == 0 {
                    continue;
                }
                rpass.set_bind_group(0, &layer.bind_group, &[]);
                rpass.set_vertex_buffer(0, layer.vertex_buffer.slice(..));
                rpass.draw(0..layer.vertex_count, 0..1);
            }
            if self.particles.vertex_count > 0 {
                rpass.set_pipeline(&self.lines.point_pipeline);
                rpass.set_bind_group(0, &self.particles.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.particles.vertex_buffer.slice(..));
                rpass.draw(0..self.particles.vertex_count, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
