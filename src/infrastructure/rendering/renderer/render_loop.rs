use super::*;
use crate::application::{FrameSink, FrameUpdate};
use crate::infrastructure::rendering::gpu_structures::clear_color;
use crate::log_trace;

impl DotGridRenderer {
    fn write_uniforms(&mut self, uniforms: DotUniforms) {
        if bytemuck::bytes_of(&uniforms) == bytemuck::bytes_of(&self.last_uniforms) {
            return;
        }
        self.queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.last_uniforms = uniforms;
    }

    fn upload_trail(&self, texels: &[u8]) {
        let side = self.trail_size;
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.trail_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            texels,
            wgpu::TexelCopyBufferLayout { offset: 0, bytes_per_row: Some(side), rows_per_image: Some(side) },
            wgpu::Extent3d { width: side, height: side, depth_or_array_layers: 1 },
        );
    }

    pub fn render(&mut self, update: &FrameUpdate<'_>) -> RenderingResult<()> {
        self.write_uniforms(DotUniforms::for_target(&update.uniforms, &self.formats));

        if let Some(texels) = update.trail {
            let expected = (self.trail_size as usize) * (self.trail_size as usize);
            if update.trail_size != self.trail_size || texels.len() != expected {
                return Err(AppError::RenderingError(format!(
                    "trail is {}x{} but the texture is {}x{}",
                    update.trail_size, update.trail_size, self.trail_size, self.trail_size
                )));
            }
            self.upload_trail(texels);
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                // skip this frame, the next one draws into the fresh surface
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => {
                return Err(AppError::RenderingError(format!("Failed to get surface texture: {:?}", e)));
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.formats.view),
            ..Default::default()
        });
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Dot Grid Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Dot Grid Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(&update.uniforms, &self.formats)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..QuadVertex::FULLSCREEN.len() as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.frames_presented += 1;
        if self.frames_presented % 600 == 0 {
            log_trace!(
                LogComponent::Infrastructure("DotGridRenderer"),
                "{} frames presented at {}x{}",
                self.frames_presented,
                self.width,
                self.height
            );
        }

        Ok(())
    }
}

impl FrameSink for DotGridRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.resize_surface(width, height);
    }

    fn present(&mut self, update: &FrameUpdate<'_>) -> RenderingResult<()> {
        self.render(update)
    }
}
