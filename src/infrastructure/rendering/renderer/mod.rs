//! WebGPU renderer for the dot-grid backdrop.
//!
//! Draws one full-screen quad with `dot_grid.wgsl`. Per frame it receives a
//! [`FrameUpdate`](crate::application::FrameUpdate), writes the uniform block,
//! uploads the trail texels when they changed and presents. Ownership stays
//! with the mounting component; there is no global renderer handle.

use crate::domain::{
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::rendering::gpu_structures::{
    DotUniforms, QuadVertex, SurfaceFormats, TRAIL_TEXTURE_FORMAT,
};
use web_sys::HtmlCanvasElement;
use wgpu::util::DeviceExt;

pub struct DotGridRenderer {
    canvas: HtmlCanvasElement,
    width: u32,
    height: u32,

    // WGPU state
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    formats: SurfaceFormats,

    // Pipeline and bindings
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    trail_texture: wgpu::Texture,
    trail_size: u32,

    last_uniforms: DotUniforms,
    frames_presented: u64,
}

mod initialization;
mod render_loop;
