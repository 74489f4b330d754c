use bytemuck::{Pod, Zeroable};

use crate::domain::frame::FrameUniforms;
use crate::domain::theme::linear_to_srgb;

/// Texture format of the trail field: one normalized byte per texel
pub const TRAIL_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::R8Unorm;

/// Format the surface is configured with and the format frames are drawn through.
///
/// The shader outputs linear color, so the view should be an sRGB format and
/// let the hardware encode. WebGPU canvases only offer linear formats
/// (`bgra8unorm`, `rgba8unorm`, `rgba16float`); those are viewed through their
/// sRGB variant. A format with no sRGB variant is drawn as is and the shader
/// encodes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceFormats {
    pub surface: wgpu::TextureFormat,
    pub view: wgpu::TextureFormat,
}

impl SurfaceFormats {
    pub fn choose(available: &[wgpu::TextureFormat]) -> Option<Self> {
        if let Some(&format) = available.iter().find(|f| f.is_srgb()) {
            return Some(Self { surface: format, view: format });
        }
        if let Some(&format) = available.iter().find(|f| f.add_srgb_suffix().is_srgb()) {
            return Some(Self { surface: format, view: format.add_srgb_suffix() });
        }
        available.first().map(|&format| Self { surface: format, view: format })
    }

    /// `view_formats` for the surface configuration
    pub fn view_formats(&self) -> Vec<wgpu::TextureFormat> {
        if self.view == self.surface { Vec::new() } else { vec![self.view] }
    }

    pub fn shader_encodes_srgb(&self) -> bool {
        !self.view.is_srgb()
    }
}

/// Clip-space vertex of the full-screen plane
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

impl QuadVertex {
    /// Two triangles covering clip space, counter-clockwise
    pub const FULLSCREEN: [QuadVertex; 6] = [
        QuadVertex { position: [-1.0, -1.0] },
        QuadVertex { position: [1.0, -1.0] },
        QuadVertex { position: [1.0, 1.0] },
        QuadVertex { position: [-1.0, -1.0] },
        QuadVertex { position: [1.0, 1.0] },
        QuadVertex { position: [-1.0, 1.0] },
    ];

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Uniform block of `dot_grid.wgsl`. Field order and padding follow WGSL
/// alignment: vec4 members start on 16-byte boundaries.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct DotUniforms {
    /// Surface size in physical pixels
    pub resolution: [f32; 2],
    pub time: f32,
    pub rotation: f32,
    /// Dot color (r, g, b) in linear space, w unused
    pub dot_color: [f32; 4],
    /// Background color (r, g, b) in linear space, w unused
    pub bg_color: [f32; 4],
    pub grid_size: f32,
    pub dot_opacity: f32,
    /// 1.0 when the shader must sRGB-encode its output itself
    pub encode_srgb: f32,
    pub _padding: f32,
}

impl Default for DotUniforms {
    fn default() -> Self {
        Self {
            resolution: [1.0, 1.0],
            time: 0.0,
            rotation: 0.0,
            dot_color: [1.0, 1.0, 1.0, 1.0],
            bg_color: [0.0, 0.0, 0.0, 1.0],
            grid_size: 1.0,
            dot_opacity: 0.0,
            encode_srgb: 0.0,
            _padding: 0.0,
        }
    }
}

impl From<&FrameUniforms> for DotUniforms {
    fn from(frame: &FrameUniforms) -> Self {
        let [dr, dg, db] = frame.dot_color;
        let [br, bg, bb] = frame.bg_color;
        Self {
            resolution: frame.resolution,
            time: frame.time,
            rotation: frame.rotation,
            dot_color: [dr, dg, db, 1.0],
            bg_color: [br, bg, bb, 1.0],
            grid_size: frame.grid_size,
            dot_opacity: frame.dot_opacity,
            encode_srgb: 0.0,
            _padding: 0.0,
        }
    }
}

impl DotUniforms {
    /// Uniforms for a frame drawn through `formats`
    pub fn for_target(frame: &FrameUniforms, formats: &SurfaceFormats) -> Self {
        let encode_srgb = if formats.shader_encodes_srgb() { 1.0 } else { 0.0 };
        Self { encode_srgb, ..Self::from(frame) }
    }
}

/// Clear color matching the background, for frames where the quad is not drawn
pub fn clear_color(frame: &FrameUniforms, formats: &SurfaceFormats) -> wgpu::Color {
    let [r, g, b] = if formats.shader_encodes_srgb() {
        frame.bg_color.map(linear_to_srgb)
    } else {
        frame.bg_color
    };
    wgpu::Color { r: r as f64, g: g as f64, b: b as f64, a: 1.0 }
}
