//! Dot-grid field math.
//!
//! CPU mirror of `dot_grid.wgsl`. The renderer never calls into this module;
//! it exists so grid layout and shading can be checked without a GPU.

use crate::domain::theme::ThemePalette;

/// Off-center point the pulse and the radial fade are measured from
pub const FOCAL_POINT: [f32; 2] = [0.7, 1.1];
pub const MAX_DOT_SIZE: f32 = 0.3;
pub const EDGE_SOFTNESS: f32 = 0.05;

/// Aspect-corrected UV with cover fit: the longer axis spans [0, 1] and the
/// shorter one is cropped symmetrically, so cells stay square in pixels.
pub fn cover_uv(screen_uv: [f32; 2], resolution: [f32; 2]) -> [f32; 2] {
    let longest = resolution[0].max(resolution[1]).max(1.0);
    let scale = [resolution[0] / longest, resolution[1] / longest];
    [
        ((screen_uv[0] - 0.5) * scale[0] + 0.5).clamp(0.0, 1.0),
        ((screen_uv[1] - 0.5) * scale[1] + 0.5).clamp(0.0, 1.0),
    ]
}

/// Rotate around (0.5, 0.5)
pub fn rotate(uv: [f32; 2], angle: f32) -> [f32; 2] {
    if angle == 0.0 {
        return uv;
    }
    let (s, c) = angle.sin_cos();
    let p = [uv[0] - 0.5, uv[1] - 0.5];
    [c * p[0] + s * p[1] + 0.5, -s * p[0] + c * p[1] + 0.5]
}

pub fn sdf_circle(p: [f32; 2], r: f32) -> f32 {
    let dx = p[0] - 0.5;
    let dy = p[1] - 0.5;
    (dx * dx + dy * dy).sqrt() - r
}

pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `mix` followed by the clamp the render target applies
fn mix_saturate(a: f32, b: f32, t: f32) -> f32 {
    (a + (b - a) * t).clamp(0.0, 1.0)
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Grid placed over a render surface of a given pixel resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGrid {
    pub resolution: [f32; 2],
    pub grid_size: u32,
    pub rotation: f32,
}

impl DotGrid {
    /// A zero `grid_size` is raised to one cell.
    pub fn new(resolution: [f32; 2], grid_size: u32, rotation: f32) -> Self {
        Self { resolution, grid_size: grid_size.max(1), rotation }
    }

    /// Cells per side; fixed by configuration, independent of resolution
    pub fn cells_per_side(&self) -> u32 {
        self.grid_size
    }

    /// Edge length of one square cell in pixels
    pub fn cell_pixel_size(&self) -> f32 {
        self.resolution[0].max(self.resolution[1]) / self.grid_size as f32
    }

    /// Grid cell containing the pixel at `frag` (pixels, origin bottom-left)
    pub fn cell_at(&self, frag: [f32; 2]) -> (u32, u32) {
        let uv = rotate(self.uv_at(frag), self.rotation);
        let n = self.grid_size as f32;
        let last = self.grid_size - 1;
        (((uv[0] * n).floor() as u32).min(last), ((uv[1] * n).floor() as u32).min(last))
    }

    fn uv_at(&self, frag: [f32; 2]) -> [f32; 2] {
        let screen = [frag[0] / self.resolution[0], frag[1] / self.resolution[1]];
        cover_uv(screen, self.resolution)
    }

    /// Shade one pixel. `trail` maps a cover-space UV to trail heat in [0, 1].
    ///
    /// Mixes the sRGB-encoded palette channels; the shader mixes in linear space.
    pub fn shade(
        &self,
        frag: [f32; 2],
        time: f32,
        palette: &ThemePalette,
        trail: impl Fn([f32; 2]) -> f32,
    ) -> [f32; 3] {
        let uv = self.uv_at(frag);
        let rotated = rotate(uv, self.rotation);
        let n = self.grid_size as f32;

        let cell_uv = [fract(rotated[0] * n), fract(rotated[1] * n)];
        let cell_center = rotate(
            [((rotated[0] * n).floor() + 0.5) / n, ((rotated[1] * n).floor() + 0.5) / n],
            -self.rotation,
        );

        let screen_mask = smoothstep(0.0, 1.0, 1.0 - uv[1]);
        let to_focal = [uv[0] - FOCAL_POINT[0], uv[1] - FOCAL_POINT[1]];
        let focal_distance = (to_focal[0] * to_focal[0] + to_focal[1] * to_focal[1]).sqrt();
        let radial_mask = smoothstep(0.5, 1.0, focal_distance);
        let combined_mask = screen_mask * radial_mask;
        let pulse = (time * 2.0 + focal_distance * 10.0).sin();

        let influence = trail(cell_center);
        let scale_influence = (influence * 3.5).max(pulse * 0.3);
        let dot_size = (focal_distance * focal_distance * 0.3).min(MAX_DOT_SIZE);
        let sdf = sdf_circle(cell_uv, dot_size * (1.0 + scale_influence));
        let dot = 1.0 - smoothstep(0.0, EDGE_SOFTNESS, sdf);

        let opacity_influence = (influence * 10.0).max(pulse * 0.5);
        let amount = dot * combined_mask * palette.dot_opacity * (1.0 + opacity_influence);

        let bg = palette.bg_color.to_srgb();
        let fg = palette.dot_color.to_srgb();
        [
            mix_saturate(bg[0], fg[0], amount),
            mix_saturate(bg[1], fg[1], amount),
            mix_saturate(bg[2], fg[2], amount),
        ]
    }
}
