use crate::domain::theme::ThemePalette;

/// Everything the dot-grid shader needs for one frame, apart from the trail texels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    /// Surface size in physical pixels
    pub resolution: [f32; 2],
    /// Seconds since the backdrop was mounted
    pub time: f32,
    pub rotation: f32,
    pub grid_size: f32,
    /// Linear-light dot color
    pub dot_color: [f32; 3],
    /// Linear-light background color
    pub bg_color: [f32; 3],
    pub dot_opacity: f32,
}

impl FrameUniforms {
    pub fn new(resolution: [f32; 2], time: f32, rotation: f32, grid_size: u32, palette: &ThemePalette) -> Self {
        Self {
            resolution,
            time,
            rotation,
            grid_size: grid_size as f32,
            dot_color: palette.dot_color.to_linear(),
            bg_color: palette.bg_color.to_linear(),
            dot_opacity: palette.dot_opacity,
        }
    }
}
