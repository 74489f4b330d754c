pub mod dot_shader_background;
pub mod theme_toggle;

pub use dot_shader_background::DotShaderBackground;
pub use theme_toggle::ThemeToggle;
