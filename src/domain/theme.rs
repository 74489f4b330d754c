//! Light/dark theme and the dot-grid palette each one selects.

use crate::domain::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Key under which the theme preference is persisted
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark => DARK_PALETTE,
            Theme::Light => LIGHT_PALETTE,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Parse a stored preference. Unknown values (e.g. `"system"`) yield `None`.
    pub fn from_preference(value: &str) -> Option<Self> {
        Theme::from_str(value.trim()).ok()
    }

    /// Stored preference first, then the OS color-scheme hint, then dark.
    pub fn resolve_initial(stored: Option<&str>, prefers_light: bool) -> Self {
        stored
            .and_then(Theme::from_preference)
            .unwrap_or(if prefers_light { Theme::Light } else { Theme::Dark })
    }
}

/// 8-bit sRGB color, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_u32(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xff) as u8, g: ((hex >> 8) & 0xff) as u8, b: (hex & 0xff) as u8 }
    }

    pub fn parse_hex(value: &str) -> Result<Self, AppError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 {
            return Err(AppError::ConfigError(format!("expected #RRGGBB, got '{}'", value)));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| AppError::ConfigError(format!("invalid hex color '{}'", value)))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels in [0, 1], still sRGB encoded
    pub fn to_srgb(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }

    /// Channels decoded to linear light, the space the shader blends in
    pub fn to_linear(self) -> [f32; 3] {
        self.to_srgb().map(srgb_to_linear)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Inverse of the decode in [`Rgb::to_linear`]; what an sRGB render target stores
pub fn linear_to_srgb(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.003_130_8 { c * 12.92 } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse_hex(&value)
    }
}

/// The three values the shader reads from the theme. Always replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub dot_color: Rgb,
    pub bg_color: Rgb,
    pub dot_opacity: f32,
}

pub const DARK_PALETTE: ThemePalette = ThemePalette {
    dot_color: Rgb::from_u32(0xFFFFFF),
    bg_color: Rgb::from_u32(0x121212),
    dot_opacity: 0.025,
};

pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    dot_color: Rgb::from_u32(0x000000),
    bg_color: Rgb::from_u32(0xFFFFFF),
    dot_opacity: 0.4,
};
