use crate::domain::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const GRID_SIZE: u32 = 120;
pub const ROTATION: f32 = 0.0;
pub const TRAIL_SIZE: u32 = 512;
pub const TRAIL_RADIUS: f32 = 0.2;
pub const TRAIL_MAX_AGE: u64 = 600;
pub const TRAIL_INTERPOLATE: u32 = 3;
pub const TRAIL_INTENSITY: f32 = 0.2;
pub const TRAIL_MIN_FORCE: f32 = 0.3;
pub const TRAIL_STAMP_BUDGET: u32 = 12;

/// Parameters of the pointer trail field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Texels per side of the square field
    pub size: u32,
    /// Stamp radius as a fraction of the field side
    pub radius: f32,
    /// Frames until a stamp has fully decayed
    pub max_age: u64,
    /// Sub-steps per stamp radius travelled between pointer samples; 0 disables
    pub interpolate: u32,
    /// Peak heat of a single stamp
    pub intensity: f32,
    /// Lower bound of the speed-derived stamp force
    pub min_force: f32,
    /// Exponential smoothing of the force, 0 = none
    pub smoothing: f32,
    /// Most stamps drawn per frame, interpolated ones included
    pub stamp_budget: u32,
}

impl TrailConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.size == 0 {
            return Err(AppError::ConfigError("trail.size must be positive".to_string()));
        }
        if !(self.radius > 0.0 && self.radius <= 1.0) {
            return Err(AppError::ConfigError(format!(
                "trail.radius must be in (0, 1], got {}",
                self.radius
            )));
        }
        if self.max_age == 0 {
            return Err(AppError::ConfigError("trail.max_age must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.intensity) || !(0.0..=1.0).contains(&self.min_force) {
            return Err(AppError::ConfigError(
                "trail.intensity and trail.min_force must be in [0, 1]".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.smoothing) {
            return Err(AppError::ConfigError("trail.smoothing must be in [0, 1)".to_string()));
        }
        if self.stamp_budget == 0 {
            return Err(AppError::ConfigError("trail.stamp_budget must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            size: TRAIL_SIZE,
            radius: TRAIL_RADIUS,
            max_age: TRAIL_MAX_AGE,
            interpolate: TRAIL_INTERPOLATE,
            intensity: TRAIL_INTENSITY,
            min_force: TRAIL_MIN_FORCE,
            smoothing: 0.0,
            stamp_budget: TRAIL_STAMP_BUDGET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotGridConfig {
    /// Cells per side of the dot grid
    pub grid_size: u32,
    /// UV rotation in radians. Wired through to the shader; 0 leaves the grid axis-aligned.
    pub rotation: f32,
    pub trail: TrailConfig,
}

impl Default for DotGridConfig {
    fn default() -> Self {
        Self { grid_size: GRID_SIZE, rotation: ROTATION, trail: TrailConfig::default() }
    }
}

impl DotGridConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AppError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.grid_size == 0 {
            return Err(AppError::ConfigError("grid_size must be positive".to_string()));
        }
        if !self.rotation.is_finite() {
            return Err(AppError::ConfigError("rotation must be finite".to_string()));
        }
        self.trail.validate()
    }
}
