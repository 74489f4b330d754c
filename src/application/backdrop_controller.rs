//! Frame-driven state of the dot-grid backdrop.
//!
//! The controller owns the trail field and the active palette and turns
//! `tick(elapsed)` calls into [`FrameUpdate`]s. It knows nothing about GPUs
//! or the DOM, so the whole per-frame pipeline can be driven from tests.
//!
//! Pointer events only queue samples. The queue is drained on the next tick,
//! so the cost of a burst lands once per frame and stays within the trail's
//! stamp budget.

use std::collections::VecDeque;

use crate::domain::{
    config::DotGridConfig,
    dot_grid::{DotGrid, cover_uv},
    errors::AppResult,
    frame::FrameUniforms,
    logging::LogComponent,
    theme::{Theme, ThemePalette},
    trail::{TrailField, TrailSample, in_unit_square},
};
use crate::log_debug;

/// Pointer input as seen by the render surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Pointer position relative to the surface's top-left corner, plus the
    /// surface size, both in CSS pixels
    Moved { offset: [f32; 2], surface: [f32; 2] },
    Left,
}

/// Output of one tick
#[derive(Debug)]
pub struct FrameUpdate<'a> {
    pub frame: u64,
    pub uniforms: FrameUniforms,
    /// R8 trail texels, row 0 at the bottom; `None` when unchanged since the last tick
    pub trail: Option<&'a [u8]>,
    pub trail_size: u32,
    /// Trail stamps drawn for this frame
    pub stamps: usize,
}

pub struct BackdropController {
    config: DotGridConfig,
    theme: Theme,
    palette: ThemePalette,
    resolution: [f32; 2],
    trail: TrailField,
    pending: VecDeque<TrailSample>,
    frame: u64,
}

impl BackdropController {
    /// Fails with a config error if `config` does not validate.
    pub fn new(config: DotGridConfig, theme: Theme) -> AppResult<Self> {
        config.validate()?;
        let trail = TrailField::new(config.trail.clone())?;
        let pending = VecDeque::with_capacity(config.trail.stamp_budget as usize);
        Ok(Self {
            config,
            theme,
            palette: theme.palette(),
            resolution: [1.0, 1.0],
            trail,
            pending,
            frame: 0,
        })
    }

    pub fn config(&self) -> &DotGridConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> ThemePalette {
        self.palette
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn resolution(&self) -> [f32; 2] {
        self.resolution
    }

    pub fn trail(&self) -> &TrailField {
        &self.trail
    }

    /// Samples waiting for the next tick
    pub fn pending_samples(&self) -> usize {
        self.pending.len()
    }

    pub fn grid(&self) -> DotGrid {
        DotGrid::new(self.resolution, self.config.grid_size, self.config.rotation)
    }

    /// Swap the palette for `theme`. The grid and the trail are kept.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        self.palette = theme.palette();
        log_debug!(LogComponent::Application("Backdrop"), "palette switched to {}", theme);
    }

    /// Track the surface size in physical pixels. Returns `true` if it changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let next = [width as f32, height as f32];
        if next == self.resolution {
            return false;
        }
        self.resolution = next;
        true
    }

    /// Queue one pointer event for the next tick. Returns `true` if a
    /// position was accepted.
    pub fn pointer(&mut self, input: PointerInput) -> bool {
        match input {
            PointerInput::Left => {
                if !matches!(self.pending.back(), Some(TrailSample::Break)) {
                    self.pending.push_back(TrailSample::Break);
                }
                false
            }
            PointerInput::Moved { offset, surface } => {
                if surface[0] <= 0.0 || surface[1] <= 0.0 {
                    return false;
                }
                let screen_uv = [offset[0] / surface[0], 1.0 - offset[1] / surface[1]];
                if !in_unit_square(screen_uv) {
                    return false;
                }
                self.enqueue(cover_uv(screen_uv, surface));
                true
            }
        }
    }

    /// Keep at most `stamp_budget` positions queued, dropping the oldest
    fn enqueue(&mut self, uv: [f32; 2]) {
        let capacity = self.config.trail.stamp_budget as usize;
        let queued = self.pending.iter().filter(|s| matches!(s, TrailSample::At(_))).count();
        if queued >= capacity {
            if let Some(oldest) = self.pending.iter().position(|s| matches!(s, TrailSample::At(_))) {
                self.pending.remove(oldest);
            }
            while self.pending.len() > 1
                && matches!(self.pending[0], TrailSample::Break)
                && matches!(self.pending[1], TrailSample::Break)
            {
                self.pending.pop_front();
            }
        }
        self.pending.push_back(TrailSample::At(uv));
    }

    /// Advance one frame. `elapsed_secs` is the time since mount and only
    /// drives the pulse; trail ageing counts frames.
    pub fn tick(&mut self, elapsed_secs: f64) -> FrameUpdate<'_> {
        self.frame += 1;
        let uniforms = FrameUniforms::new(
            self.resolution,
            elapsed_secs as f32,
            self.config.rotation,
            self.config.grid_size,
            &self.palette,
        );
        let stamps = self.trail.apply(self.pending.make_contiguous(), self.frame);
        self.pending.clear();
        let trail_size = self.trail.size();
        let trail = self.trail.pixels_at(self.frame);
        FrameUpdate { frame: self.frame, uniforms, trail, trail_size, stamps }
    }
}
