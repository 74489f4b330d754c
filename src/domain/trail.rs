//! Pointer trail accumulator.
//!
//! A fixed `size × size` grid of heat stamps addressed in UV space, with
//! `(0, 0)` at the bottom-left. Each texel remembers the strength it was
//! stamped with and the frame it was stamped on; the decayed value is worked
//! out from the caller's frame clock whenever the field is read, so nothing
//! ticks inside the field itself. Row `r` of [`TrailField::pixels_at`] holds
//! `uv.y ∈ [r/size, (r+1)/size)`, which is the row a texture sample at
//! `v = uv.y` lands on.

use crate::domain::config::TrailConfig;
use crate::domain::easing::decay_factor;
use crate::domain::errors::AppResult;

/// Upper bound on interpolated stamps inserted for one pointer sample
pub const MAX_SUBSTEPS: usize = 32;

/// Pointer sample queued for the next frame, in trail UV space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrailSample {
    At([f32; 2]),
    /// The pointer left the surface; the next sample starts a new stroke
    Break,
}

#[derive(Debug, Clone, Copy)]
struct Stamp {
    strength: f32,
    born: u64,
}

pub struct TrailField {
    config: TrailConfig,
    stamps: Vec<Option<Stamp>>,
    /// Indices of texels holding a live stamp
    active: Vec<usize>,
    pixels: Vec<u8>,
    last_uv: Option<[f32; 2]>,
    force: f32,
    dirty: bool,
}

pub fn in_unit_square(uv: [f32; 2]) -> bool {
    uv.iter().all(|c| c.is_finite() && (0.0..=1.0).contains(c))
}

impl TrailField {
    /// Build an empty field. Fails if `config` does not validate.
    pub fn new(config: TrailConfig) -> AppResult<Self> {
        config.validate()?;
        let texels = (config.size as usize) * (config.size as usize);
        let force = config.min_force;
        Ok(Self {
            config,
            stamps: vec![None; texels],
            active: Vec::new(),
            pixels: vec![0; texels],
            last_uv: None,
            force,
            dirty: false,
        })
    }

    pub fn size(&self) -> u32 {
        self.config.size
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn active_texels(&self) -> usize {
        self.active.len()
    }

    /// Record a pointer sample at `uv` on frame `now`.
    ///
    /// Samples outside `[0, 1]²` are ignored and return `false`.
    pub fn deposit(&mut self, uv: [f32; 2], now: u64) -> bool {
        self.deposit_limited(uv, now, MAX_SUBSTEPS) > 0
    }

    /// Draw the samples queued since the last frame.
    ///
    /// At most `config.stamp_budget` stamps are drawn. The budget is shared
    /// across the queued samples, so a burst thins its interpolation instead
    /// of dropping the newest positions. Returns the number of stamps drawn.
    pub fn apply(&mut self, samples: &[TrailSample], now: u64) -> usize {
        let mut budget = self.config.stamp_budget as usize;
        let mut drawn = 0;
        for (i, sample) in samples.iter().enumerate() {
            match *sample {
                TrailSample::Break => self.pointer_left(),
                TrailSample::At(uv) => {
                    if budget == 0 {
                        break;
                    }
                    let waiting = samples[i..].iter().filter(|s| matches!(s, TrailSample::At(_))).count();
                    let share = (budget / waiting).max(1);
                    let used = self.deposit_limited(uv, now, share);
                    budget = budget.saturating_sub(used);
                    drawn += used;
                }
            }
        }
        drawn
    }

    /// Stamp `uv` plus at most `limit - 1` interpolated stamps behind it
    fn deposit_limited(&mut self, uv: [f32; 2], now: u64, limit: usize) -> usize {
        if !in_unit_square(uv) || limit == 0 {
            return 0;
        }

        let mut drawn = 0;
        if let Some(last) = self.last_uv {
            let dx = uv[0] - last[0];
            let dy = uv[1] - last[1];
            let dd = dx * dx + dy * dy;
            let measured = (dd * 10_000.0).clamp(self.config.min_force, 1.0);
            let s = self.config.smoothing;
            self.force = self.force * s + measured * (1.0 - s);

            let steps = self.substeps(dd.sqrt()).min(limit);
            for i in 1..steps {
                let t = i as f32 / steps as f32;
                self.stamp([last[0] + dx * t, last[1] + dy * t], now);
                drawn += 1;
            }
        }

        self.stamp(uv, now);
        self.last_uv = Some(uv);
        drawn + 1
    }

    /// Forget the previous sample so the next one does not draw a streak
    pub fn pointer_left(&mut self) {
        self.last_uv = None;
    }

    fn substeps(&self, distance: f32) -> usize {
        if self.config.interpolate == 0 {
            return 1;
        }
        let spacing = self.config.radius * 0.5 / self.config.interpolate as f32;
        ((distance / spacing).ceil() as usize).clamp(1, MAX_SUBSTEPS)
    }

    fn stamp(&mut self, center: [f32; 2], now: u64) {
        let size = self.config.size as f32;
        let max_age = self.config.max_age;
        let strength = self.config.intensity * self.force;
        let cx = center[0] * size;
        let cy = center[1] * size;
        let r = self.config.radius * size;
        let inner = r * 0.25;

        let last = self.config.size as i64 - 1;
        let x0 = ((cx - r).floor() as i64).clamp(0, last);
        let x1 = ((cx + r).ceil() as i64).clamp(0, last);
        let y0 = ((cy - r).floor() as i64).clamp(0, last);
        let y1 = ((cy + r).ceil() as i64).clamp(0, last);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let px = x as f32 + 0.5 - cx;
                let py = y as f32 + 0.5 - cy;
                let d = (px * px + py * py).sqrt();
                if d >= r {
                    continue;
                }
                let falloff = if d <= inner { 1.0 } else { 1.0 - (d - inner) / (r - inner) };
                let value = strength * falloff;
                if value <= 0.0 {
                    continue;
                }

                let idx = y as usize * self.config.size as usize + x as usize;
                let current = heat_of(self.stamps[idx], now, max_age);
                // screen blend
                let blended = 1.0 - (1.0 - current) * (1.0 - value);
                if self.stamps[idx].is_none() {
                    self.active.push(idx);
                }
                self.stamps[idx] = Some(Stamp { strength: blended, born: now });
            }
        }
        self.dirty = true;
    }

    /// Decayed heat of texel `(x, y)` as seen on frame `now`
    pub fn heat(&self, x: u32, y: u32, now: u64) -> f32 {
        if x >= self.config.size || y >= self.config.size {
            return 0.0;
        }
        let idx = y as usize * self.config.size as usize + x as usize;
        heat_of(self.stamps[idx], now, self.config.max_age)
    }

    /// Nearest-texel lookup in UV space
    pub fn sample(&self, uv: [f32; 2], now: u64) -> f32 {
        let size = self.config.size;
        let to_texel = |c: f32| ((c.clamp(0.0, 1.0) * size as f32) as u32).min(size - 1);
        self.heat(to_texel(uv[0]), to_texel(uv[1]), now)
    }

    /// Bring the R8 pixel buffer up to frame `now`.
    ///
    /// Returns `None` when nothing changed since the previous call, so the
    /// caller can skip the texture upload. Expired texels are zeroed and
    /// dropped from the active set.
    pub fn pixels_at(&mut self, now: u64) -> Option<&[u8]> {
        if !self.dirty && self.active.is_empty() {
            return None;
        }

        let Self { config, stamps, active, pixels, .. } = self;
        let max_age = config.max_age;
        active.retain(|&idx| {
            let heat = heat_of(stamps[idx], now, max_age);
            pixels[idx] = (heat.clamp(0.0, 1.0) * 255.0).round() as u8;
            if heat > 0.0 {
                true
            } else {
                stamps[idx] = None;
                false
            }
        });
        self.dirty = false;

        Some(&self.pixels)
    }
}

fn heat_of(stamp: Option<Stamp>, now: u64, max_age: u64) -> f32 {
    stamp
        .map(|s| s.strength * decay_factor(now.saturating_sub(s.born), max_age))
        .unwrap_or(0.0)
}
