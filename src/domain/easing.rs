/// Circular ease-in/ease-out. Flat at both ends, steep through the midpoint,
/// symmetric about (0.5, 0.5). Inputs are clamped to [0, 1].
pub fn ease_in_out_circ(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    if x < 0.5 {
        (1.0 - (1.0 - (2.0 * x).powi(2)).max(0.0).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * x + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
    }
}

/// Remaining heat fraction after `age` of `max_age` frames, 1 at birth and 0 once expired
pub fn decay_factor(age: u64, max_age: u64) -> f32 {
    if max_age == 0 || age >= max_age {
        return 0.0;
    }
    1.0 - ease_in_out_circ(age as f32 / max_age as f32)
}
