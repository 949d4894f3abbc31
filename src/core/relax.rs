use glam::Vec3;

/// Move `current` a fixed fraction `rate` of the remaining distance toward
/// `target`. With `rate` in (0, 1) repeated application converges
/// monotonically and never overshoots.
#[inline]
pub fn relax(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

#[inline]
pub fn lerp_color(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    from + (to - from) * t
}
