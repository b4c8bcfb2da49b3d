use crate::{
    constants::MIN_SMOOTH_TIME,
    types::{Vec2, Vec3},
};

/// Planar (XZ) part of a world vector.
#[inline]
pub fn to_planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Rebuild a world vector from planar (XZ) components and a vertical component.
#[inline]
pub fn from_planar(xz: Vec2, y: f32) -> Vec3 {
    Vec3::new(xz.x, y, xz.y)
}

/// Clamp the planar magnitude of `xz` to `max_len`, keeping its direction.
#[inline]
pub fn clamp_planar(xz: Vec2, max_len: f32) -> Vec2 {
    let len = xz.norm();
    if len > max_len && len > 0.0 {
        xz * (max_len / len)
    } else {
        xz
    }
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Critically-damped spring toward `target`.
///
/// `smooth_time` is roughly the time to reach the target: smaller values stop faster.
/// `rate` carries the filter's own velocity between calls and must be kept by the caller.
///
/// The exponential is approximated with a cubic, and the result never overshoots `target`.
pub fn smooth_damp(current: Vec3, target: Vec3, rate: &mut Vec3, smooth_time: f32, dt: f32) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*rate + change * omega) * dt;
    *rate = (*rate - temp * omega) * decay;
    let mut output = target + (change + temp) * decay;

    // Prevent overshoot.
    let to_target = target - current;
    let past_target = output - target;
    if to_target.dot(&past_target) > 0.0 {
        output = target;
        *rate = (output - target) / dt;
    }

    output
}
