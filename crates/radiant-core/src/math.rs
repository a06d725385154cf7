//! Polar helpers for radial layouts.
//!
//! Chart-local coordinates have the y axis pointing up. Angles are in
//! degrees, measured from the up direction and increasing clockwise, so
//! 0° is straight up and 90° points along +x.

pub use glam::Vec2;

/// Point at `radius` from `center` in the direction of `angle` degrees.
#[inline]
pub fn polar_position(center: Vec2, angle: f32, radius: f32) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(center.x + radius * rad.sin(), center.y + radius * rad.cos())
}

/// Bearing of `point` seen from `center`, in `[0, 360)` degrees.
///
/// Returns 0 when the two points coincide.
pub fn bearing(center: Vec2, point: Vec2) -> f32 {
    let dir = point - center;
    if dir == Vec2::ZERO {
        return 0.0;
    }
    let angle = dir.x.atan2(dir.y).to_degrees();
    if angle < 0.0 { angle + 360.0 } else { angle }
}

/// Unsigned angle between two vectors in `[0, 180]` degrees.
///
/// A zero-length vector yields 0.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let denom = a.length() * b.length();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Resolve a length that is either a fraction of `reference` (values in
/// `[0, 1]`) or an absolute size (anything larger).
#[inline]
pub fn actual_length(value: f32, reference: f32) -> f32 {
    if value <= 1.0 { value * reference } else { value }
}
