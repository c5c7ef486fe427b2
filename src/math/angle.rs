/// Degrees in one radian (`180 / π`).
pub const DEGREES_PER_RADIAN: f64 = 180.0 / core::f64::consts::PI;

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * DEGREES_PER_RADIAN
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / DEGREES_PER_RADIAN
}
