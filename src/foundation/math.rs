/// Truncating `x * y / 255`. Never rounds up, so repeated application cannot brighten.
pub(crate) fn scale_floor_u8(x: u8, y: u8) -> u8 {
    ((u16::from(x) * u16::from(y)) / 255) as u8
}

/// Integer re-range in the style of Arduino `map()`; `in_lo == in_hi` yields `out_lo`.
pub(crate) fn map_range(v: i32, in_lo: i32, in_hi: i32, out_lo: i32, out_hi: i32) -> i32 {
    if in_hi == in_lo {
        return out_lo;
    }
    (v - in_lo) * (out_hi - out_lo) / (in_hi - in_lo) + out_lo
}

pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Convert a unit-range float into an 8-bit value, truncating like a C cast.
pub(crate) fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
