//! Integer snapping. Everything rounds toward negative infinity.

/// Largest cell magnitude the index works with. Coordinates beyond it are
/// clamped, which leaves every window and brick product far from overflow.
pub const CELL_LIMIT: i64 = 1 << 48;

/// Clamps a world coordinate to `±CELL_LIMIT`. Infinities clamp too.
#[inline]
#[must_use]
pub fn clamp_coord(value: f64) -> f64 {
    let limit = CELL_LIMIT as f64;
    value.clamp(-limit, limit)
}

/// Floors a world position to its integer cell.
///
/// Non-finite components map to 0 and huge ones clamp to `±CELL_LIMIT`.
#[inline]
#[must_use]
pub fn floor_to_cell(position: [f32; 3]) -> [i64; 3] {
    position.map(|p| {
        if p.is_finite() {
            clamp_coord(f64::from(p).floor()) as i64
        } else {
            0
        }
    })
}

/// Largest multiple of `multiple` not greater than `value`.
#[inline]
#[must_use]
pub const fn snap_down(value: i64, multiple: i64) -> i64 {
    value - value.rem_euclid(multiple)
}

/// Floored division.
#[inline]
#[must_use]
pub const fn div_floor(value: i64, divisor: i64) -> i64 {
    value.div_euclid(divisor)
}
