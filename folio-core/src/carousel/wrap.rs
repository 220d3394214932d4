//! Wrap correction over the tripled display sequence.

/// Lower edge of the corrected range as a fraction of the total span.
pub const WRAP_LOW: f32 = 0.5;
/// Upper edge, exclusive.
pub const WRAP_HIGH: f32 = 1.5;

/// Shift `offset` by whole multiples of `total_width` so it lands in
/// `[0.5 * total_width, 1.5 * total_width)`.
///
/// An offset of exactly `1.5 * total_width` wraps down to `0.5 * total_width`.
///
/// Offsets already inside the range are returned untouched. A non-positive or
/// non-finite span disables correction entirely, and a non-finite offset is
/// re-centred on `total_width`.
pub fn wrap_correct(offset: f32, total_width: f32) -> f32 {
    if !(total_width.is_finite() && total_width > 0.0) {
        return offset;
    }
    if !offset.is_finite() {
        return total_width;
    }

    let low = total_width * WRAP_LOW;
    let high = total_width * WRAP_HIGH;
    if (low..high).contains(&offset) {
        return offset;
    }

    let wrapped = low + (offset - low).rem_euclid(total_width);
    // rem_euclid may round up to the divisor for values just below `low`
    if wrapped >= high { low } else { wrapped }
}
