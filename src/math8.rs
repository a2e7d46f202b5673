/// Scale an 8-bit value linearly into `0..=level`
///
/// Matches an integer `map(value, 0, 255, 0, level)`: full scale maps to
/// exactly `level` and zero stays zero.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_linear(value: u8, level: u8) -> u8 {
    ((value as u16 * level as u16) / 255) as u8
}

/// Truncating mean of three 8-bit values
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn mean3(a: u8, b: u8, c: u8) -> u8 {
    ((a as u16 + b as u16 + c as u16) / 3) as u8
}

/// Invert an 8-bit duty cycle
#[inline]
pub const fn invert8(value: u8) -> u8 {
    255 - value
}
