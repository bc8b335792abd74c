/// Round to the nearest integer, ties toward positive infinity (2.5 -> 3, -2.5 -> -2).
///
/// This is the rounding every published figure goes through, so golden values stay
/// stable across platforms. `f64::round` would send -2.5 to -3.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one decimal place using [`round_half_up`].
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}
