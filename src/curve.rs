//! The CIE 1931 inverse lightness function: perceptual lightness L* to
//! relative luminance Y.

/// Divisor of the linear segment, per the CIE 1931 definition.
pub const LINEAR_DIVISOR: f64 = 903.3;

/// L* value at which the curve switches from the linear to the cubic segment.
pub const LINEAR_CUTOFF: f64 = 8.0;

/// Maps a lightness `l` in `0.0..=100.0` to a luminance in `0.0..=1.0`.
///
/// Usable in constant evaluation, which is how the lookup tables are built.
pub const fn luminance(l: f64) -> f64 {
    if l <= LINEAR_CUTOFF {
        l / LINEAR_DIVISOR
    } else {
        let term = (l + 16.0) / 116.0;
        term * term * term
    }
}
