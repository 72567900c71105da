//! Lookup tables mapping linear control steps to CIE 1931 brightness values.

use core::ops;

use crate::curve;

/// A table of `N` precomputed brightness values for the linear inputs
/// `0..=N - 1`.
///
/// Constructed with [`new`](LightnessTable::new) in a `const` or `static`
/// item, the whole table is evaluated by the compiler and placed in the
/// read-only data segment, so it costs no startup time and no writable
/// memory on the target:
///
/// ```
/// use cie1931::LightnessTable;
///
/// // 0..=1000 duty-cycle steps onto an 8-bit PWM compare value.
/// static RAMP: LightnessTable<u8, 1001> = LightnessTable::<u8, 1001>::new(255);
///
/// assert_eq!(RAMP.get(0), 0);
/// assert_eq!(RAMP.get(1000), 255);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LightnessTable<T, const N: usize> {
    entries: [T; N],
}

macro_rules! const_tables {
    ($($ty:ty),* $(,)?) => {$(
        impl<const N: usize> LightnessTable<$ty, N> {
            /// Computes every entry of the table, mapping input `i` to
            /// `round(luminance(i * 100 / (N - 1)) * output_max)`.
            ///
            /// `output_max` is the brightest value the table emits; because
            /// it is typed as the element type, a range the elements cannot
            /// represent is rejected by the compiler rather than silently
            /// truncated.
            pub const fn new(output_max: $ty) -> Self {
                assert!(N > 1, "a lightness table needs at least two entries");

                let mut entries = [0; N];
                let mut i = 0;
                while i < N {
                    let l = i as f64 * 100.0 / (N - 1) as f64;
                    entries[i] = (curve::luminance(l) * output_max as f64 + 0.5) as $ty;
                    i += 1;
                }

                Self { entries }
            }
        }
    )*};
}

// One const constructor per storage width; stable const evaluation cannot
// go through a numeric trait, so the widths are spelled out.
const_tables!(u8, u16, u32, u64);

impl<T, const N: usize> LightnessTable<T, N>
where
    T: Copy + 'static + num_traits::AsPrimitive<f64>,
    f64: num_traits::AsPrimitive<T>,
{
    /// Builds the table at runtime, for element types outside the
    /// fixed-width set covered by the const constructors.
    ///
    /// Produces entries identical to [`new`](LightnessTable::new) where both
    /// exist.
    pub fn build(output_max: T) -> Self {
        use num_traits::AsPrimitive;

        assert!(N > 1, "a lightness table needs at least two entries");

        let scale: f64 = output_max.as_();
        let mut entries = [output_max; N];
        for (i, entry) in entries.iter_mut().enumerate() {
            let l = i as f64 * 100.0 / (N - 1) as f64;
            *entry = libm::round(curve::luminance(l) * scale).as_();
        }

        Self { entries }
    }
}

impl<T, const N: usize> LightnessTable<T, N> {
    /// The number of entries, `InputMax + 1`.
    pub const fn size(&self) -> usize {
        N
    }

    /// The largest valid input step; larger inputs clamp to it.
    pub const fn input_max(&self) -> usize {
        N - 1
    }

    /// All entries in input order, darkest to brightest.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<T: Copy, const N: usize> LightnessTable<T, N> {
    /// Returns the brightness value for a linear input step.
    ///
    /// Out-of-range inputs clamp to the last entry; this never reads out of
    /// bounds and never panics.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.entries[if index < N { index } else { N - 1 }]
    }

    /// The brightest value the table emits.
    #[inline]
    pub fn output_max(&self) -> T {
        self.entries[N - 1]
    }
}

impl<T, const N: usize> ops::Index<usize> for LightnessTable<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[if index < N { index } else { N - 1 }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // spec'd 1000-step ramp for an 8-bit PWM peripheral
    const RAMP_U8: LightnessTable<u8, 1001> = LightnessTable::<u8, 1001>::new(255);

    #[test]
    fn eight_bit_ramp_endpoints() {
        assert_eq!(RAMP_U8.size(), 1001);
        assert_eq!(RAMP_U8.input_max(), 1000);
        assert_eq!(RAMP_U8.get(0), 0);
        assert_eq!(RAMP_U8.get(1000), 255);
        assert_eq!(RAMP_U8.output_max(), 255);
    }

    #[test]
    fn ten_bit_ramp_endpoints() {
        const RAMP: LightnessTable<u16, 513> = LightnessTable::<u16, 513>::new(1023);
        assert_eq!(RAMP.size(), 513);
        assert_eq!(RAMP.get(0), 0);
        assert_eq!(RAMP.get(512), 1023);
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(RAMP_U8.get(1001), RAMP_U8.get(1000));
        assert_eq!(RAMP_U8.get(1500), RAMP_U8.get(1000));
        assert_eq!(RAMP_U8.get(usize::MAX), RAMP_U8.get(1000));
        assert_eq!(RAMP_U8[5000], RAMP_U8[1000]);
    }

    #[test]
    fn entries_never_decrease() {
        let entries = RAMP_U8.as_slice();
        for pair in entries.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn piecewise_segments_meet_without_a_visible_step() {
        const RAMP: LightnessTable<u16, 513> = LightnessTable::<u16, 513>::new(1023);

        // for a 512-step domain, L crosses 8.0 between inputs 40 and 41
        let l_below = 40.0 * 100.0 / 512.0;
        let l_above = 41.0 * 100.0 / 512.0;
        assert!(l_below <= 8.0 && l_above > 8.0);

        let linear = (l_below / curve::LINEAR_DIVISOR * 1023.0 + 0.5) as u16;
        let term = (l_above + 16.0) / 116.0;
        let cubic = (term * term * term * 1023.0 + 0.5) as u16;

        assert_eq!(RAMP.get(40), linear);
        assert_eq!(RAMP.get(41), cubic);
        assert!(RAMP.get(41) - RAMP.get(40) <= 1);
    }

    #[test]
    fn runtime_builder_matches_the_const_tables() {
        assert_eq!(
            LightnessTable::<u8, 1001>::build(255).as_slice(),
            RAMP_U8.as_slice()
        );
        assert_eq!(
            LightnessTable::<u16, 513>::build(1023),
            LightnessTable::<u16, 513>::new(1023)
        );
    }

    #[test]
    fn runtime_builder_covers_other_element_types() {
        let table = LightnessTable::<i32, 101>::build(4095);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(100), 4095);
        for pair in table.as_slice().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(
            LightnessTable::<u8, 1001>::new(255).as_slice(),
            RAMP_U8.as_slice()
        );
    }
}
