//! Numeric edge weights.
//!
//! Shortest path, spanning tree and tour algorithms need a little arithmetic
//! on weights: a zero, an "infinity" sentinel for unreached vertices, and an
//! addition that cannot overflow past that sentinel. [`Weight`] captures
//! exactly that and is implemented for the primitive integer and float types.

use std::fmt::Debug;
use std::ops::Add;

/// Arithmetic capability required of weights by the numeric algorithms.
///
/// Weights are expected to be non-negative wherever an algorithm says so
/// (Dijkstra, TSP); this is a documented precondition, not a checked one.
pub trait Weight: Copy + PartialOrd + Debug + Add<Output = Self> {
    /// The additive identity.
    fn zero() -> Self;

    /// Sentinel for "no finite distance": `MAX` for integers, `+inf` for floats.
    fn infinity() -> Self;

    /// Addition that clamps at [`Weight::infinity`] instead of overflowing.
    #[must_use]
    fn saturating_add(self, rhs: Self) -> Self;

    /// Lossy conversion used by time-dependent transforms.
    fn to_f64(self) -> f64;

    /// Lossy conversion back from `f64`; integers round to nearest.
    fn from_f64(value: f64) -> Self;

    /// Returns true if this value is the infinity sentinel (or beyond it).
    fn is_infinity(self) -> bool {
        !(self < Self::infinity())
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn infinity() -> Self {
                    <$t>::MAX
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    // `as` saturates at the integer bounds and maps NaN to 0
                    value.round() as $t
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn infinity() -> Self {
                    <$t>::INFINITY
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);
