//! Numeric edge weights.
//!
//! Shortest-path search and path ranking only need three things from an edge weight:
//! a zero, a way to add two weights, and a total order. The [`Weight`] trait captures
//! exactly that, plus a validity check that rejects values Dijkstra cannot handle
//! (negative numbers and NaN).
//!
//! Implementations are provided for all primitive integer and floating point types.
//! Integer accumulation is checked: a sum past the type's maximum yields `None`, and
//! callers report it as [`Error::WeightOverflow`](crate::Error::WeightOverflow) rather
//! than comparing a clamped value. Floats are ordered with [`f64::total_cmp`] semantics
//! so that ranking never has to deal with incomparable values.

use std::{cmp::Ordering, fmt};

/// A non-negative additive edge weight.
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::Weight;
///
/// assert!(5u32.is_valid());
/// assert!(!(-5i64).is_valid());
/// assert!(!f64::NAN.is_valid());
///
/// assert_eq!(250u8.checked_accumulate(5), Some(u8::MAX));
/// assert_eq!(u8::MAX.checked_accumulate(1), None);
/// assert_eq!(2.5f64.checked_accumulate(0.5), Some(3.0));
/// ```
pub trait Weight: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync {
    /// The additive identity, the weight of a single-node path.
    const ZERO: Self;

    /// Returns `true` if this weight may appear on an edge.
    ///
    /// Negative values and NaN are invalid.
    fn is_valid(self) -> bool;

    /// Adds two weights, returning `None` if the sum is not representable.
    ///
    /// Floating point sums never fail; they grow towards infinity instead.
    #[must_use]
    fn checked_accumulate(self, other: Self) -> Option<Self>;

    /// Total order over weights, used by the Dijkstra frontier and the ranker.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_unsigned_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn is_valid(self) -> bool {
                    true
                }

                #[inline]
                fn checked_accumulate(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_signed_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn is_valid(self) -> bool {
                    self >= 0
                }

                #[inline]
                fn checked_accumulate(self, other: Self) -> Option<Self> {
                    self.checked_add(other)
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn is_valid(self) -> bool {
                    // NaN fails this comparison as well
                    self >= 0.0
                }

                #[inline]
                fn checked_accumulate(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);
impl_signed_weight!(i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// Sums a sequence of weights starting from [`Weight::ZERO`], `None` on overflow.
pub(crate) fn total<W: Weight>(weights: impl IntoIterator<Item = W>) -> Option<W> {
    weights
        .into_iter()
        .try_fold(W::ZERO, W::checked_accumulate)
}
