// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Integral Types
//!
//! The `Integral` trait is the compile-time constraint behind every range in
//! this crate. It is implemented for all twelve primitive integers and bundles
//! the handful of wide, overflow-free operations needed to reason about the
//! distance between two values and to move a value by such a distance.
//!
//! All distances are measured in `u128`, which is wide enough to hold
//! `|b - a|` for any pair of values of any primitive integer, including
//! `i128::MIN` and `i128::MAX`.

use num_traits::{PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// The direction in which a range walks from its start to its stop.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::integral::Direction;
///
/// assert_eq!(Direction::between(0, 10), Direction::Ascending);
/// assert_eq!(Direction::between(10, 0), Direction::Descending);
/// assert_eq!(Direction::between(3, 3), Direction::Empty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Direction {
    /// `start < stop`; values grow.
    Ascending,
    /// `start > stop`; values shrink.
    Descending,
    /// `start == stop`; nothing is produced.
    Empty,
}

impl Direction {
    /// Derives the direction implied by walking from `start` to `stop`.
    #[inline]
    pub fn between<T>(start: T, stop: T) -> Self
    where
        T: PartialOrd,
    {
        if start < stop {
            Self::Ascending
        } else if start > stop {
            Self::Descending
        } else {
            Self::Empty
        }
    }

    /// Returns `1`, `-1` or `0`, matching the sign a step must have.
    #[inline]
    pub const fn signum(self) -> i8 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
            Self::Empty => 0,
        }
    }

    /// Returns `true` if a step with the given sign moves in this direction.
    ///
    /// An empty direction admits every step, since such a range never steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::num::integral::Direction;
    ///
    /// assert!(Direction::Ascending.admits(3));
    /// assert!(!Direction::Ascending.admits(0));
    /// assert!(!Direction::Descending.admits(2));
    /// assert!(Direction::Empty.admits(-7));
    /// ```
    #[inline]
    pub fn admits<S>(self, step: S) -> bool
    where
        S: Signed,
    {
        match self {
            Self::Ascending => step.is_positive(),
            Self::Descending => step.is_negative(),
            Self::Empty => true,
        }
    }

    /// Returns `true` for [`Direction::Empty`].
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
            Self::Empty => write!(f, "empty"),
        }
    }
}

/// A primitive integer type that can be used as the element of a range.
///
/// The associated `Step` type is the signed integer of the same width, so
/// an `IntegralRange<u8>` steps by `i8` values and an `IntegralRange<i64>`
/// by `i64` values.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::integral::{Direction, Integral};
///
/// assert_eq!(i8::MIN.distance(i8::MAX), 255);
/// assert_eq!(<u8 as Integral>::step_magnitude(i8::MIN), 128);
/// assert_eq!(250u8.offset(5, Direction::Ascending), 255);
/// assert_eq!((-100i8).offset(200, Direction::Ascending), 100);
/// ```
pub trait Integral: PrimInt + Hash + Debug + Display + Send + Sync {
    /// The signed step type matching the width of `Self`.
    type Step: PrimInt + Signed + Hash + Debug + Display + Send + Sync;

    /// Returns `|other - self|` without overflowing.
    fn distance(self, other: Self) -> u128;

    /// Returns the unsigned magnitude of `step`, including for `Step::MIN`.
    fn step_magnitude(step: Self::Step) -> u128;

    /// Moves `self` by `distance` in `direction`.
    ///
    /// The result is exact whenever it is representable in `Self`; callers
    /// only ever move to values that lie between two valid endpoints.
    /// An empty direction leaves `self` unchanged.
    fn offset(self, distance: u128, direction: Direction) -> Self;
}

macro_rules! impl_integral_for {
    ($t:ty, $step:ty) => {
        impl Integral for $t {
            type Step = $step;

            #[inline(always)]
            fn distance(self, other: Self) -> u128 {
                self.abs_diff(other) as u128
            }

            #[inline(always)]
            fn step_magnitude(step: $step) -> u128 {
                step.unsigned_abs() as u128
            }

            #[inline(always)]
            fn offset(self, distance: u128, direction: Direction) -> Self {
                // Truncation is exact modulo 2^BITS, and the true result is in range.
                let delta = distance as $t;
                match direction {
                    Direction::Ascending => self.wrapping_add(delta),
                    Direction::Descending => self.wrapping_sub(delta),
                    Direction::Empty => self,
                }
            }
        }
    };
}

impl_integral_for!(i8, i8);
impl_integral_for!(u8, i8);
impl_integral_for!(i16, i16);
impl_integral_for!(u16, i16);
impl_integral_for!(i32, i32);
impl_integral_for!(u32, i32);
impl_integral_for!(i64, i64);
impl_integral_for!(u64, i64);
impl_integral_for!(i128, i128);
impl_integral_for!(u128, i128);
impl_integral_for!(isize, isize);
impl_integral_for!(usize, isize);
