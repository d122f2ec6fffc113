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

use crate::{
    num::integral::{Direction, Integral},
    range::{cursor::RangeCursor, error::StepDirectionError, iter::IntegralRangeIter},
};
use num_traits::{One, Zero};

/// A lazy sequence of integers from `start` (inclusive) towards `stop`
/// (exclusive), advancing by a signed `step`.
///
/// The range is immutable once built and stores its derived `size`
/// (`|stop - start|`) and `length` (number of produced values) in `u128`,
/// so both are exact even when the bounds sit at the extremes of `T`.
///
/// # Invariants
///
/// - `start == stop` implies `step == 0`, `size == 0` and `length == 0`.
/// - `start < stop` implies `step > 0`; `start > stop` implies `step < 0`.
/// - `length == ceil(size / |step|)` for every non-empty range.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::integral_range::IntegralRange;
///
/// let range = IntegralRange::new(0, 7, 2).unwrap();
/// assert_eq!(range.size(), 7);
/// assert_eq!(range.length(), 4);
/// assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegralRange<T>
where
    T: Integral,
{
    start: T,
    stop: T,
    step: T::Step,
    size: u128,
    length: u128,
}

impl<T> IntegralRange<T>
where
    T: Integral,
{
    /// Creates the range `[0, stop)`, stepping by `+1` or `-1` towards `stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// assert_eq!(IntegralRange::to(5).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    /// assert_eq!(IntegralRange::to(-3).iter().collect::<Vec<_>>(), vec![0, -1, -2]);
    /// assert!(IntegralRange::to(0u16).is_empty());
    /// ```
    #[inline]
    pub fn to(stop: T) -> Self {
        Self::between(T::zero(), stop)
    }

    /// Creates the range `[0, stop)` with an explicit step.
    ///
    /// # Errors
    ///
    /// Returns a [`StepDirectionError`] if `stop != 0` and the sign of `step`
    /// does not match the sign of `stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::to_with_step(-9, -3).unwrap();
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, -3, -6]);
    /// assert!(IntegralRange::to_with_step(9, -3).is_err());
    /// ```
    #[inline]
    pub fn to_with_step(stop: T, step: T::Step) -> Result<Self, StepDirectionError<T>> {
        Self::new(T::zero(), stop, step)
    }

    /// Creates the range `[start, stop)`, stepping by `+1` if `start < stop`,
    /// by `-1` if `start > stop`, and not at all if they are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let up = IntegralRange::between(2, 5);
    /// assert_eq!(up.step(), 1);
    /// assert_eq!(up.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    ///
    /// let down = IntegralRange::between(5u32, 2);
    /// assert_eq!(down.step(), -1);
    /// assert_eq!(down.iter().collect::<Vec<_>>(), vec![5, 4, 3]);
    /// ```
    #[inline]
    pub fn between(start: T, stop: T) -> Self {
        let direction = Direction::between(start, stop);
        let step = match direction {
            Direction::Ascending => T::Step::one(),
            Direction::Descending => -T::Step::one(),
            Direction::Empty => T::Step::zero(),
        };
        Self::assemble(start, stop, step, direction)
    }

    /// Creates the range `[start, stop)` advancing by `step`.
    ///
    /// If `start == stop` the range is empty and `step` is replaced by zero,
    /// whatever its value.
    ///
    /// # Errors
    ///
    /// Returns a [`StepDirectionError`] if `start != stop` and `step` does not
    /// point from `start` towards `stop`: it must be positive when
    /// `start < stop` and negative when `start > stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::new(10, 0, -2).unwrap();
    /// assert_eq!(range.iter().collect::<Vec<_>>(), vec![10, 8, 6, 4, 2]);
    ///
    /// assert!(IntegralRange::new(0, 10, 0).is_err());
    /// assert!(IntegralRange::new(10, 0, 2).is_err());
    /// assert_eq!(IntegralRange::new(4, 4, -7).unwrap().step(), 0);
    /// ```
    #[inline]
    pub fn new(start: T, stop: T, step: T::Step) -> Result<Self, StepDirectionError<T>> {
        let direction = Direction::between(start, stop);
        if !direction.admits(step) {
            return Err(StepDirectionError::new(start, stop, step));
        }
        Ok(Self::assemble(start, stop, step, direction))
    }

    /// Creates a range without validating the step direction in release builds.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `step` does not point from `start` towards
    /// `stop`. In release builds a zero step with `start != stop` panics on
    /// the length computation, and any other violation yields a range whose
    /// contents are unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::new_unchecked(1, 10, 4);
    /// assert_eq!(range.length(), 3);
    /// ```
    #[inline]
    pub fn new_unchecked(start: T, stop: T, step: T::Step) -> Self {
        let direction = Direction::between(start, stop);
        debug_assert!(
            direction.admits(step),
            "Invalid range: step must point from start towards stop"
        );
        Self::assemble(start, stop, step, direction)
    }

    #[inline(always)]
    fn assemble(start: T, stop: T, step: T::Step, direction: Direction) -> Self {
        if direction.is_empty() {
            return Self {
                start,
                stop,
                step: T::Step::zero(),
                size: 0,
                length: 0,
            };
        }

        let size = start.distance(stop);
        let length = size.div_ceil(T::step_magnitude(step));
        Self {
            start,
            stop,
            step,
            size,
            length,
        }
    }

    /// Returns the inclusive start of the range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive stop of the range.
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Returns the step; zero for an empty range.
    #[inline]
    pub fn step(&self) -> T::Step {
        self.step
    }

    /// Returns `|stop - start|`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// assert_eq!(IntegralRange::between(i8::MIN, i8::MAX).size(), 255);
    /// ```
    #[inline]
    pub fn size(&self) -> u128 {
        self.size
    }

    /// Returns the number of values the range produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// assert_eq!(IntegralRange::new(0, 7, 2).unwrap().length(), 4);
    /// assert_eq!(IntegralRange::new(0, 8, 2).unwrap().length(), 4);
    /// ```
    #[inline]
    pub fn length(&self) -> u128 {
        self.length
    }

    /// Returns `true` if the range produces no values (`start == stop`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the direction in which the range walks.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::between(self.start, self.stop)
    }

    /// Returns the value at position `index`, or `None` past the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::new(10, 0, -3).unwrap();
    /// assert_eq!(range.get(0), Some(10));
    /// assert_eq!(range.get(3), Some(1));
    /// assert_eq!(range.get(4), None);
    /// ```
    #[inline]
    pub fn get(&self, index: u128) -> Option<T> {
        if index < self.length {
            let distance = index * T::step_magnitude(self.step);
            Some(self.start.offset(distance, self.direction()))
        } else {
            None
        }
    }

    /// Returns the first value, or `None` if the range is empty.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    /// Returns the last value, or `None` if the range is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// assert_eq!(IntegralRange::new(0, 7, 2).unwrap().last(), Some(6));
    /// assert_eq!(IntegralRange::to(0).last(), None);
    /// ```
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.length.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns `true` if iterating the range would produce `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::new(1, 10, 3).unwrap(); // 1, 4, 7
    /// assert!(range.contains(4));
    /// assert!(!range.contains(5));
    /// assert!(!range.contains(10));
    /// ```
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        let within = match self.direction() {
            Direction::Ascending => self.start <= value && value < self.stop,
            Direction::Descending => self.stop < value && value <= self.start,
            Direction::Empty => false,
        };
        within && self.start.distance(value) % T::step_magnitude(self.step) == 0
    }

    /// Returns a cursor positioned at `start`.
    ///
    /// Every call starts over from `start`; the range itself is not advanced.
    #[inline]
    pub fn begin(&self) -> RangeCursor<T> {
        RangeCursor::new(self.start, self.stop, self.step)
    }

    /// Returns the sentinel cursor positioned at `stop`.
    ///
    /// For an empty range `begin() == end()`.
    #[inline]
    pub fn end(&self) -> RangeCursor<T> {
        RangeCursor::new(self.stop, self.stop, self.step)
    }

    /// Creates an iterator over the values of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::to(3u8);
    /// let points: Vec<_> = range.iter().collect();
    /// assert_eq!(points, vec![0, 1, 2]);
    /// // Ranges are `Copy`; iterating again restarts from `start`.
    /// assert_eq!(range.iter().next(), Some(0));
    /// ```
    #[inline]
    pub fn iter(&self) -> IntegralRangeIter<T> {
        IntegralRangeIter::new(
            self.start,
            self.direction(),
            T::step_magnitude(self.step),
            self.length,
        )
    }
}

impl<T> Default for IntegralRange<T>
where
    T: Integral,
{
    #[inline]
    fn default() -> Self {
        Self::to(T::zero())
    }
}

impl<T> std::fmt::Debug for IntegralRange<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegralRange")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .field("size", &self.size)
            .field("length", &self.length)
            .finish()
    }
}

impl<T> std::fmt::Display for IntegralRange<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) by {}", self.start, self.stop, self.step)
    }
}

impl<T> IntoIterator for IntegralRange<T>
where
    T: Integral,
{
    type Item = T;
    type IntoIter = IntegralRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &IntegralRange<T>
where
    T: Integral,
{
    type Item = T;
    type IntoIter = IntegralRangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<(T, T)> for IntegralRange<T>
where
    T: Integral,
{
    #[inline]
    fn from((start, stop): (T, T)) -> Self {
        Self::between(start, stop)
    }
}

impl<T> From<std::ops::Range<T>> for IntegralRange<T>
where
    T: Integral,
{
    /// Converts `start..end` into the range `[start, end)`.
    ///
    /// Unlike `std::ops::Range`, a reversed pair such as `5..2` walks
    /// downwards instead of being empty.
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::between(range.start, range.end)
    }
}

impl<T> TryFrom<(T, T, T::Step)> for IntegralRange<T>
where
    T: Integral,
{
    type Error = StepDirectionError<T>;

    #[inline]
    fn try_from((start, stop, step): (T, T, T::Step)) -> Result<Self, Self::Error> {
        Self::new(start, stop, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Straightforward counting loop in a wider type, used as ground truth.
    fn reference(start: i64, stop: i64, step: i64) -> Vec<i64> {
        let mut out = Vec::new();
        let mut value = start;
        if step > 0 {
            while value < stop {
                out.push(value);
                value += step;
            }
        } else if step < 0 {
            while value > stop {
                out.push(value);
                value += step;
            }
        }
        out
    }

    fn cursor_walk<T: Integral>(range: &IntegralRange<T>) -> Vec<T> {
        let (mut cursor, end) = (range.begin(), range.end());
        let mut out = Vec::new();
        while cursor != end {
            out.push(cursor.get());
            cursor.advance();
        }
        out
    }

    #[test]
    fn test_to_is_zero_based() {
        let range = IntegralRange::to(5);
        assert_eq!(range, IntegralRange::new(0, 5, 1).unwrap());
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(range.size(), 5);
        assert_eq!(range.length(), 5);
    }

    #[test]
    fn test_descending_with_step() {
        let range = IntegralRange::new(10, 0, -2).unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![10, 8, 6, 4, 2]);
        assert_eq!(range.size(), 10);
        assert_eq!(range.length(), 5);
    }

    #[test]
    fn test_uneven_step_uses_ceiling() {
        let range = IntegralRange::new(0, 7, 2).unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 2, 4, 6]);
        assert_eq!(range.length(), 4);
    }

    #[test]
    fn test_empty_forces_zero_step() {
        for step in [-5, 0, 5] {
            let range = IntegralRange::new(3, 3, step).unwrap();
            assert_eq!(range.step(), 0);
            assert_eq!(range.size(), 0);
            assert_eq!(range.length(), 0);
            assert!(range.is_empty());
            assert_eq!(range.direction(), Direction::Empty);
            assert_eq!(range.begin(), range.end());
            assert_eq!(range.iter().next(), None);
            assert_eq!(range.first(), None);
            assert_eq!(range.last(), None);
        }
    }

    #[test]
    fn test_between_derives_unit_step() {
        assert_eq!(IntegralRange::between(0, 3).step(), 1);
        assert_eq!(IntegralRange::between(3, 0).step(), -1);
        assert_eq!(IntegralRange::between(3, 3).step(), 0);
        assert_eq!(IntegralRange::to(-4i16).step(), -1);
    }

    #[test]
    fn test_rejects_step_against_direction() {
        let err = IntegralRange::new(0, 10, -1).unwrap_err();
        assert_eq!(err.start(), 0);
        assert_eq!(err.stop(), 10);
        assert_eq!(err.step(), -1);
        assert_eq!(err.expected(), Direction::Ascending);

        assert!(IntegralRange::new(0, 10, 0).is_err());
        assert!(IntegralRange::new(10, 0, 0).is_err());
        assert!(IntegralRange::new(10, 0, 1).is_err());
        assert!(IntegralRange::new(0u8, 255, -1).is_err());
        assert!(IntegralRange::to_with_step(-1i32, 1).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid range")]
    fn test_new_unchecked_panics_in_debug() {
        let _ = IntegralRange::new_unchecked(0, 10, -1);
    }

    #[test]
    fn test_full_width_signed() {
        let range = IntegralRange::between(i8::MIN, i8::MAX);
        assert_eq!(range.size(), 255);
        assert_eq!(range.length(), 255);
        assert_eq!(range.first(), Some(i8::MIN));
        assert_eq!(range.last(), Some(i8::MAX - 1));
        assert_eq!(range.iter().count(), 255);
        assert_eq!(cursor_walk(&range).len(), 255);
    }

    #[test]
    fn test_full_width_step_min() {
        let range = IntegralRange::new(i8::MAX, i8::MIN, i8::MIN).unwrap();
        assert_eq!(range.size(), 255);
        assert_eq!(range.length(), 2);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![127, -1]);
        assert_eq!(cursor_walk(&range), vec![127, -1]);
    }

    #[test]
    fn test_full_width_i128() {
        let range = IntegralRange::new(i128::MIN, i128::MAX, i128::MAX).unwrap();
        assert_eq!(range.size(), u128::MAX);
        assert_eq!(range.length(), 3);
        assert_eq!(
            range.iter().collect::<Vec<_>>(),
            vec![i128::MIN, -1, i128::MAX - 1]
        );
        assert_eq!(cursor_walk(&range), vec![i128::MIN, -1, i128::MAX - 1]);
    }

    #[test]
    fn test_full_width_u128() {
        let range = IntegralRange::to(u128::MAX);
        assert_eq!(range.size(), u128::MAX);
        assert_eq!(range.length(), u128::MAX);
        assert_eq!(range.last(), Some(u128::MAX - 1));
        assert_eq!(range.iter().next_back(), Some(u128::MAX - 1));
        assert!(range.contains(u128::MAX - 1));
        assert!(!range.contains(u128::MAX));
    }

    #[test]
    fn test_unsigned_descending() {
        let range = IntegralRange::new(200u8, 0, -64).unwrap();
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![200, 136, 72, 8]);
        assert_eq!(cursor_walk(&range), vec![200, 136, 72, 8]);
    }

    #[test]
    fn test_get_and_contains() {
        let range = IntegralRange::new(-5, 20, 5).unwrap();
        assert_eq!(range.get(0), Some(-5));
        assert_eq!(range.get(4), Some(15));
        assert_eq!(range.get(5), None);

        assert!(range.contains(-5));
        assert!(range.contains(10));
        assert!(!range.contains(11));
        assert!(!range.contains(20));
        assert!(!range.contains(-10));

        let down = IntegralRange::new(9, -9, -6).unwrap(); // 9, 3, -3
        assert!(down.contains(-3));
        assert!(!down.contains(-9));
        assert!(!down.contains(0));
    }

    #[test]
    fn test_begin_restarts() {
        let range = IntegralRange::new(1, 10, 2).unwrap();
        let mut first = range.begin();
        first.advance();
        first.advance();
        assert_eq!(first.get(), 5);
        assert_eq!(range.begin().get(), 1);

        let mut iter = range.iter();
        iter.next();
        assert_eq!(range.iter().next(), Some(1));
    }

    #[test]
    fn test_cursor_and_iterator_agree() {
        let range = IntegralRange::new(3u16, 1000, 7).unwrap();
        let via_iter: Vec<u16> = range.iter().collect();
        assert_eq!(via_iter, cursor_walk(&range));
        assert_eq!(via_iter.len() as u128, range.length());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = IntegralRange::new(0, 9, 3).unwrap();
        let copy = original;
        let mut iter = copy.iter();
        iter.next();
        iter.next();

        assert_eq!(copy, original);
        assert_eq!(copy.start(), original.start());
        assert_eq!(copy.stop(), original.stop());
        assert_eq!(copy.step(), original.step());
        assert_eq!(copy.size(), original.size());
        assert_eq!(copy.length(), original.length());
        assert_eq!(original.iter().collect::<Vec<_>>(), vec![0, 3, 6]);
    }

    #[test]
    fn test_default_is_empty() {
        let range: IntegralRange<i32> = Default::default();
        assert!(range.is_empty());
        assert_eq!(range.start(), 0);
        assert_eq!(range.stop(), 0);
        assert_eq!(range.step(), 0);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(IntegralRange::from((2, 6)), IntegralRange::between(2, 6));
        assert_eq!(IntegralRange::from(6..2), IntegralRange::between(6, 2));
        assert_eq!(
            IntegralRange::try_from((0, 10, 5)),
            IntegralRange::new(0, 10, 5)
        );
        assert!(IntegralRange::<i32>::try_from((0, 10, -5)).is_err());
    }

    #[test]
    fn test_into_iterator() {
        let range = IntegralRange::to(3);
        let mut count = 0;
        for value in &range {
            assert_eq!(value, count);
            count += 1;
        }
        assert_eq!(count, 3);

        let total: i32 = range.into_iter().sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_traits_display_debug() {
        let range = IntegralRange::new(10, 0, -2).unwrap();
        assert_eq!(format!("{}", range), "[10, 0) by -2");
        assert_eq!(
            format!("{:?}", range),
            "IntegralRange { start: 10, stop: 0, step: -2, size: 10, length: 5 }"
        );
    }

    #[test]
    fn test_random_ranges_match_reference() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..2_000 {
            let start: i16 = rng.random_range(i16::MIN..=i16::MAX);
            let stop: i16 = rng.random_range(i16::MIN..=i16::MAX);
            let magnitude: i16 = rng.random_range(1..=300);
            let step = if start <= stop { magnitude } else { -magnitude };

            let range = IntegralRange::new(start, stop, step).unwrap();
            let expected = reference(start as i64, stop as i64, range.step() as i64);
            let actual: Vec<i64> = range.iter().map(i64::from).collect();

            assert_eq!(actual, expected, "range {}", range);
            assert_eq!(range.length(), expected.len() as u128);
            assert_eq!(range.size(), (stop as i64 - start as i64).unsigned_abs() as u128);
            assert_eq!(cursor_walk(&range).len(), expected.len());

            if let Some(&last) = expected.last() {
                let step = range.step() as i64;
                if step > 0 {
                    assert!(last < stop as i64 && last + step >= stop as i64);
                } else {
                    assert!(last > stop as i64 && last + step <= stop as i64);
                }
            }
        }
    }

    #[test]
    fn test_random_invalid_steps_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..1_000 {
            let start: i32 = rng.random_range(-1_000..=1_000);
            let stop: i32 = rng.random_range(-1_000..=1_000);
            if start == stop {
                continue;
            }
            let magnitude: i32 = rng.random_range(0..=50);
            // Zero or pointing away from `stop`.
            let step = if start < stop { -magnitude } else { magnitude };
            assert!(IntegralRange::new(start, stop, step).is_err());
        }
    }
}
