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

//! # Range Cursors
//!
//! A `RangeCursor` is a forward-only position inside an `IntegralRange`,
//! obtained from `IntegralRange::begin` or `IntegralRange::end`. It is the
//! explicit counterpart to the `Iterator` returned by `IntegralRange::iter`:
//! callers hold two cursors and advance one until it compares equal to the
//! other.
//!
//! ```rust
//! # use stride_core::range::integral_range::IntegralRange;
//!
//! let range = IntegralRange::new(0, 7, 2).unwrap();
//! let (mut cursor, end) = (range.begin(), range.end());
//!
//! let mut seen = Vec::new();
//! while cursor != end {
//!     seen.push(cursor.get());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![0, 2, 4, 6]);
//! ```
//!
//! Advancing never steps over the stop bound. When the remaining distance to
//! `stop` is at most one step, the cursor lands exactly on `stop`, so the
//! loop above terminates after `length()` advances even though `6 + 2 != 7`.

use crate::num::integral::{Direction, Integral};

/// A read-only, forward-only position within an integral range.
///
/// Cursors hold their position, the range's stop bound and its step by
/// value, so they are independent of the range they came from. Two cursors
/// are equal when their positions are equal; the step is not compared.
#[derive(Clone, Copy)]
pub struct RangeCursor<T>
where
    T: Integral,
{
    position: T,
    stop: T,
    step: T::Step,
}

impl<T> RangeCursor<T>
where
    T: Integral,
{
    #[inline]
    pub(crate) fn new(position: T, stop: T, step: T::Step) -> Self {
        Self {
            position,
            stop,
            step,
        }
    }

    /// Returns the value at the current position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::between(3, 6);
    /// assert_eq!(range.begin().get(), 3);
    /// assert_eq!(range.end().get(), 6);
    /// ```
    #[inline]
    pub fn get(&self) -> T {
        self.position
    }

    /// Returns the step applied by [`RangeCursor::advance`].
    #[inline]
    pub fn step(&self) -> T::Step {
        self.step
    }

    /// Returns `true` once the cursor has reached the stop bound.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.stop
    }

    /// Advances the cursor by one step and returns it (pre-increment).
    ///
    /// The cursor lands on the stop bound if one more step would reach or
    /// cross it. Advancing an exhausted cursor has no effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::new(10, 0, -4).unwrap();
    /// let mut cursor = range.begin();
    /// assert_eq!(cursor.advance().get(), 6);
    /// assert_eq!(cursor.advance().get(), 2);
    /// assert_eq!(cursor.advance().get(), 0);
    /// assert!(cursor.is_exhausted());
    /// assert_eq!(cursor.advance().get(), 0);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        let remaining = self.position.distance(self.stop);
        let step = T::step_magnitude(self.step);
        if remaining <= step {
            self.position = self.stop;
        } else {
            let direction = Direction::between(self.position, self.stop);
            self.position = self.position.offset(step, direction);
        }
        self
    }

    /// Advances the cursor by one step and returns its previous state
    /// (post-increment).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let range = IntegralRange::to(3u8);
    /// let mut cursor = range.begin();
    /// let previous = cursor.advance_post();
    /// assert_eq!(previous.get(), 0);
    /// assert_eq!(cursor.get(), 1);
    /// ```
    #[inline]
    pub fn advance_post(&mut self) -> Self {
        let previous = *self;
        self.advance();
        previous
    }
}

impl<T> PartialEq for RangeCursor<T>
where
    T: Integral,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for RangeCursor<T> where T: Integral {}

impl<T> std::fmt::Debug for RangeCursor<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCursor")
            .field("position", &self.position)
            .field("stop", &self.stop)
            .field("step", &self.step)
            .finish()
    }
}

impl<T> std::fmt::Display for RangeCursor<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.position)
    }
}
