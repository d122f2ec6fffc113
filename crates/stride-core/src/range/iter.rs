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

use crate::num::integral::{Direction, Integral};
use std::iter::FusedIterator;

/// An iterator over the values of an `IntegralRange`.
///
/// Values are addressed by their index in the sequence, so both ends can be
/// consumed and `nth`/`nth_back` skip in constant time. The remaining count
/// is tracked in `u128` and is exact for every primitive integer type.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::integral_range::IntegralRange;
///
/// let range = IntegralRange::new(10, 0, -2).unwrap();
/// let values: Vec<_> = range.iter().collect();
/// assert_eq!(values, vec![10, 8, 6, 4, 2]);
///
/// let reversed: Vec<_> = range.iter().rev().collect();
/// assert_eq!(reversed, vec![2, 4, 6, 8, 10]);
/// ```
#[derive(Clone)]
pub struct IntegralRangeIter<T>
where
    T: Integral,
{
    start: T,
    direction: Direction,
    step_magnitude: u128,
    front: u128,
    back: u128,
}

impl<T> IntegralRangeIter<T>
where
    T: Integral,
{
    #[inline]
    pub(crate) fn new(start: T, direction: Direction, step_magnitude: u128, length: u128) -> Self {
        Self {
            start,
            direction,
            step_magnitude,
            front: 0,
            back: length,
        }
    }

    /// Returns the exact number of values not yet yielded.
    ///
    /// Unlike [`ExactSizeIterator::len`], this never truncates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stride_core::range::integral_range::IntegralRange;
    ///
    /// let mut iter = IntegralRange::to(4).iter();
    /// assert_eq!(iter.remaining(), 4);
    /// iter.next();
    /// assert_eq!(iter.remaining(), 3);
    /// ```
    #[inline]
    pub fn remaining(&self) -> u128 {
        self.back - self.front
    }

    #[inline(always)]
    fn value_at(&self, index: u128) -> T {
        // index < length, so index * step < size <= u128::MAX.
        self.start.offset(index * self.step_magnitude, self.direction)
    }
}

impl<T> Iterator for IntegralRangeIter<T>
where
    T: Integral,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let value = self.value_at(self.front);
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = n as u128;
        if skip < self.remaining() {
            self.front += skip;
            self.next()
        } else {
            self.front = self.back;
            None
        }
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntegralRangeIter<T>
where
    T: Integral,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.value_at(self.back))
        } else {
            None
        }
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let skip = n as u128;
        if skip < self.remaining() {
            self.back -= skip;
            self.next_back()
        } else {
            self.back = self.front;
            None
        }
    }
}

impl<T> ExactSizeIterator for IntegralRangeIter<T>
where
    T: Integral,
{
    fn len(&self) -> usize {
        usize::try_from(self.remaining())
            .expect("IntegralRangeIter: remaining length exceeds usize::MAX")
    }
}

impl<T> FusedIterator for IntegralRangeIter<T> where T: Integral {}

impl<T> std::fmt::Debug for IntegralRangeIter<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegralRangeIter")
            .field("start", &self.start)
            .field("direction", &self.direction)
            .field("step_magnitude", &self.step_magnitude)
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
