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

/// Error returned when a non-zero step points away from the stop bound.
///
/// A range from `start` to `stop` can only be walked with a positive step
/// when `start < stop` and with a negative step when `start > stop`. The
/// check happens at construction time, so iteration itself never fails.
///
/// # Examples
///
/// ```rust
/// # use stride_core::range::integral_range::IntegralRange;
/// # use stride_core::num::integral::Direction;
///
/// let err = IntegralRange::new(0, 10, -1).unwrap_err();
/// assert_eq!(err.expected(), Direction::Ascending);
/// assert_eq!(
///     err.to_string(),
///     "invalid step direction: step -1 cannot advance from 0 to 10 (step must be positive)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepDirectionError<T>
where
    T: Integral,
{
    start: T,
    stop: T,
    step: T::Step,
}

impl<T> StepDirectionError<T>
where
    T: Integral,
{
    #[inline]
    pub(crate) fn new(start: T, stop: T, step: T::Step) -> Self {
        Self { start, stop, step }
    }

    /// Returns the start bound of the rejected range.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the stop bound of the rejected range.
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Returns the rejected step.
    #[inline]
    pub fn step(&self) -> T::Step {
        self.step
    }

    /// Returns the direction the step would have needed to follow.
    #[inline]
    pub fn expected(&self) -> Direction {
        Direction::between(self.start, self.stop)
    }
}

impl<T> std::fmt::Display for StepDirectionError<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let requirement = match self.expected() {
            Direction::Ascending => "step must be positive",
            Direction::Descending => "step must be negative",
            Direction::Empty => "range is empty",
        };
        write!(
            f,
            "invalid step direction: step {} cannot advance from {} to {} ({})",
            self.step, self.start, self.stop, requirement
        )
    }
}

impl<T> std::error::Error for StepDirectionError<T> where T: Integral {}
