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

//! # Integral Ranges
//!
//! Lazy, evenly spaced integer sequences `start, start + step, …` that stop
//! before reaching `stop`, in either direction.
//!
//! ## Submodules
//!
//! - `integral_range`: The immutable `IntegralRange<T>` value type with its
//!   constructors (`to`, `between`, `new`, `to_with_step`), derived `size` and
//!   `length`, random access, membership and conversions from tuples and
//!   `std::ops::Range`.
//! - `cursor`: `RangeCursor<T>`, the forward-only position returned by
//!   `begin()`/`end()`, which clamps at the stop bound when advanced.
//! - `iter`: `IntegralRangeIter<T>`, implementing `Iterator`,
//!   `DoubleEndedIterator`, `ExactSizeIterator` and `FusedIterator`.
//! - `error`: `StepDirectionError<T>`, returned when a step points away from
//!   the stop bound.
//!
//! ## Usage
//!
//! ```rust
//! use stride_core::range::integral_range::IntegralRange;
//!
//! let evens: Vec<u32> = IntegralRange::new(0, 10, 2).unwrap().into_iter().collect();
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//!
//! let countdown: Vec<i32> = IntegralRange::between(3, 0).into_iter().collect();
//! assert_eq!(countdown, vec![3, 2, 1]);
//! ```

pub mod cursor;
pub mod error;
pub mod integral_range;
pub mod iter;
