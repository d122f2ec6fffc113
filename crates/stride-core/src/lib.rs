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

//! # Stride Core
//!
//! Integral ranges with signed steps: the `range(start, stop, step)`
//! construct, generic over every primitive integer type and exact at the
//! limits of each type.
//!
//! ## Modules
//!
//! - `num`: The `Integral` trait tying each integer type to its signed step
//!   type, with overflow-free `u128` distance and offset arithmetic, and the
//!   `Direction` of travel between two values.
//! - `range`: The `IntegralRange<T>` value type, its `RangeCursor<T>`
//!   begin/end cursors, the `IntegralRangeIter<T>` iterator and the
//!   `StepDirectionError<T>` construction error.
//!
//! ## Purpose
//!
//! Counted loops written by hand tend to get the exclusive bound, the
//! direction or the arithmetic at the type limits wrong. An `IntegralRange`
//! validates its step once at construction and then iterates without any
//! further failure mode.
//!
//! ```rust
//! use stride_core::range::integral_range::IntegralRange;
//!
//! let range = IntegralRange::new(i8::MAX, i8::MIN, -100).unwrap();
//! assert_eq!(range.size(), 255);
//! assert_eq!(range.iter().collect::<Vec<_>>(), vec![127, 27, -73]);
//! ```

pub mod num;
pub mod range;
