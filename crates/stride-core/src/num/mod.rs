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

//! # Numeric Foundations
//!
//! Integer-centric building blocks shared by the range types.
//!
//! ## Submodules
//!
//! - `integral`: The `Integral` trait implemented for all primitive integers,
//!   pairing each type with its same-width signed step type and exposing
//!   overflow-free `u128` distance and offset operations, plus the
//!   `Direction` of travel between two values.
//!
//! ## Motivation
//!
//! Ranges that touch the extremes of their integer type are exactly where
//! naive `stop - start` arithmetic overflows. Routing every distance through
//! a single wide accumulator keeps the range code generic and correct at the
//! boundaries without per-type special cases.

pub mod integral;
