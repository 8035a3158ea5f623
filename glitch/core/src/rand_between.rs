// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded random draws.
//!
//! Every draw takes exactly one value from a [`Random`] source, normalizes
//! the bounds so their order does not matter, and never leaves the closed
//! interval they describe.

use crate::{FastrandRandom, Random, SampleMode};

/// Draws a value between `min` and `max` from the process-wide source.
///
/// With `decimal == false` and whole-number bounds the result is a whole
/// number and both bounds are reachable. Bounds may be given in either order.
pub fn rand_between(min: f64, max: f64, decimal: bool) -> f64 {
    rand_between_with(&FastrandRandom, min, max, decimal)
}

/// Same as [`rand_between`] with an explicit entropy source.
pub fn rand_between_with<R: Random + ?Sized>(random: &R, min: f64, max: f64, decimal: bool) -> f64 {
    sample(random, min, max, SampleMode::infer(min, max, decimal))
}

/// Draws a value in the closed range spanned by `a` and `b` using `mode`.
///
/// Integer mode rounds fractional bounds inward; if no whole number lies
/// between them the draw falls back to fractional so the bounds still hold.
/// Non-finite bounds return NaN without consuming entropy.
pub fn sample<R: Random + ?Sized>(random: &R, a: f64, b: f64, mode: SampleMode) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }
    let (low, high) = if a <= b { (a, b) } else { (b, a) };

    if mode == SampleMode::Integer {
        let (int_low, int_high) = (low.ceil(), high.floor());
        if int_low <= int_high {
            let width = int_high + 1.0 - int_low;
            let draw = if width.is_finite() {
                (random.f64() * width).floor() + int_low
            } else {
                interpolate(int_low, int_high, random.f64()).floor()
            };
            return draw.max(int_low).min(int_high);
        }
    }

    let width = high - low;
    let draw = if width.is_finite() {
        low + random.f64() * width
    } else {
        interpolate(low, high, random.f64())
    };
    draw.max(low).min(high)
}

/// Point at `t` between `low` and `high` without forming `high - low`.
fn interpolate(low: f64, high: f64, t: f64) -> f64 {
    low * (1.0 - t) + high * t
}

/// Whole number in the closed range spanned by `a` and `b`.
///
/// Exact for bounds within `f64`'s 53-bit integer range.
pub fn rand_int<R: Random + ?Sized>(random: &R, a: i64, b: i64) -> i64 {
    sample(random, a as f64, b as f64, SampleMode::Integer) as i64
}

/// Uniform index into a collection of `len` items, `None` when empty.
pub fn pick_index<R: Random + ?Sized>(random: &R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(sample(random, 0.0, (len - 1) as f64, SampleMode::Integer) as usize)
}
