// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scripted entropy for deterministic tests.
//!
//! Part of the public API so code that takes a [`Random`] can pin exact
//! draws in its own tests, including the extremes `0.0` and [`ONE_BELOW`].
//! Not meant as a production source.

use crate::Random;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Largest `f64` strictly below one.
pub const ONE_BELOW: f64 = 1.0 - f64::EPSILON / 2.0;

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Values are clamped into `[0, 1)` on construction and NaN becomes zero.
/// An empty script always draws zero.
#[derive(Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, ONE_BELOW) })
            .collect();
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl Random for ScriptedRandom {
    fn f64(&self) -> f64 {
        let idx = self.cursor.fetch_add(1, Ordering::SeqCst);
        if self.values.is_empty() {
            return 0.0;
        }
        self.values[idx % self.values.len()]
    }
}
