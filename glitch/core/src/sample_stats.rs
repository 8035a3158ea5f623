// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{sample, Random, SampleMode};
use serde::Serialize;

/// Summary of repeated draws from one range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleStats {
    pub mode: SampleMode,
    pub low: f64,
    pub high: f64,
    pub count: usize,
    /// `None` until at least one draw has been recorded
    pub min_seen: Option<f64>,
    pub max_seen: Option<f64>,
    pub below_midpoint: usize,
    pub fractional: usize,
    pub mean: f64,
}

impl SampleStats {
    pub fn new(a: f64, b: f64, mode: SampleMode) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            mode,
            low,
            high,
            count: 0,
            min_seen: None,
            max_seen: None,
            below_midpoint: 0,
            fractional: 0,
            mean: 0.0,
        }
    }

    /// Draws `count` values and records each of them.
    pub fn collect<R: Random + ?Sized>(
        random: &R,
        a: f64,
        b: f64,
        mode: SampleMode,
        count: usize,
    ) -> Self {
        let mut stats = Self::new(a, b, mode);
        for _ in 0..count {
            stats.record(sample(random, a, b, mode));
        }
        stats
    }

    pub fn record(&mut self, value: f64) {
        self.count += 1;
        self.min_seen = Some(self.min_seen.map_or(value, |m| m.min(value)));
        self.max_seen = Some(self.max_seen.map_or(value, |m| m.max(value)));
        if value < self.midpoint() {
            self.below_midpoint += 1;
        }
        if value.fract() != 0.0 {
            self.fractional += 1;
        }
        let n = self.count as f64;
        let delta = value - self.mean;
        if delta.is_finite() {
            self.mean += delta / n;
        } else {
            self.mean += value / n - self.mean / n;
        }
    }

    pub fn midpoint(&self) -> f64 {
        self.low / 2.0 + self.high / 2.0
    }

    pub fn below_midpoint_ratio(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.below_midpoint as f64 / self.count as f64
    }
}
