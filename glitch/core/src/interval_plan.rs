// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{sample, Glitch, Random, SampleMode, TimingConfig};
use serde::Serialize;
use std::time::Duration;

/// Period in milliseconds for a repeating update.
///
/// Without `max_ms` the period is exactly `min_ms`; otherwise it is drawn
/// from the closed range between the two.
pub fn interval_ms<R: Random + ?Sized>(random: &R, min_ms: u64, max_ms: Option<u64>) -> u64 {
    let max_ms = max_ms.unwrap_or(min_ms);
    sample(random, min_ms as f64, max_ms as f64, SampleMode::Integer) as u64
}

/// Periods a UI layer would schedule for one glitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalPlan {
    pub movement_change_ms: u64,
    pub move_ms: u64,
    /// Absent for glitches that never blink.
    pub blink_ms: Option<u64>,
    pub blink_duration_ms: u64,
    pub style_change_ms: u64,
}

impl IntervalPlan {
    pub fn draw<R: Random + ?Sized>(random: &R, timing: &TimingConfig, glitch: &Glitch) -> Self {
        let movement_change_ms = interval_ms(
            random,
            timing.movement_change_ms.0,
            Some(timing.movement_change_ms.1),
        );
        let move_ms = interval_ms(random, glitch.speed_ms(), None);
        let blink_ms = glitch
            .is_blinking()
            .then(|| interval_ms(random, timing.blink_ms.0, Some(timing.blink_ms.1)));
        let style_change_ms =
            interval_ms(random, timing.style_change_ms.0, Some(timing.style_change_ms.1));

        Self {
            movement_change_ms,
            move_ms,
            blink_ms,
            blink_duration_ms: timing.blink_duration_ms,
            style_change_ms,
        }
    }

    pub fn movement_change(&self) -> Duration {
        Duration::from_millis(self.movement_change_ms)
    }

    pub fn movement(&self) -> Duration {
        Duration::from_millis(self.move_ms)
    }

    pub fn blink(&self) -> Option<Duration> {
        self.blink_ms.map(Duration::from_millis)
    }

    pub fn blink_duration(&self) -> Duration {
        Duration::from_millis(self.blink_duration_ms)
    }

    pub fn style_change(&self) -> Duration {
        Duration::from_millis(self.style_change_ms)
    }
}
