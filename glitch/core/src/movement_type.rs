// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{pick_index, Random};
use serde::{Deserialize, Serialize};

/// General direction a glitch drifts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Random,
    Up,
    Down,
}

impl MovementType {
    pub const ALL: [MovementType; 3] = [MovementType::Random, MovementType::Up, MovementType::Down];

    pub fn pick<R: Random + ?Sized>(random: &R) -> Self {
        let idx = pick_index(random, Self::ALL.len()).unwrap_or(0);
        Self::ALL[idx]
    }

    /// Pixels added to `top` before jitter.
    pub fn drift(self) -> f64 {
        match self {
            MovementType::Random => 0.0,
            MovementType::Up => -1.0,
            MovementType::Down => 1.0,
        }
    }
}
